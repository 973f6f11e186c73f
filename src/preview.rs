use base64::Engine;
use findme_client::UploadedPhoto;

/// Data URL of the selected photo, for showing it inline before searching
pub fn photo_data_url(photo: &UploadedPhoto) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(&photo.bytes);
    format!("data:{};base64,{}", photo.declared_type.mime(), b64)
}

/// Human readable file size (B, KB, MB)
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findme_client::PhotoIntake;

    #[test]
    fn test_data_url_uses_declared_type() {
        let photo = PhotoIntake::accept("dot.png", vec![0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(photo_data_url(&photo), "data:image/png;base64,iVBORw==");

        let photo = PhotoIntake::accept("dot.JPEG", vec![0xff, 0xd8]).unwrap();
        assert!(photo_data_url(&photo).starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}

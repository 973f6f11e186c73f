//! Validation of a user's file selection before it can be searched.
//!
//! Only the file name is checked. Whether the bytes decode as an image is
//! left to the backend.

use crate::models::{PhotoType, UploadedPhoto};

/// Reasons a file selection is not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The file has an extension outside jpg/jpeg/png
    UnsupportedType(String),
    /// The file name has no extension at all
    MissingExtension(String),
    /// Reading the selected file returned no data
    Empty(String),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::UnsupportedType(name) => write!(
                f,
                "{} is not a supported photo (allowed: {})",
                name,
                PhotoType::EXTENSIONS.join(", ")
            ),
            IntakeError::MissingExtension(name) => {
                write!(f, "{} has no file extension", name)
            }
            IntakeError::Empty(name) => {
                write!(f, "{} could not be read (no data received)", name)
            }
        }
    }
}

impl std::error::Error for IntakeError {}

pub struct PhotoIntake;

impl PhotoIntake {
    /// Value for the `accept` attribute of a file input
    pub fn accept_filter() -> String {
        PhotoType::EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Turn a selected file into an [`UploadedPhoto`].
    ///
    /// `name` may be a full path; only its basename is kept.
    pub fn accept(name: &str, bytes: Vec<u8>) -> Result<UploadedPhoto, IntakeError> {
        let filename = basename(name).to_string();

        let ext = match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
            _ => return Err(IntakeError::MissingExtension(filename)),
        };

        let declared_type = PhotoType::from_extension(ext)
            .ok_or_else(|| IntakeError::UnsupportedType(filename.clone()))?;

        if bytes.is_empty() {
            return Err(IntakeError::Empty(filename));
        }

        log::info!("Accepted photo {} ({} bytes)", filename, bytes.len());

        Ok(UploadedPhoto {
            bytes,
            filename,
            declared_type,
        })
    }
}

fn basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions_any_case() {
        for name in ["me.jpg", "me.JPEG", "Me.Png"] {
            let photo = PhotoIntake::accept(name, vec![1, 2, 3]).unwrap();
            assert_eq!(photo.filename, name);
            assert_eq!(photo.bytes, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_keeps_only_basename() {
        let photo = PhotoIntake::accept("/home/runner/race/finish.jpg", vec![0]).unwrap();
        assert_eq!(photo.filename, "finish.jpg");
        assert_eq!(photo.declared_type, PhotoType::Jpg);

        let photo = PhotoIntake::accept("C:\\Users\\runner\\selfie.png", vec![0]).unwrap();
        assert_eq!(photo.filename, "selfie.png");
        assert_eq!(photo.declared_type, PhotoType::Png);
    }

    #[test]
    fn test_rejects_other_types() {
        assert_eq!(
            PhotoIntake::accept("clip.gif", vec![0]),
            Err(IntakeError::UnsupportedType("clip.gif".to_string()))
        );
        assert_eq!(
            PhotoIntake::accept("photo.jpg.exe", vec![0]),
            Err(IntakeError::UnsupportedType("photo.jpg.exe".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert!(matches!(
            PhotoIntake::accept("photo", vec![0]),
            Err(IntakeError::MissingExtension(_))
        ));
        assert!(matches!(
            PhotoIntake::accept(".png", vec![0]),
            Err(IntakeError::MissingExtension(_))
        ));
        assert!(matches!(
            PhotoIntake::accept("photo.", vec![0]),
            Err(IntakeError::MissingExtension(_))
        ));
    }

    #[test]
    fn test_rejects_empty_file() {
        let err = PhotoIntake::accept("me.jpg", Vec::new()).unwrap_err();
        assert_eq!(err, IntakeError::Empty("me.jpg".to_string()));
        assert_eq!(err.to_string(), "me.jpg could not be read (no data received)");
    }

    #[test]
    fn test_does_not_inspect_content() {
        let photo = PhotoIntake::accept("not-really.png", b"hello".to_vec()).unwrap();
        assert_eq!(photo.declared_type, PhotoType::Png);
    }

    #[test]
    fn test_accept_filter() {
        assert_eq!(PhotoIntake::accept_filter(), ".jpg,.jpeg,.png");
    }
}

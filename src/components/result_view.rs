use crate::presenter::{Presentation, Tone};
use dioxus::prelude::*;

#[component]
pub fn ResultView(presentation: Presentation) -> Element {
    let (icon, colors) = match presentation.tone {
        Tone::Success => ("✅", "background: #d4edda; color: #155724;"),
        Tone::Warning => ("⚠️", "background: #fff3cd; color: #856404;"),
        Tone::Info => ("ℹ️", "background: #d1ecf1; color: #0c5460;"),
        Tone::Error => ("❌", "background: #f8d7da; color: #721c24;"),
    };

    rsx! {
        div {
            class: "card {presentation.class}",
            style: "padding: 12px; border-radius: 4px; {colors}",
            p { style: "margin: 0; font-weight: 600;", "{icon} {presentation.headline}" }
            if let Some(detail) = presentation.detail.clone() {
                p { style: "margin: 8px 0 0 0; font-size: 14px;", "{detail}" }
            }
            if !presentation.links.is_empty() {
                ul {
                    class: "outcome-links",
                    style: "margin: 8px 0 0 0; padding-left: 20px; font-size: 14px;",
                    // backend order, never re-sorted
                    for (i, link) in presentation.links.iter().enumerate() {
                        li { key: "{i}",
                            a { href: "{link}", target: "_blank", "{link}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::album::{AlbumImage, Sheet};

/// One open spread of the book: a left and a right page.
#[component]
pub fn FlipSheet(sheet: Sheet, index: usize) -> Element {
    let left_key = slot_key(&sheet.left, "left");
    let right_key = slot_key(&sheet.right, "right");

    rsx! {
        div { class: "sheet",
            PageSlot {
                key: "{left_key}",
                image: sheet.left.clone(),
                number: index * 2 + 1,
                side: "left",
            }
            PageSlot {
                key: "{right_key}",
                image: sheet.right.clone(),
                number: index * 2 + 2,
                side: "right",
            }
        }
    }
}

// Keyed per image so load state does not leak between sheets.
fn slot_key(image: &Option<AlbumImage>, side: &str) -> String {
    match image {
        Some(image) => format!("{side}-{}", image.id),
        None => format!("{side}-empty"),
    }
}

#[component]
fn PageSlot(image: Option<AlbumImage>, number: usize, side: String) -> Element {
    let mut loaded = use_signal(|| false);
    let mut failed = use_signal(|| false);

    rsx! {
        div { class: "page page-{side}",
            div { class: "page-content",
                match image {
                    Some(image) if !failed() => rsx! {
                        if !loaded() {
                            div { class: "page-placeholder",
                                div { class: "spinner spinner-small" }
                            }
                        }
                        img {
                            class: if loaded() { "page-image page-image-loaded" } else { "page-image" },
                            src: "{image.url}",
                            alt: "{image.alt}",
                            onload: move |_| loaded.set(true),
                            onerror: move |_| failed.set(true),
                        }
                    },
                    // A broken image degrades to the empty-page look
                    // without touching the rest of the sheet.
                    _ => rsx! {
                        div { class: "page-empty",
                            p { "Empty page" }
                        }
                    },
                }
            }
            div { class: "page-number", "{number}" }
        }
    }
}

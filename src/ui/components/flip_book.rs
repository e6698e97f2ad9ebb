use dioxus::prelude::*;

use crate::album::{AlbumImage, BookView, FlipDirection, Navigator, SheetList};
use crate::ui::context::use_flip_duration;

use super::flip_page::FlipSheet;

/// Interactive page-flip book over an album's images.
///
/// The flip itself is timer-driven: an accepted intent puts the
/// navigator into its animating state and a sleep task commits the
/// transition once the configured duration elapses. The token handed
/// out by the navigator makes the commit exactly-once; a timer that
/// survives an album reload finds a bumped epoch and does nothing.
#[component]
pub fn FlipBook(images: Vec<AlbumImage>) -> Element {
    let flip_duration = use_flip_duration();

    let sheets = use_memo(use_reactive!(|images| SheetList::build(&images)));
    let mut nav = use_signal(|| Navigator::new(sheets.peek().len()));

    // New sheet list (album changed) resets navigation and invalidates
    // any in-flight flip timer.
    use_effect(move || {
        let count = sheets().len();
        nav.write().reset(count);
    });

    let flip = use_callback(move |direction: FlipDirection| {
        let token = match direction {
            FlipDirection::Forward => nav.write().go_next(),
            FlipDirection::Backward => nav.write().go_previous(),
        };
        if let Some(token) = token {
            spawn(async move {
                tokio::time::sleep(flip_duration).await;
                nav.write().complete(token);
            });
        }
    });

    if sheets.read().is_empty() {
        return rsx! {
            EmptyAlbum {}
        };
    }

    let view = BookView::project(&sheets.read(), &nav.read());
    let visible_index = nav.read().visible_index();
    let target_index = nav.read().target_index();

    rsx! {
        div {
            class: "flipbook",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |event: KeyboardEvent| {
                // Handled keys must not scroll the page.
                match event.key() {
                    Key::ArrowRight => {
                        event.prevent_default();
                        flip.call(FlipDirection::Forward);
                    }
                    Key::ArrowLeft => {
                        event.prevent_default();
                        flip.call(FlipDirection::Backward);
                    }
                    Key::Character(c) if c == " " => {
                        event.prevent_default();
                        flip.call(FlipDirection::Forward);
                    }
                    _ => {}
                }
            },
            div { class: "book",
                div { class: "book-base",
                    div { class: "book-spine book-spine-left" }
                    div { class: "book-spine book-spine-right" }
                }
                div { class: "page-stack" }
                FlipSheet { sheet: view.current.clone(), index: visible_index }
                if let Some(incoming) = view.incoming.clone() {
                    div {
                        class: if view.direction == FlipDirection::Forward { "leaf leaf-forward" } else { "leaf leaf-backward" },
                        FlipSheet { sheet: incoming, index: target_index }
                    }
                }
            }
            div { class: "book-controls",
                button {
                    class: "nav-button",
                    disabled: !view.can_previous,
                    onclick: move |_| flip.call(FlipDirection::Backward),
                    "‹ Previous"
                }
                div { class: "page-indicator",
                    span { class: "page-indicator-text", "{view.indicator}" }
                    div { class: "page-dots",
                        for dot in view.dots.iter() {
                            div {
                                key: "{dot.index}",
                                class: if dot.active { "dot dot-active" } else { "dot" },
                            }
                        }
                    }
                }
                button {
                    class: "nav-button",
                    disabled: !view.can_next,
                    onclick: move |_| flip.call(FlipDirection::Forward),
                    "Next ›"
                }
            }
        }
    }
}

#[component]
fn EmptyAlbum() -> Element {
    rsx! {
        div { class: "empty-album",
            p { class: "empty-album-title", "No images found" }
            p { class: "empty-album-subtitle", "This album appears to be empty" }
        }
    }
}

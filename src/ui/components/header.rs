use dioxus::desktop::use_window;
use dioxus::prelude::*;

use crate::ui::Route;

/// Fixed album header with back navigation, the active album code and a
/// fullscreen toggle.
#[component]
pub fn Header(code: String) -> Element {
    let window = use_window();
    let mut fullscreen = use_signal(|| false);

    rsx! {
        header { class: "album-header",
            button {
                class: "header-back",
                onclick: move |_| {
                    navigator().push(Route::CodeEntry {});
                },
                "‹ Back"
            }
            div { class: "header-title",
                h1 { "Digital Memory Album" }
                span { class: "header-code", "#{code}" }
            }
            button {
                class: "header-fullscreen",
                title: if fullscreen() { "Exit fullscreen" } else { "Fullscreen" },
                onclick: move |_| {
                    let next = !fullscreen();
                    window.set_fullscreen(next);
                    fullscreen.set(next);
                },
                "⛶"
            }
        }
    }
}

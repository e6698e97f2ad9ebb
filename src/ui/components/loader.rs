use dioxus::prelude::*;

/// Full-screen loading overlay with a spinner and message.
#[component]
pub fn Loader(message: String) -> Element {
    rsx! {
        div { class: "loader-overlay",
            div { class: "glass-card loader-card",
                div { class: "spinner" }
                p { "{message}" }
            }
        }
    }
}

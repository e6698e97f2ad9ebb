use dioxus::prelude::*;
use tracing::warn;

use crate::album::{format_code_input, is_valid_code};
use crate::ui::context::use_store;
use crate::ui::Route;

use super::loader::Loader;

/// Code entry page: the viewer types the 6-digit code printed on their
/// album card and is taken to the album on success.
#[component]
pub fn CodeEntry() -> Element {
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut validating = use_signal(|| false);
    let store = use_store();

    let submit = use_callback(move |_: ()| {
        let value = code.read().clone();
        if !is_valid_code(&value) {
            error.set(Some("Please enter a valid 6-digit album code".to_string()));
            return;
        }

        validating.set(true);
        error.set(None);
        let store = store.clone();
        spawn(async move {
            match store.validate_album(&value).await {
                Ok(true) => {
                    navigator().push(Route::Album { code: value });
                }
                Ok(false) => {
                    error.set(Some(
                        "Album not found. Please check your code and try again.".to_string(),
                    ));
                }
                Err(e) => {
                    warn!("album code validation failed: {e}");
                    error.set(Some(
                        "Unable to connect. Please check your internet connection.".to_string(),
                    ));
                }
            }
            validating.set(false);
        });
    });

    rsx! {
        div { class: "code-entry",
            if validating() {
                Loader { message: "Validating album code..." }
            }
            div { class: "glass-card code-entry-card",
                h1 { class: "code-entry-title", "Digital Memory Album" }
                p { class: "code-entry-subtitle",
                    "Enter your 6-digit album code to access your memories"
                }
                label { class: "code-entry-label", r#for: "album-code", "Album Code" }
                input {
                    id: "album-code",
                    class: "code-input",
                    placeholder: "000000",
                    inputmode: "numeric",
                    maxlength: "6",
                    value: "{code}",
                    disabled: validating(),
                    onmounted: move |element| {
                        spawn(async move {
                            let _ = element.set_focus(true).await;
                        });
                    },
                    oninput: move |event: FormEvent| {
                        code.set(format_code_input(&event.value()));
                        if error.read().is_some() {
                            error.set(None);
                        }
                    },
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }
                if let Some(message) = error() {
                    div { class: "error-banner",
                        p { "{message}" }
                    }
                }
                button {
                    class: "primary-button",
                    disabled: !is_valid_code(&code.read()) || validating(),
                    onclick: move |_| submit.call(()),
                    "Access Album"
                }
                p { class: "code-entry-footer", "Need help? Contact your album creator" }
            }
        }
    }
}

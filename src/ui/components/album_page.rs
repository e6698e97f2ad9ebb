use dioxus::prelude::*;
use tracing::warn;

use crate::album::is_valid_code;
use crate::store::StoreError;
use crate::ui::context::use_store;
use crate::ui::Route;

use super::flip_book::FlipBook;
use super::header::Header;
use super::loader::Loader;

/// Album page: checks the code format, fetches the image list for the
/// code and hands it to the flip book.
#[component]
pub fn Album(code: ReadSignal<String>) -> Element {
    let store = use_store();

    // A malformed code in the address goes back to code entry.
    use_effect(move || {
        if !is_valid_code(&code()) {
            navigator().replace(Route::CodeEntry {});
        }
    });

    let images_resource = {
        let store = store.clone();
        use_resource(move || {
            let code = code();
            let store = store.clone();
            async move {
                if !is_valid_code(&code) {
                    // The redirect is underway; skip the doomed request.
                    return Err(StoreError::NotFound);
                }
                store.fetch_album_images(&code).await
            }
        })
    };

    if !is_valid_code(&code.read()) {
        return rsx! {
            Loader { message: "Loading your album..." }
        };
    }

    rsx! {
        div { class: "album-page",
            Header { code: code() }
            main { class: "album-main",
                match images_resource.value().read().as_ref() {
                    None => rsx! {
                        Loader { message: "Loading your album..." }
                    },
                    Some(Err(e)) => rsx! {
                        AlbumLoadError { message: friendly_message(e) }
                    },
                    Some(Ok(images)) => rsx! {
                        FlipBook { images: images.clone() }
                    },
                }
            }
        }
    }
}

fn friendly_message(error: &StoreError) -> String {
    match error {
        StoreError::NotFound => {
            "Album not found. Please check your code and try again.".to_string()
        }
        StoreError::Empty => "This album is empty".to_string(),
        StoreError::Request(e) => {
            warn!("album fetch failed: {e}");
            "Unable to load album. Please check your internet connection.".to_string()
        }
    }
}

#[component]
fn AlbumLoadError(message: String) -> Element {
    rsx! {
        div { class: "glass-card album-error",
            h2 { "Oops!" }
            p { "{message}" }
            button {
                class: "primary-button",
                onclick: move |_| {
                    navigator().push(Route::CodeEntry {});
                },
                "Try Another Code"
            }
        }
    }
}

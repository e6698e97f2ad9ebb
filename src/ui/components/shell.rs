use dioxus::prelude::*;

use crate::ui::Route;

/// Layout component wrapping every page in the app background.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            Outlet::<Route> {}
        }
    }
}

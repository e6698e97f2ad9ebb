use dioxus::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::store::StoreClient;
use crate::ui::context::AppContext;
use crate::ui::{Route, MAIN_CSS};

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(|| {
        let config = Config::load();
        AppContext {
            store: StoreClient::new(&config),
            flip_duration: config.flip_duration(),
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

pub mod app;
pub mod components;
pub mod context;

pub use app::*;
pub use components::*;
pub use context::{use_flip_duration, use_store, AppContext};

// Library exports for integration tests and reusable components

pub mod album;
pub mod config;
pub mod store;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

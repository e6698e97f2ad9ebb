pub mod album_page;
pub mod app;
pub mod code_entry;
pub mod flip_book;
pub mod flip_page;
pub mod header;
pub mod loader;
pub mod shell;

pub use album_page::Album;
pub use app::App;
pub use code_entry::CodeEntry;
pub use flip_book::FlipBook;
pub use flip_page::FlipSheet;
pub use header::Header;
pub use loader::Loader;
pub use shell::Shell;

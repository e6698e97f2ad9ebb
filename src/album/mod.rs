pub mod code;
pub mod model;
pub mod navigation;
pub mod view;

pub use code::{format_code_input, is_valid_code};
pub use model::{AlbumImage, Sheet, SheetList};
pub use navigation::{FlipDirection, FlipToken, Navigator};
pub use view::{BookView, PageDot};

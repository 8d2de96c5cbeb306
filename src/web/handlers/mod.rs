//! HTML page handlers.

pub mod delete;
pub mod index;
pub mod shorten;

pub use delete::delete_handler;
pub use index::index_handler;
pub use shorten::shorten_handler;

pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::{pad_right, truncate_chars};

pub mod config;
pub mod core;
pub mod text;

pub use core::converter::{convert, convert_text};
pub use core::greek_to_latin::greek_to_latin;
pub use core::latin_to_greek::{latin_to_greek, InvalidLetterError};
pub use text::{process_text, segment, Token};

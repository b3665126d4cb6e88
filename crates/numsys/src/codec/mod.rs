//! Text encoding and decoding of integers.
//!
//! The parser and formatter share the digit alphabet and the per-system set
//! of legal characters; [`convert`] composes the two.

pub mod alphabet;
pub mod charset;
pub mod convert;
pub mod format;
pub mod parse;

pub use alphabet::{digit_char, digit_value, is_separator, max_digit, SEPARATORS};
pub use charset::ValidCharSet;
pub use convert::convert;
pub use format::{digit_count, format};
pub use parse::parse;

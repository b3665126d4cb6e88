//! Integer parsing and formatting in arbitrary number systems.
//!
//! A number system is a base from 1 (unary tally) to 36 plus one of four
//! sign-encoding schemes. This crate converts between `i64` and the text form
//! of a number in any such system, and between two systems directly.
//!
//! # Quick Start
//!
//! ```rust
//! use numsys::{convert, format, parse, NumberSystem, SignScheme};
//!
//! let twos = NumberSystem::new(2, SignScheme::TwosComplement).unwrap();
//!
//! assert_eq!(parse("1111", twos).unwrap(), -1);
//! assert_eq!(format(-5, twos).unwrap(), "1011");
//! assert_eq!(
//!     convert("ff", NumberSystem::HEXADECIMAL, NumberSystem::BINARY).unwrap(),
//!     "11111111"
//! );
//! ```
//!
//! # Sign schemes
//!
//! - [`SignScheme::SignedMarker`]: a leading `'-'` for negative values
//! - [`SignScheme::SignDigit`]: a leading `'0'` or maximum digit, plain magnitude
//! - [`SignScheme::OnesComplement`]: sign digit, magnitude digits complemented
//!   when negative
//! - [`SignScheme::TwosComplement`]: as ones' complement, with a +1 bias
//!
//! # Text form
//!
//! Whitespace and `'_'` are separators and may appear anywhere. Letter digits
//! are read in either case and written uppercase.
//!
//! # Modules
//!
//! - [`model`]: [`NumberSystem`] and [`SignScheme`]
//! - [`codec`]: alphabet, legal character sets, parse, format, convert
//! - [`error`]: Error types
//! - [`limits`]: Supported bases and ranges

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

pub use codec::{convert, format, parse, ValidCharSet};
pub use error::{ErrorKind, NumsysError};
pub use model::{NumberSystem, SignScheme};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

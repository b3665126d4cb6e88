//! Configuration types for number systems.
//!
//! A number system is a plain `(base, sign scheme)` value. It has no identity
//! and is validated by every operation that consumes it.

pub mod system;

pub use system::{NumberSystem, SignScheme};

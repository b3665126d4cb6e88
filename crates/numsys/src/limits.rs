//! Bounds of the supported number systems and integer range.

/// Smallest supported base (unary).
pub const MIN_BASE: u32 = 1;

/// Largest supported base (digits 0-9 then A-Z).
pub const MAX_BASE: u32 = 36;

/// Largest magnitude a decoded number may reach (`|i64::MIN|`).
pub const MAX_MAGNITUDE: u64 = i64::MIN.unsigned_abs();

/// Maximum number of digits a unary representation may have.
pub const MAX_UNARY_DIGITS: u64 = u32::MAX as u64;

/// Maximum number of magnitude digits in any positional base (base 2).
pub const MAX_DIGITS: usize = 64;

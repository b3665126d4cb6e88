//! Decoding of number text into a signed 64-bit integer.
//!
//! Digits are read from the end of the text toward the sign position and
//! summed with their positional weight. Every step is checked, so a value
//! outside the `i64` range is reported as [`NumsysError::MagnitudeOverflow`]
//! instead of wrapping.
//!
//! Under the sign-digit and complement schemes the first significant
//! character is a reserved sign digit. Any non-zero sign digit marks the
//! number negative, not only the base's maximum digit, so `"19"` and `"99"`
//! both decode to -9 in base 10 sign-digit. The formatter only ever writes
//! the maximum digit.

use crate::codec::alphabet::{digit_value, is_separator};
use crate::codec::charset::ValidCharSet;
use crate::error::NumsysError;
use crate::limits::MAX_MAGNITUDE;
use crate::model::{NumberSystem, SignScheme};

/// Positional sum of a magnitude, fed least-significant digit first.
#[derive(Debug)]
struct Accumulator {
    base: u64,
    magnitude: u64,
    /// Weight of the next digit; `None` once it no longer fits in 64 bits.
    weight: Option<u64>,
}

impl Accumulator {
    fn new(base: u32, seed: u64) -> Self {
        Self {
            base: u64::from(base),
            magnitude: seed,
            weight: Some(1),
        }
    }

    /// Adds the next more significant digit.
    ///
    /// Zero digits never overflow, so leading zeros of any length are fine.
    #[inline]
    fn push(&mut self, digit: u32) -> Result<(), NumsysError> {
        if digit != 0 {
            let term = self
                .weight
                .and_then(|w| w.checked_mul(u64::from(digit)))
                .ok_or(NumsysError::MagnitudeOverflow)?;
            self.magnitude = self
                .magnitude
                .checked_add(term)
                .filter(|m| *m <= MAX_MAGNITUDE)
                .ok_or(NumsysError::MagnitudeOverflow)?;
        }
        self.weight = self.weight.and_then(|w| w.checked_mul(self.base));
        Ok(())
    }

    /// Applies the sign. `|i64::MIN|` is only representable when negative.
    fn finish(self, negative: bool) -> Result<i64, NumsysError> {
        let value = if negative {
            0i64.checked_sub_unsigned(self.magnitude)
        } else {
            i64::try_from(self.magnitude).ok()
        };
        value.ok_or(NumsysError::MagnitudeOverflow)
    }
}

/// Parses the text form of a number in the given system.
///
/// Separators (whitespace and `'_'`) are ignored anywhere and letter digits
/// are case-insensitive. A unary text is a tally: each `'0'` counts one.
///
/// # Errors
///
/// - [`NumsysError::InvalidBase`] if the system's base is outside `[1, 36]`
/// - [`NumsysError::EmptyInput`] if a positional text has no digits
/// - [`NumsysError::InvalidCharacter`] / [`NumsysError::MisplacedSign`] for
///   malformed text
/// - [`NumsysError::MagnitudeOverflow`] if the value does not fit in `i64`
pub fn parse(text: &str, sys: NumberSystem) -> Result<i64, NumsysError> {
    parse_checked(text, sys).inspect_err(|err| {
        tracing::debug!(base = sys.base, scheme = %sys.scheme, %err, "rejected number text");
    })
}

fn parse_checked(text: &str, sys: NumberSystem) -> Result<i64, NumsysError> {
    sys.validate()?;
    let valid = ValidCharSet::new(sys)?;

    let Some((sign_index, sign_char)) = text.char_indices().find(|&(_, c)| !is_separator(c))
    else {
        return if sys.is_unary() {
            Ok(0)
        } else {
            Err(NumsysError::EmptyInput)
        };
    };

    // `body_start` is the byte offset of the first character that may hold
    // a magnitude digit.
    let marker = sys.scheme == SignScheme::SignedMarker && sign_char == '-';
    let (negative, body_start) = if sys.has_sign_digit() {
        if sign_char == '-' {
            return Err(NumsysError::MisplacedSign { index: sign_index });
        }
        let sign_value = digit_value(sign_char)
            .filter(|_| valid.contains(sign_char))
            .ok_or(NumsysError::InvalidCharacter {
                char: sign_char,
                index: sign_index,
            })?;
        (sign_value != 0, sign_index + sign_char.len_utf8())
    } else if marker {
        (true, sign_index + 1)
    } else {
        (false, sign_index)
    };

    let complement = negative && sys.scheme.is_complement();
    let seed = u64::from(negative && sys.scheme == SignScheme::TwosComplement);
    let mut acc = Accumulator::new(sys.base, seed);
    let mut digits = 0usize;

    for (offset, c) in text[body_start..].char_indices().rev() {
        let index = body_start + offset;
        if c == '-' {
            return Err(NumsysError::MisplacedSign { index });
        }
        if !valid.contains(c) {
            return Err(NumsysError::InvalidCharacter { char: c, index });
        }
        if is_separator(c) {
            continue;
        }
        let value = digit_value(c).ok_or(NumsysError::InvalidCharacter { char: c, index })?;
        let value = if sys.is_unary() {
            1
        } else if complement {
            sys.base - 1 - value
        } else {
            value
        };
        acc.push(value)?;
        digits += 1;
    }

    if marker && digits == 0 {
        return Err(NumsysError::EmptyInput);
    }
    acc.finish(negative)
}

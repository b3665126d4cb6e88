//! Encoding of a signed 64-bit integer into number text.

use crate::codec::alphabet::{max_digit, symbol};
use crate::error::NumsysError;
use crate::limits::{MAX_DIGITS, MAX_UNARY_DIGITS};
use crate::model::{NumberSystem, SignScheme};

/// Returns the number of magnitude digits needed to write `magnitude`.
///
/// Zero takes one digit in positional bases and none in unary, where the
/// count is the magnitude itself and is capped at `u32::MAX`.
pub fn digit_count(magnitude: u64, base: u32) -> Result<usize, NumsysError> {
    if base == 1 {
        if magnitude > MAX_UNARY_DIGITS {
            return Err(NumsysError::UnaryLengthOverflow { digits: magnitude });
        }
        return usize::try_from(magnitude)
            .map_err(|_| NumsysError::UnaryLengthOverflow { digits: magnitude });
    }

    let base = u64::from(base);
    let mut rest = magnitude;
    let mut count = 0;
    loop {
        rest /= base;
        count += 1;
        if rest == 0 {
            return Ok(count);
        }
    }
}

/// Formats `value` in the given number system.
///
/// Letter digits are written uppercase. A sign position is written for every
/// value under the sign-digit and complement schemes (`'0'` when
/// non-negative, the base's maximum digit when negative) and only for
/// negative values under [`SignScheme::SignedMarker`].
///
/// Unary output is a run of `|value|` `'0'` characters with no sign, so a
/// negative value formats the same as its absolute value.
///
/// # Errors
///
/// - [`NumsysError::InvalidBase`] if the system's base is outside `[1, 36]`
/// - [`NumsysError::UnaryLengthOverflow`] if a unary run would exceed
///   `u32::MAX` digits
/// - [`NumsysError::OutOfMemory`] if the output cannot be allocated
pub fn format(value: i64, sys: NumberSystem) -> Result<String, NumsysError> {
    format_checked(value, sys).inspect_err(|err| {
        tracing::debug!(value, base = sys.base, scheme = %sys.scheme, %err, "failed to format value");
    })
}

fn format_checked(value: i64, sys: NumberSystem) -> Result<String, NumsysError> {
    sys.validate()?;

    let negative = value < 0;
    let magnitude = value.unsigned_abs();
    let count = digit_count(magnitude, sys.base)?;
    let sign_position = !sys.is_unary() && (sys.scheme != SignScheme::SignedMarker || negative);

    let mut out = String::new();
    out.try_reserve_exact(count + usize::from(sign_position))
        .map_err(|_| NumsysError::OutOfMemory {
            context: "output text",
        })?;

    if sys.is_unary() {
        out.extend(std::iter::repeat_n('0', count));
        return Ok(out);
    }

    if sign_position {
        out.push(match (negative, sys.scheme) {
            (false, _) => '0',
            (true, SignScheme::SignedMarker) => '-',
            (true, _) => max_digit(sys.base),
        });
    }

    // Two's complement stores |value| - 1, complemented.
    let complement = negative && sys.scheme.is_complement();
    let mut rest = if negative && sys.scheme == SignScheme::TwosComplement {
        magnitude - 1
    } else {
        magnitude
    };

    let base = u64::from(sys.base);
    let mut digits = [0u32; MAX_DIGITS];
    for slot in digits[..count].iter_mut().rev() {
        *slot = (rest % base) as u32;
        rest /= base;
    }

    for &digit in &digits[..count] {
        let digit = if complement { sys.base - 1 - digit } else { digit };
        out.push(symbol(digit));
    }
    Ok(out)
}

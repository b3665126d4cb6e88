//! Digit alphabet shared by the parser and formatter.
//!
//! Digit values 0-35 map to `0-9` then `A-Z`. Letters are accepted in either
//! case on input and always written uppercase.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::limits::MAX_BASE;

/// Characters that carry no value and may appear anywhere in a number.
pub const SEPARATORS: [char; 7] = ['\t', '\n', '\x0B', '\x0C', '\r', ' ', '_'];

/// Output symbol for each digit value.
const UPPER: [char; MAX_BASE as usize] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Alternate input symbol for letter digits (values 10-35).
const LOWER: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

lazy_static! {
    /// All 62 input symbols mapped to their digit value.
    static ref VALUES: FxHashMap<char, u32> = {
        let mut map = FxHashMap::with_capacity_and_hasher(UPPER.len() + LOWER.len(), Default::default());
        for (value, &c) in UPPER.iter().enumerate() {
            map.insert(c, value as u32);
        }
        for (offset, &c) in LOWER.iter().enumerate() {
            map.insert(c, offset as u32 + 10);
        }
        map
    };
}

/// Returns the output symbol for a digit value, or `None` above 35.
#[inline]
pub fn digit_char(value: u32) -> Option<char> {
    UPPER.get(value as usize).copied()
}

/// Returns the output symbol for a digit value known to be below 36.
///
/// Callers hold digits produced by `% base` with a validated base.
#[inline]
pub(crate) fn symbol(value: u32) -> char {
    UPPER[value as usize]
}

/// Returns the digit value of a symbol in either case.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    VALUES.get(&c).copied()
}

/// Returns true for ignorable separator characters.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Returns the symbol of the largest digit in `base`.
///
/// Unary has a single digit, `'0'`. `base` must already be validated.
pub fn max_digit(base: u32) -> char {
    digit_char(base.saturating_sub(1)).unwrap_or('0')
}

/// Iterates over every accepted input symbol for digits below `base`,
/// uppercase before lowercase for letters.
pub fn symbols(base: u32) -> impl Iterator<Item = char> {
    let count = base.min(MAX_BASE) as usize;
    UPPER[..count]
        .iter()
        .copied()
        .chain(LOWER[..count.saturating_sub(10)].iter().copied())
}

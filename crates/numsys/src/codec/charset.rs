//! Set of characters legal in the text form of a number system.

use rustc_hash::FxHashSet;

use crate::codec::alphabet::{symbols, SEPARATORS};
use crate::error::NumsysError;
use crate::model::{NumberSystem, SignScheme};

/// Every character that may appear somewhere in a number of one system.
///
/// Membership alone does not make a text valid: the parser still rejects a
/// `'-'` outside the sign position.
#[derive(Debug, Clone)]
pub struct ValidCharSet {
    chars: FxHashSet<char>,
}

impl ValidCharSet {
    /// Builds the set for a number system: separators, both cases of every
    /// digit below the base, and `'-'` under [`SignScheme::SignedMarker`].
    pub fn new(sys: NumberSystem) -> Result<Self, NumsysError> {
        sys.validate()?;

        let letters = sys.base.saturating_sub(10) as usize;
        let capacity = SEPARATORS.len() + sys.base as usize + letters + 1;
        let mut chars = FxHashSet::default();
        chars
            .try_reserve(capacity)
            .map_err(|_| NumsysError::OutOfMemory {
                context: "valid character set",
            })?;

        chars.extend(SEPARATORS);
        chars.extend(symbols(sys.base));
        if sys.scheme == SignScheme::SignedMarker {
            chars.insert('-');
        }
        Ok(Self { chars })
    }

    /// Returns true if `c` may appear in a number of this system.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.chars.len()
    }
}

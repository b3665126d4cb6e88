//! Number system configuration: base and sign-encoding scheme.

use std::fmt;
use std::str::FromStr;

use crate::error::NumsysError;
use crate::limits::{MAX_BASE, MIN_BASE};

/// How the sign of a number is encoded in its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignScheme {
    /// A literal leading `'-'` marks negative numbers; non-negative numbers
    /// carry no sign character.
    SignedMarker,
    /// A reserved leading digit: `'0'` for non-negative, the base's maximum
    /// digit for negative. The remaining digits hold the plain magnitude.
    SignDigit,
    /// Reserved leading digit, remaining digits complemented to `base - 1`
    /// when negative.
    OnesComplement,
    /// Like [`SignScheme::OnesComplement`] with a +1 bias on the magnitude.
    TwosComplement,
}

impl SignScheme {
    /// All schemes, in code order.
    pub const ALL: [SignScheme; 4] = [
        SignScheme::SignedMarker,
        SignScheme::SignDigit,
        SignScheme::OnesComplement,
        SignScheme::TwosComplement,
    ];

    /// Returns the legacy flag code for this scheme.
    pub fn code(self) -> u8 {
        match self {
            SignScheme::SignedMarker => 1,
            SignScheme::SignDigit => 2,
            SignScheme::OnesComplement => 4,
            SignScheme::TwosComplement => 8,
        }
    }

    /// Converts a legacy flag code to a scheme.
    ///
    /// Exactly one flag must be set; combinations are rejected.
    pub fn from_code(code: u8) -> Result<Self, NumsysError> {
        match code {
            1 => Ok(SignScheme::SignedMarker),
            2 => Ok(SignScheme::SignDigit),
            4 => Ok(SignScheme::OnesComplement),
            8 => Ok(SignScheme::TwosComplement),
            _ => Err(NumsysError::InvalidScheme { code }),
        }
    }

    /// Returns the canonical name used by `Display` and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            SignScheme::SignedMarker => "signed-marker",
            SignScheme::SignDigit => "sign-digit",
            SignScheme::OnesComplement => "ones-complement",
            SignScheme::TwosComplement => "twos-complement",
        }
    }

    /// Returns true if negative magnitudes are digit-wise complemented.
    pub fn is_complement(self) -> bool {
        matches!(self, SignScheme::OnesComplement | SignScheme::TwosComplement)
    }
}

impl fmt::Display for SignScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignScheme {
    type Err = NumsysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signed-marker" | "marker" => Ok(SignScheme::SignedMarker),
            "sign-digit" | "digit" => Ok(SignScheme::SignDigit),
            "ones-complement" | "ones" => Ok(SignScheme::OnesComplement),
            "twos-complement" | "twos" => Ok(SignScheme::TwosComplement),
            _ => Err(NumsysError::UnknownScheme { name: s.to_string() }),
        }
    }
}

/// A textual integer encoding: a base in `[1, 36]` and a sign scheme.
///
/// Fields are public so a system can be written as a literal; operations
/// call [`NumberSystem::validate`] before using one, so an out-of-range base
/// never reaches the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSystem {
    pub base: u32,
    pub scheme: SignScheme,
}

impl NumberSystem {
    pub const BINARY: NumberSystem = NumberSystem::signed(2);
    pub const OCTAL: NumberSystem = NumberSystem::signed(8);
    pub const DECIMAL: NumberSystem = NumberSystem::signed(10);
    pub const HEXADECIMAL: NumberSystem = NumberSystem::signed(16);

    const fn signed(base: u32) -> Self {
        Self {
            base,
            scheme: SignScheme::SignedMarker,
        }
    }

    /// Creates a validated number system.
    pub fn new(base: u32, scheme: SignScheme) -> Result<Self, NumsysError> {
        let sys = Self { base, scheme };
        sys.validate()?;
        Ok(sys)
    }

    /// Creates a number system from a base and a legacy scheme flag code.
    pub fn from_raw(base: u32, scheme_code: u8) -> Result<Self, NumsysError> {
        Self::new(base, SignScheme::from_code(scheme_code)?)
    }

    /// Checks that the base is within `[1, 36]`.
    pub fn validate(&self) -> Result<(), NumsysError> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.base) {
            return Err(NumsysError::InvalidBase { base: self.base });
        }
        Ok(())
    }

    /// Returns true for the unary (tally) base.
    pub fn is_unary(&self) -> bool {
        self.base == 1
    }

    /// Returns true if the first significant character of every text in this
    /// system is a reserved sign digit.
    ///
    /// Unary never reserves one.
    pub fn has_sign_digit(&self) -> bool {
        !self.is_unary() && self.scheme != SignScheme::SignedMarker
    }
}

impl Default for NumberSystem {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for NumberSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base, self.scheme)
    }
}

impl FromStr for NumberSystem {
    type Err = NumsysError;

    /// Parses `"<base>"` or `"<base>:<scheme>"`, e.g. `"16"` or `"2:twos"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base_str, scheme) = match s.split_once(':') {
            Some((base, scheme)) => (base, scheme.parse()?),
            None => (s, SignScheme::SignedMarker),
        };
        let base: u32 = base_str
            .trim()
            .parse()
            .map_err(|_| NumsysError::InvalidSystemSyntax {
                input: s.to_string(),
            })?;
        Self::new(base, scheme)
    }
}

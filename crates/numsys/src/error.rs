//! Error types for number system parsing, formatting and configuration.

use thiserror::Error;

/// Coarse classification of every [`NumsysError`].
///
/// Collaborators that map failures to user-facing messages or process exit
/// codes only need to look at the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad configuration or malformed text.
    InvalidArgument,
    /// The value does not fit the supported integer range.
    Overflow,
    /// A buffer could not be allocated.
    OutOfMemory,
}

impl ErrorKind {
    /// Returns the short error code string (e.g., "EINVAL").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "EINVAL",
            ErrorKind::Overflow => "EOVERFLOW",
            ErrorKind::OutOfMemory => "ENOMEM",
        }
    }
}

/// Error returned by every parse, format and convert operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumsysError {
    // === Configuration ===
    #[error("[EINVAL] base {base} out of range [1, 36]")]
    InvalidBase { base: u32 },

    #[error("[EINVAL] invalid sign scheme code: {code:#x}")]
    InvalidScheme { code: u8 },

    #[error("[EINVAL] unknown sign scheme: {name:?}")]
    UnknownScheme { name: String },

    #[error("[EINVAL] malformed number system: {input:?} (expected <base> or <base>:<scheme>)")]
    InvalidSystemSyntax { input: String },

    // === Malformed text ===
    #[error("[EINVAL] number text contains no digits")]
    EmptyInput,

    #[error("[EINVAL] invalid character {char:?} at index {index}")]
    InvalidCharacter { char: char, index: usize },

    #[error("[EINVAL] '-' is not allowed at index {index}")]
    MisplacedSign { index: usize },

    // === Range ===
    #[error("[EOVERFLOW] magnitude exceeds the signed 64-bit range")]
    MagnitudeOverflow,

    #[error("[EOVERFLOW] unary representation needs {digits} digits (maximum {})", u32::MAX)]
    UnaryLengthOverflow { digits: u64 },

    // === Allocation ===
    #[error("[ENOMEM] failed to allocate {context}")]
    OutOfMemory { context: &'static str },
}

impl NumsysError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumsysError::MagnitudeOverflow | NumsysError::UnaryLengthOverflow { .. } => {
                ErrorKind::Overflow
            }
            NumsysError::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

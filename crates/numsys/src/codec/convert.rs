//! Conversion of number text between two systems.

use crate::codec::format::format;
use crate::codec::parse::parse;
use crate::error::NumsysError;
use crate::model::NumberSystem;

/// Re-encodes `text` from the `src` system into the `dest` system.
///
/// Equivalent to `format(parse(text, src)?, dest)`; the first error is
/// returned unchanged.
pub fn convert(text: &str, src: NumberSystem, dest: NumberSystem) -> Result<String, NumsysError> {
    let value = parse(text, src)?;
    let out = format(value, dest)?;
    tracing::trace!(%src, %dest, value, "converted number");
    Ok(out)
}

use std::io::Write;

use crate::error::AppResult;

/// Writes the response exactly as received.
///
/// # Errors
///
/// Returns the I/O error from writing or flushing `out`.
pub fn write_raw_response<W>(out: &mut W, raw: &[u8]) -> AppResult<()>
where
    W: Write,
{
    out.write_all(raw)?;
    out.flush()?;
    Ok(())
}

//! Pretty-printed JSON output files
//!
//! Files are UTF-8, indented by two spaces, with no trailing newline, and
//! replace any previous contents. Writes are not atomic: a crash mid-write
//! can leave a truncated file.

use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Render a value as two-space indented JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Overwrite `path` with the pretty JSON rendering of `value`
///
/// The value is rendered before the file is opened, so a serialization
/// failure leaves the existing file untouched. The parent directory must
/// already exist.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_pretty_json(value)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Async variant of [`write_pretty_json`] for use inside request handlers
pub async fn write_pretty_json_async<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_pretty_json(value)?;
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

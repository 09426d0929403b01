//! Seed file loading.
//!
//! A seed file is a JSON5 (or JSON) array of `{ description, status }`
//! objects. `status` may be omitted and defaults to `"incomplete"`.
//!
//! ```json5
//! [
//!   { description: "Implement the Model" },
//!   { description: "Write the README", status: "complete" },
//! ]
//! ```

use std::path::Path;

use tasklist_protocol::SeedEntry;
use tracing::debug;

use crate::error::Result;
use crate::persistence::read_config_file;

/// Reads the seed entries stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid seed list.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>> {
    let entries: Vec<SeedEntry> = read_config_file(path.as_ref())?;
    debug!(path = ?path.as_ref(), count = entries.len(), "loaded seed file");
    Ok(entries)
}

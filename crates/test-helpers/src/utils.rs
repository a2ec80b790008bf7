// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fs, io::Write, path::Path};

use serde_json::Value;
use tracing::trace;

/// Writes `doc` as pretty JSON to `path`, creating parent directories.
pub fn write_json_file(path: &Path, doc: &Value) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(serde_json::to_string_pretty(doc)?.as_bytes())?;
    trace!(path = %path.display(), "json file written");
    Ok(())
}

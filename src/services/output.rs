use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ProvisionError;
use crate::models::provisioned::ProvisioningResult;

/// Write the result as pretty-printed JSON, replacing `path` in one step.
///
/// The content goes to a temporary file next to `path` which is then renamed
/// over it, so readers never see a partially written file.
pub fn write_result(path: &Path, result: &ProvisioningResult) -> Result<(), ProvisionError> {
    let mut content = serde_json::to_string_pretty(result)?;
    content.push('\n');

    let write_err = |source: io::Error| ProvisionError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    info!("Provisioning result written to {}", path.display());
    Ok(())
}

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    let failed = |source| Error::PersistenceFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failed)?;
    }
    fs::write(path, contents).map_err(failed)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

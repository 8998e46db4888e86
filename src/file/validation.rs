use std::path::Path;

use anyhow::{Result, bail};
use fast_glob::glob_match;

use crate::config::EXCLUDED_PATTERNS;
use crate::file::operations::get_file_info;

/// Checks a path against the discovery exclusion patterns.
///
/// Matches both bare names (`target`) and glob patterns (`*.rs`) against
/// every component of the normalized path, so files inside an excluded
/// directory are excluded too.
pub fn is_excluded(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let path_str = path_str.replace('\\', "/");
    let path_str = path_str.strip_prefix("./").unwrap_or(&path_str);

    for pattern in EXCLUDED_PATTERNS {
        for component in path_str.split('/') {
            if glob_match(pattern, component) {
                return true;
            }
        }
    }

    false
}

/// Validates a source or output path before processing.
///
/// With `must_exist`, the path has to name a non-empty regular file. Without
/// it, the path must be free; overwrite confirmation is the prompt layer's
/// job, triggered by the error this returns.
pub fn validate_path(path: &Path, must_exist: bool) -> Result<()> {
    let info = get_file_info(path)?;
    if must_exist {
        match info {
            Some(info) if info.size == 0 => {
                bail!("file is empty: {}", path.display());
            }
            None => {
                bail!("file not found: {}", path.display());
            }
            _ => {}
        }
        if path.is_dir() {
            bail!("path is a directory: {}", path.display());
        }
    } else if info.is_some() {
        bail!("output file already exists: {}", path.display());
    }

    Ok(())
}

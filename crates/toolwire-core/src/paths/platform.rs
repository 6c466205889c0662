//! Platform-specific path resolution.
//!
//! Private helpers for locating the data root and normalizing user paths.
//! Public API is exposed through sibling modules.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "TOOLWIRE_DATA_DIR";

/// Get the root directory for application data (database, `.env`).
///
/// Resolution order:
/// 1. `TOOLWIRE_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/toolwire`)
///
/// The directory is created if it does not exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => normalize_user_path(&path)?,
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("toolwire"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Normalize a user-provided path: expand a leading `~` and resolve
/// relative paths against the current directory.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let path = match raw.strip_prefix('~') {
        Some("") => dirs::home_dir().ok_or(PathError::NoHomeDir)?,
        Some(rest) if rest.starts_with('/') => dirs::home_dir()
            .ok_or(PathError::NoHomeDir)?
            .join(rest.trim_start_matches('/')),
        _ => PathBuf::from(raw),
    };

    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(|e| PathError::NoWorkingDir(e.to_string()))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::DataDirOverride;
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honours_override() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested").join("toolwire");
        let _env = DataDirOverride::new(&root);

        assert_eq!(data_root().unwrap(), root);
        assert!(root.is_dir());
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_normalize_expands_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(normalize_user_path("~").unwrap(), home);
        assert_eq!(normalize_user_path("~/data").unwrap(), home.join("data"));
    }

    #[test]
    fn test_normalize_makes_relative_absolute() {
        let path = normalize_user_path("some/dir").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("some/dir"));
    }
}

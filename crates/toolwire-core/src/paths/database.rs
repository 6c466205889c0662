//! Database path resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the `SQLite` database inside the data root.
pub const DATABASE_FILE: &str = "toolwire.db";

/// Get the path to the toolwire database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE))
}

/// Location of the `.env` file that stores user overrides.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::DataDirOverride;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_lives_in_data_root() {
        let temp = tempdir().unwrap();
        let _env = DataDirOverride::new(temp.path());

        let path = database_path().unwrap();
        assert_eq!(path, temp.path().join("toolwire.db"));
        assert_eq!(env_file_path().unwrap(), temp.path().join(".env"));
    }
}

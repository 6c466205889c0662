//! Path utilities for toolwire data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use database::{DATABASE_FILE, database_path, env_file_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path};

//! Scoped override of the data-root variable for path tests.

use std::env;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::platform::DATA_DIR_ENV;

static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Points `TOOLWIRE_DATA_DIR` at a directory until dropped.
///
/// Holds a process-wide lock for its lifetime so tests touching the variable
/// run one at a time.
pub struct DataDirOverride {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirOverride {
    #[allow(unsafe_code)]
    pub fn new(dir: &Path) -> Self {
        let lock = DATA_DIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::var(DATA_DIR_ENV).ok();
        // SAFETY: every writer of this variable holds DATA_DIR_LOCK
        unsafe { env::set_var(DATA_DIR_ENV, dir) };
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held until this struct's fields drop
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(DATA_DIR_ENV, value) },
            None => unsafe { env::remove_var(DATA_DIR_ENV) },
        }
    }
}

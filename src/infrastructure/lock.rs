//! Build directory run lock
//!
//! One orchestration run owns the build directory (archives, scratch files)
//! exclusively. The lock is advisory and released when the guard drops.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Pk3Error, Pk3Result};

/// Exclusive lock held for the duration of a run
#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    pub const FILE_NAME: &'static str = ".pk3deploy.lock";

    /// Take the lock in `dir`, failing fast if another run holds it
    pub fn acquire(dir: &Path) -> Pk3Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        if file.try_lock_exclusive().is_err() {
            return Err(Pk3Error::Locked { path });
        }

        tracing::debug!(lock = %path.display(), "run lock acquired");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

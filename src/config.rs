use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = ".issueboard";
pub const STORE_FILE_NAME: &str = "board.db";

/// Walk up from `start` looking for a `.issueboard` directory.
pub fn find_data_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            bail!("Not an issueboard directory (or any parent). Run 'issueboard init' first.");
        }
    }
}

/// Data directory from an explicit override, else by searching upward.
pub fn resolve_data_dir(override_dir: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => bail!("Data directory {} does not exist", dir.display()),
        None => find_data_dir(cwd),
    }
}

pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE_NAME)
}

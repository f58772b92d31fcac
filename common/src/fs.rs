use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolves paths given on the command line.
pub trait PathExt: AsRef<Path> {
    /// Relative paths are taken from the current working directory. Absolute paths are returned
    /// unchanged.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;

        Ok(cwd.join(self))
    }
}

impl<T: AsRef<Path> + ?Sized> PathExt for T {}

//! File access used to load the version file

use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait for reading the raw contents of the version file
#[cfg_attr(test, automock)]
pub trait VersionFileReader: Send + Sync {
    /// Reads the whole file at `path`
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads the version file from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsVersionFileReader;

impl VersionFileReader for FsVersionFileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

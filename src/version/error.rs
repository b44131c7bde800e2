use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Failed to read version file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed version file {path:?}: {source}")]
    MalformedContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl VersionError {
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }

    pub fn is_malformed_content(&self) -> bool {
        matches!(self, Self::MalformedContent { .. })
    }
}

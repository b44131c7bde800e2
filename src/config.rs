use std::path::PathBuf;

// =============================================================================
// Version file lookup
// =============================================================================

/// Environment variable overriding the location of the version file
pub const VERSION_FILE_ENV: &str = "NUCLIO_VERSION_FILE";

/// Version file location used when `NUCLIO_VERSION_FILE` is unset or empty
pub const DEFAULT_VERSION_FILE_PATH: &str = "/etc/nuclio/version_info.json";

// =============================================================================
// Environment-derived descriptor (used by test fixtures)
// =============================================================================

pub const GIT_COMMIT_ENV: &str = "NUCLIO_VERSION_GIT_COMMIT";
pub const DEFAULT_GIT_COMMIT: &str = "c";

pub const LABEL_ENV: &str = "NUCLIO_LABEL";
pub const DEFAULT_LABEL: &str = "latest";

pub const ARCH_ENV: &str = "NUCLIO_ARCH";
pub const DEFAULT_ARCH: &str = "amd64";

pub const OS_ENV: &str = "NUCLIO_OS";
pub const DEFAULT_OS: &str = "linux";

/// Returns the path of the version file.
/// Uses $NUCLIO_VERSION_FILE if it is set and non-empty,
/// otherwise falls back to /etc/nuclio/version_info.json.
pub fn version_file_path() -> PathBuf {
    version_file_path_with_env(std::env::var(VERSION_FILE_ENV).ok())
}

/// Reads `key` from the environment, returning `default` when it is unset or empty.
pub fn env_or_default(key: &str, default: &str) -> String {
    value_or_default(std::env::var(key).ok(), default)
}

fn version_file_path_with_env(version_file: Option<String>) -> PathBuf {
    PathBuf::from(value_or_default(version_file, DEFAULT_VERSION_FILE_PATH))
}

fn value_or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

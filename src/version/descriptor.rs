//! Version descriptor record and its side-car file representation

use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{
    ARCH_ENV, DEFAULT_ARCH, DEFAULT_GIT_COMMIT, DEFAULT_LABEL, DEFAULT_OS, GIT_COMMIT_ENV,
    LABEL_ENV, OS_ENV, env_or_default,
};
use crate::version::embedded::RUNTIME_VERSION;

/// Identifies a build of the running binary.
///
/// Field names on the wire are fixed by the version file format: `label`,
/// `git_commit`, `os`, `arch` and `go_version`. Missing keys deserialize as
/// empty strings and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionDescriptor {
    /// Release identifier (e.g. a tag or "latest")
    pub label: String,
    /// Source control commit
    #[serde(rename = "git_commit")]
    pub revision: String,
    #[serde(rename = "os")]
    pub target_os: String,
    #[serde(rename = "arch")]
    pub target_arch: String,
    /// Toolchain used to build the binary
    #[serde(rename = "go_version")]
    pub runtime_version: String,
}

impl VersionDescriptor {
    pub fn new(
        label: impl Into<String>,
        revision: impl Into<String>,
        target_os: impl Into<String>,
        target_arch: impl Into<String>,
        runtime_version: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            revision: revision.into(),
            target_os: target_os.into(),
            target_arch: target_arch.into(),
            runtime_version: runtime_version.into(),
        }
    }

    /// Builds a descriptor from the `NUCLIO_*` environment variables, using
    /// fixed defaults for unset ones. The runtime version always comes from
    /// the toolchain that built this crate.
    pub fn from_env() -> Self {
        Self {
            label: env_or_default(LABEL_ENV, DEFAULT_LABEL),
            revision: env_or_default(GIT_COMMIT_ENV, DEFAULT_GIT_COMMIT),
            target_os: env_or_default(OS_ENV, DEFAULT_OS),
            target_arch: env_or_default(ARCH_ENV, DEFAULT_ARCH),
            runtime_version: RUNTIME_VERSION.to_string(),
        }
    }

    /// Parses the contents of a version file. Only a JSON object is accepted;
    /// arrays are rejected even though serde would map them positionally.
    pub fn from_json_slice(contents: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(contents)? {
            record @ Value::Object(_) => serde_json::from_value(record),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a version record object",
            )),
        }
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}/{}, {})",
            self.label, self.revision, self.target_os, self.target_arch, self.runtime_version
        )
    }
}

//! Resolution and caching of the running binary's version descriptor

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info, warn};

use crate::config::version_file_path;
use crate::version::descriptor::VersionDescriptor;
use crate::version::embedded::build_descriptor;
use crate::version::error::VersionError;
use crate::version::reader::{FsVersionFileReader, VersionFileReader};

static GLOBAL: Lazy<VersionInfoProvider> = Lazy::new(VersionInfoProvider::new);

/// Why a version file read did not populate the cache
enum Uncached {
    Failed(VersionError),
    Unlabelled(VersionDescriptor),
}

/// Owns the process version state.
///
/// Resolution order:
/// 1. the injected descriptor (linked in by the build or set explicitly)
/// 2. the descriptor cached from the version file
/// 3. the version file itself, re-read until it yields a labelled descriptor
///
/// Setting an injected descriptor always takes priority over a previously
/// cached file descriptor; the most recent setter wins.
pub struct VersionInfoProvider<R: VersionFileReader = FsVersionFileReader> {
    reader: R,
    version_file: Option<PathBuf>,
    injected: RwLock<Option<VersionDescriptor>>,
    cached: OnceCell<VersionDescriptor>,
}

impl VersionInfoProvider {
    /// Creates a provider reading from the filesystem, seeded with the
    /// descriptor linked in at build time (if any).
    pub fn new() -> Self {
        let provider = Self::with_reader(FsVersionFileReader);
        if let Some(descriptor) = build_descriptor() {
            provider.set_descriptor(descriptor);
        }
        provider
    }

    /// Process-wide provider shared by the whole application
    pub fn global() -> &'static VersionInfoProvider {
        &GLOBAL
    }
}

impl Default for VersionInfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: VersionFileReader> VersionInfoProvider<R> {
    /// Creates a provider with no injected descriptor
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            version_file: None,
            injected: RwLock::new(None),
            cached: OnceCell::new(),
        }
    }

    /// Reads the version file from `path` instead of consulting
    /// `NUCLIO_VERSION_FILE` on each read attempt.
    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = Some(path.into());
        self
    }

    /// Returns the current version descriptor.
    ///
    /// Never touches the disk once a descriptor is injected or a labelled one
    /// is cached. Read failures are returned as-is and leave the cache empty,
    /// so a later call retries the read. A file without a label is returned
    /// but not cached.
    pub fn resolve(&self) -> Result<VersionDescriptor, VersionError> {
        if let Some(descriptor) = self.injected_descriptor() {
            return Ok(descriptor);
        }

        let cached = self.cached.get_or_try_init(|| {
            let descriptor = self.read_version_file().map_err(Uncached::Failed)?;
            if descriptor.has_label() {
                Ok(descriptor)
            } else {
                Err(Uncached::Unlabelled(descriptor))
            }
        });

        match cached {
            Ok(descriptor) => Ok(descriptor.clone()),
            Err(Uncached::Unlabelled(descriptor)) => Ok(descriptor),
            Err(Uncached::Failed(err)) => Err(err),
        }
    }

    /// Overwrites the injected descriptor. A descriptor with an empty label
    /// clears it, re-enabling the version file fallback.
    pub fn set_descriptor(&self, descriptor: VersionDescriptor) {
        let descriptor = descriptor.has_label().then_some(descriptor);
        *self.injected.write().unwrap_or_else(PoisonError::into_inner) = descriptor;
    }

    /// Injects a descriptor built from the `NUCLIO_*` environment variables.
    /// The label always has a default, so the version file is no longer
    /// consulted afterwards.
    pub fn set_descriptor_from_env(&self) {
        self.set_descriptor(VersionDescriptor::from_env());
    }

    /// Removes the injected descriptor
    pub fn clear_descriptor(&self) {
        *self.injected.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Logs the resolved version, or a warning if it cannot be resolved.
    /// Never fails.
    pub fn log_resolution(&self) {
        match self.resolve() {
            Ok(version) => info!(?version, "Read version"),
            Err(err) => warn!(err = %err, "Failed to read version info"),
        }
    }

    fn injected_descriptor(&self) -> Option<VersionDescriptor> {
        self.injected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn read_version_file(&self) -> Result<VersionDescriptor, VersionError> {
        let path = self.version_file.clone().unwrap_or_else(version_file_path);
        debug!("Reading version file at {:?}", path);

        let contents = match self.reader.read(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(VersionError::FileAccess { path, source }),
        };

        let descriptor = match VersionDescriptor::from_json_slice(&contents) {
            Ok(descriptor) => descriptor,
            Err(source) => return Err(VersionError::MalformedContent { path, source }),
        };

        debug!("Read version {} from {:?}", descriptor, path);
        Ok(descriptor)
    }
}

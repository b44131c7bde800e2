//! Process-wide version metadata for Nuclio binaries.
//!
//! ```no_run
//! use nuclio_version::VersionInfoProvider;
//!
//! let provider = VersionInfoProvider::global();
//! provider.log_resolution();
//!
//! if let Ok(version) = provider.resolve() {
//!     println!("{version}");
//! }
//! ```

pub mod config;
pub mod version;

pub use version::descriptor::VersionDescriptor;
pub use version::error::VersionError;
pub use version::provider::VersionInfoProvider;
pub use version::reader::{FsVersionFileReader, VersionFileReader};

//! Version metadata for the running binary
//!
//! The descriptor is resolved from, in order of priority:
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │     Injected     │────▶│      Cached      │────▶│   Version file   │
//! │ (build / setter) │     │  (once per proc) │     │ (JSON, on disk)  │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`descriptor`]: The `VersionDescriptor` record and its JSON form
//! - [`embedded`]: Values linked in at build time
//! - [`error`]: Error types for version file resolution
//! - [`provider`]: `VersionInfoProvider`, which owns the process version state
//! - [`reader`]: File access trait used to load the version file

pub mod descriptor;
pub mod embedded;
pub mod error;
pub mod provider;
pub mod reader;

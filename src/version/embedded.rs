//! Values linked into the binary at build time

use crate::version::descriptor::VersionDescriptor;

/// Version of the toolchain that compiled this crate, captured by `build.rs`
pub const RUNTIME_VERSION: &str = env!("NUCLIO_RUSTC_VERSION");

const LABEL: Option<&str> = option_env!("NUCLIO_BUILD_LABEL");
const GIT_COMMIT: Option<&str> = option_env!("NUCLIO_BUILD_GIT_COMMIT");
const OS: Option<&str> = option_env!("NUCLIO_BUILD_OS");
const ARCH: Option<&str> = option_env!("NUCLIO_BUILD_ARCH");

/// Returns the descriptor injected by the build, if `NUCLIO_BUILD_LABEL` was
/// set when this crate was compiled.
pub fn build_descriptor() -> Option<VersionDescriptor> {
    build_descriptor_from(LABEL, GIT_COMMIT, OS, ARCH)
}

fn build_descriptor_from(
    label: Option<&str>,
    git_commit: Option<&str>,
    os: Option<&str>,
    arch: Option<&str>,
) -> Option<VersionDescriptor> {
    let label = label.filter(|label| !label.is_empty())?;

    Some(VersionDescriptor::new(
        label,
        git_commit.unwrap_or("unknown"),
        os.unwrap_or(std::env::consts::OS),
        arch.unwrap_or(std::env::consts::ARCH),
        RUNTIME_VERSION,
    ))
}

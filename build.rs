use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-env-changed=NUCLIO_BUILD_LABEL");
    println!("cargo:rerun-if-env-changed=NUCLIO_BUILD_GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=NUCLIO_BUILD_OS");
    println!("cargo:rerun-if-env-changed=NUCLIO_BUILD_ARCH");

    set_rustc_version();
}

fn set_rustc_version() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=NUCLIO_RUSTC_VERSION={}", rustc_version);
}

//! Build script for grocer
//!
//! Stamps each build with a sequence number and UTC timestamp.

use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let counter_path = PathBuf::from(manifest_dir).join("build_number.txt");

    let previous: u64 = fs::read_to_string(&counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    // A read-only checkout still builds; the number just doesn't advance
    if fs::write(&counter_path, build_number.to_string()).is_err() {
        println!("cargo:warning=could not update {}", counter_path.display());
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=GROCER_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=GROCER_BUILD_TIMESTAMP={}", timestamp);
}

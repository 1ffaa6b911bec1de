//! Build script for kcal
//!
//! Bumps the local build counter and embeds build metadata (number, timestamp, profile).

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

fn next_build_number(path: &Path) -> u64 {
    let previous = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    previous + 1
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new(BUILD_NUMBER_FILE);
    let build_number = next_build_number(counter_path);
    if let Err(e) = fs::write(counter_path, build_number.to_string()) {
        panic!("failed to write {}: {}", BUILD_NUMBER_FILE, e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=KCAL_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=KCAL_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=KCAL_BUILD_PROFILE={}", profile);
}

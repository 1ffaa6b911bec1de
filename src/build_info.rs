//! Build information
//!
//! Compile-time constants embedded by `build.rs`.

use serde::Serialize;

/// Local build counter
pub const BUILD_NUMBER: u64 = match option_env!("KCAL_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp (ISO 8601, UTC)
pub const BUILD_TIMESTAMP: &str = match option_env!("KCAL_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile the binary was built with (debug/release)
pub const BUILD_PROFILE: &str = match option_env!("KCAL_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build information for status output
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            build_profile: BUILD_PROFILE,
            description: DESCRIPTION,
        }
    }
}

/// Print the startup banner to stderr (stdout is reserved for MCP traffic)
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  kcal - calorie tracker");
    eprintln!("  Version: {} | Build: {} ({})", info.version, info.build_number, info.build_profile);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}

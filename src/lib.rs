//! kcal Library
//!
//! Food nutrition estimation and calorie tracking helpers.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

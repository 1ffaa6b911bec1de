//! kcal Tools module
//!
//! MCP tool implementations.

pub mod daily;
pub mod estimate;
pub mod profile;
pub mod status;

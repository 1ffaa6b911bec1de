//! Nutrition estimation
//!
//! Reference table, resolver and food analysis records.

pub mod analysis;
pub mod dataset;
pub mod reference;
pub mod resolver;

pub use analysis::FoodAnalysis;
pub use reference::{
    normalize, ReferenceEntry, ReferenceError, ReferenceResult, ReferenceTable,
    ReferenceTableBuilder,
};
pub use resolver::{Resolution, Resolver};

//! Nutrition resolver
//!
//! Maps a free-text food description to a nutrition estimate. The first
//! registered alias found as a substring of the (ASCII lower-cased)
//! description wins; when nothing matches the fixed default estimate is
//! returned. Resolution never fails.

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::reference::{normalize, ReferenceResult, ReferenceTable};
use crate::models::NutritionFact;

/// Outcome of a lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// An alias was found in the description
    Matched { alias: String, fact: NutritionFact },
    /// No alias matched; carries the default estimate
    Default { fact: NutritionFact },
}

impl Resolution {
    pub fn fact(&self) -> &NutritionFact {
        match self {
            Resolution::Matched { fact, .. } | Resolution::Default { fact } => fact,
        }
    }

    pub fn into_fact(self) -> NutritionFact {
        match self {
            Resolution::Matched { fact, .. } | Resolution::Default { fact } => fact,
        }
    }

    pub fn matched_alias(&self) -> Option<&str> {
        match self {
            Resolution::Matched { alias, .. } => Some(alias),
            Resolution::Default { .. } => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Resolution::Default { .. })
    }
}

/// Stateless resolver over a shared, immutable reference table
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<ReferenceTable>,
}

static BUILTIN_TABLE: OnceLock<Arc<ReferenceTable>> = OnceLock::new();

impl Resolver {
    pub fn new(table: ReferenceTable) -> Self {
        Self { table: Arc::new(table) }
    }

    pub fn from_shared(table: Arc<ReferenceTable>) -> Self {
        Self { table }
    }

    /// Resolver over a freshly built copy of the built-in dataset
    pub fn builtin() -> ReferenceResult<Self> {
        Ok(Self::new(ReferenceTable::builtin()?))
    }

    /// Resolver over the process-wide built-in table, initialized on first use.
    ///
    /// Threads racing on first use may each build a candidate table, but only
    /// one is published and every caller shares it.
    pub fn shared() -> ReferenceResult<Self> {
        if let Some(table) = BUILTIN_TABLE.get() {
            return Ok(Self::from_shared(Arc::clone(table)));
        }
        let candidate = Arc::new(ReferenceTable::builtin()?);
        let table = BUILTIN_TABLE.get_or_init(|| {
            tracing::debug!(entries = candidate.len(), "built-in reference table initialized");
            candidate
        });
        Ok(Self::from_shared(Arc::clone(table)))
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Resolve a description to a nutrition estimate
    pub fn resolve(&self, description: &str) -> NutritionFact {
        self.resolve_detailed(description).into_fact()
    }

    /// Resolve a description, reporting which alias (if any) matched
    pub fn resolve_detailed(&self, description: &str) -> Resolution {
        let normalized = normalize(description);

        let found = self
            .table
            .aliases()
            .find(|(alias, _)| normalized.contains(alias));

        match found {
            Some((alias, fact)) => {
                tracing::debug!(description, alias, food = %fact.name, "nutrition alias matched");
                Resolution::Matched {
                    alias: alias.to_string(),
                    fact: fact.clone(),
                }
            }
            None => {
                tracing::debug!(description, "no nutrition alias matched, using default estimate");
                Resolution::Default {
                    fact: NutritionFact::default_estimate(),
                }
            }
        }
    }
}

//! Reference table
//!
//! Ordered alias -> nutrition fact mapping. Registration order is match
//! priority, so the table keeps an explicit sequence of aliases instead of
//! relying on map iteration order. All validation happens while the table is
//! being built; a finished table is immutable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::dataset::BUILTIN;
use crate::models::{Nutrition, NutritionFact};

/// Reference table construction errors
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Duplicate alias '{alias}': already registered for '{existing}', cannot register for '{incoming}'")]
    DuplicateAlias {
        alias: String,
        existing: String,
        incoming: String,
    },

    #[error("Entry '{entry}' has an empty alias")]
    EmptyAlias { entry: String },

    #[error("Entry '{entry}' has no aliases")]
    NoAliases { entry: String },

    #[error("Reference entry name cannot be empty")]
    EmptyName,

    #[error("Entry '{entry}' has invalid {field}: {value} (must be finite and >= 0)")]
    InvalidValue {
        entry: String,
        field: &'static str,
        value: f64,
    },

    #[error("Failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for reference table construction
pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// Normalize text for matching: ASCII letters are lower-cased, everything
/// else (Thai and other scripts) is kept byte-for-byte.
pub fn normalize(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// One fact with every alias that resolves to it
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    pub fact: NutritionFact,
    /// Aliases in registration order, normalized
    pub aliases: Vec<String>,
}

/// Immutable, validated reference table
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    /// (alias, entry index) in priority order
    aliases: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// Build the table from the built-in dataset
    pub fn builtin() -> ReferenceResult<Self> {
        Ok(ReferenceTableBuilder::with_builtin()?.build())
    }

    /// Number of entries (distinct facts)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of registered aliases
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Aliases paired with their facts, in priority order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &NutritionFact)> {
        self.aliases
            .iter()
            .map(|(alias, idx)| (alias.as_str(), &self.entries[*idx].fact))
    }

    /// Exact alias lookup (ASCII case-insensitive)
    pub fn find_alias(&self, alias: &str) -> Option<&NutritionFact> {
        self.index
            .get(&normalize(alias))
            .map(|idx| &self.entries[*idx].fact)
    }

    /// Earliest registered alias contained in `alias`.
    ///
    /// Matching is first-registered-wins over substrings, so an alias added
    /// after the returned one can never be reached through resolution.
    pub fn shadowing_alias(&self, alias: &str) -> Option<&str> {
        let key = normalize(alias);
        self.aliases
            .iter()
            .map(|(existing, _)| existing.as_str())
            .find(|existing| key.contains(existing))
    }
}

/// Extension dataset file format
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceFile {
    entries: Vec<ReferenceFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceFileEntry {
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    aliases: Vec<String>,
}

/// Builder that validates every entry as it is registered
#[derive(Debug)]
pub struct ReferenceTableBuilder {
    table: ReferenceTable,
}

impl Default for ReferenceTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTableBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self {
            table: ReferenceTable {
                entries: Vec::new(),
                aliases: Vec::new(),
                index: HashMap::new(),
            },
        }
    }

    /// Builder pre-populated with the built-in dataset
    pub fn with_builtin() -> ReferenceResult<Self> {
        let mut builder = Self::new();
        for item in BUILTIN {
            builder.entry(item.name, item.nutrition, item.aliases)?;
        }
        Ok(builder)
    }

    /// Register a fact under one or more aliases.
    ///
    /// Nothing is added if any alias is rejected.
    pub fn entry<S: AsRef<str>>(
        &mut self,
        name: &str,
        nutrition: Nutrition,
        aliases: &[S],
    ) -> ReferenceResult<&mut Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReferenceError::EmptyName);
        }
        if aliases.is_empty() {
            return Err(ReferenceError::NoAliases { entry: name.to_string() });
        }
        if let Some((field, value)) = nutrition.invalid_field() {
            return Err(ReferenceError::InvalidValue {
                entry: name.to_string(),
                field,
                value,
            });
        }

        let mut normalized: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let alias = alias.as_ref();
            if alias.trim().is_empty() {
                return Err(ReferenceError::EmptyAlias { entry: name.to_string() });
            }
            let key = normalize(alias);
            if let Some(idx) = self.table.index.get(&key) {
                return Err(ReferenceError::DuplicateAlias {
                    alias: key,
                    existing: self.table.entries[*idx].fact.name.clone(),
                    incoming: name.to_string(),
                });
            }
            if normalized.contains(&key) {
                return Err(ReferenceError::DuplicateAlias {
                    alias: key,
                    existing: name.to_string(),
                    incoming: name.to_string(),
                });
            }
            normalized.push(key);
        }

        for key in &normalized {
            if let Some(existing) = self.table.shadowing_alias(key) {
                tracing::warn!(
                    entry = name,
                    alias = %key,
                    shadowed_by = existing,
                    "Alias can never match: earlier alias '{}' is contained in it",
                    existing
                );
            }
        }

        let idx = self.table.entries.len();
        for key in &normalized {
            self.table.index.insert(key.clone(), idx);
            self.table.aliases.push((key.clone(), idx));
        }
        self.table.entries.push(ReferenceEntry {
            fact: NutritionFact::new(name, nutrition),
            aliases: normalized,
        });
        Ok(self)
    }

    /// Append entries from a JSON extension dataset
    pub fn extend_from_json(&mut self, json: &str) -> ReferenceResult<&mut Self> {
        let file: ReferenceFile = serde_json::from_str(json)?;
        for item in file.entries {
            let nutrition = Nutrition::new(item.calories, item.protein, item.carbs, item.fat);
            self.entry(&item.name, nutrition, &item.aliases)?;
        }
        Ok(self)
    }

    /// Append entries from a JSON extension file on disk
    pub fn extend_from_file(&mut self, path: &Path) -> ReferenceResult<&mut Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_json(&json)
    }

    pub fn build(self) -> ReferenceTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> Nutrition {
        Nutrition::new(200.0, 4.0, 45.0, 0.5)
    }

    #[test]
    fn test_builtin_table_is_valid() {
        let table = ReferenceTable::builtin().unwrap();
        assert_eq!(table.len(), BUILTIN.len());
        let expected_aliases: usize = BUILTIN.iter().map(|e| e.aliases.len()).sum();
        assert_eq!(table.alias_count(), expected_aliases);
    }

    #[test]
    fn test_alias_order_follows_registration() {
        let mut builder = ReferenceTableBuilder::new();
        builder
            .entry("rice", rice(), &["rice", "ข้าว"])
            .unwrap()
            .entry("fried rice", Nutrition::new(250.0, 6.0, 40.0, 8.0), &["fried rice"])
            .unwrap();
        let table = builder.build();
        let order: Vec<&str> = table.aliases().map(|(alias, _)| alias).collect();
        assert_eq!(order, vec!["rice", "ข้าว", "fried rice"]);
    }

    #[test]
    fn test_duplicate_alias_across_entries_rejected() {
        let mut builder = ReferenceTableBuilder::new();
        builder.entry("rice", rice(), &["rice"]).unwrap();
        let err = builder
            .entry("other rice", Nutrition::new(1.0, 1.0, 1.0, 1.0), &["rice"])
            .unwrap_err();
        match err {
            ReferenceError::DuplicateAlias { alias, existing, incoming } => {
                assert_eq!(alias, "rice");
                assert_eq!(existing, "rice");
                assert_eq!(incoming, "other rice");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_alias_is_case_insensitive() {
        let mut builder = ReferenceTableBuilder::new();
        builder.entry("rice", rice(), &["Rice"]).unwrap();
        let err = builder.entry("rice again", rice(), &["RICE"]).unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateAlias { .. }));
    }

    #[test]
    fn test_duplicate_alias_within_entry_rejected() {
        let mut builder = ReferenceTableBuilder::new();
        let err = builder.entry("rice", rice(), &["rice", "rice"]).unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateAlias { .. }));
    }

    #[test]
    fn test_rejected_entry_leaves_table_unchanged() {
        let mut builder = ReferenceTableBuilder::new();
        builder.entry("rice", rice(), &["rice"]).unwrap();
        assert!(builder.entry("noodle", rice(), &["noodle", "rice"]).is_err());
        let table = builder.build();
        assert_eq!(table.len(), 1);
        assert!(table.find_alias("noodle").is_none());
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let mut builder = ReferenceTableBuilder::new();
        assert!(matches!(
            builder.entry("blank", rice(), &["  "]).unwrap_err(),
            ReferenceError::EmptyAlias { .. }
        ));
        assert!(matches!(
            builder.entry("none", rice(), &[] as &[&str]).unwrap_err(),
            ReferenceError::NoAliases { .. }
        ));
        assert!(matches!(
            builder.entry(" ", rice(), &["x"]).unwrap_err(),
            ReferenceError::EmptyName
        ));
        assert!(matches!(
            builder
                .entry("bad", Nutrition::new(-5.0, 0.0, 0.0, 0.0), &["bad"])
                .unwrap_err(),
            ReferenceError::InvalidValue { field: "calories", .. }
        ));
    }

    #[test]
    fn test_thai_alias_kept_exact() {
        let mut builder = ReferenceTableBuilder::new();
        builder.entry("chicken", rice(), &["ไก่"]).unwrap();
        let table = builder.build();
        assert_eq!(table.entries()[0].aliases, vec!["ไก่".to_string()]);
        assert!(table.find_alias("ไก่").is_some());
    }

    #[test]
    fn test_extend_from_json_appends_after_builtin() {
        let mut builder = ReferenceTableBuilder::with_builtin().unwrap();
        builder
            .extend_from_json(
                r#"{"entries": [
                    {"name": "khao man gai", "calories": 600, "protein": 25,
                     "carbs": 75, "fat": 20, "aliases": ["khao man gai", "ข้าวมันไก่"]}
                ]}"#,
            )
            .unwrap();
        let table = builder.build();
        assert_eq!(table.len(), BUILTIN.len() + 1);
        assert_eq!(table.entries().last().unwrap().fact.name, "khao man gai");
        assert_eq!(table.find_alias("KHAO MAN GAI").unwrap().calories, 600.0);
    }

    #[test]
    fn test_shadowed_alias_is_accepted() {
        let mut builder = ReferenceTableBuilder::with_builtin().unwrap();
        builder
            .entry(
                "khao man gai",
                Nutrition::new(600.0, 25.0, 75.0, 20.0),
                &["khao man gai", "ข้าวมันไก่"],
            )
            .unwrap();
        let table = builder.build();
        assert_eq!(table.find_alias("ข้าวมันไก่").unwrap().name, "khao man gai");
        assert_eq!(table.shadowing_alias("ข้าวมันไก่"), Some("ไก่"));
        assert_eq!(table.shadowing_alias("Khao Man Gai"), Some("khao man gai"));
        assert_eq!(ReferenceTable::builtin().unwrap().shadowing_alias("khao man gai"), None);
    }

    #[test]
    fn test_builtin_aliases_are_not_shadowed() {
        let mut builder = ReferenceTableBuilder::new();
        for item in BUILTIN {
            for alias in item.aliases {
                assert_eq!(builder.table.shadowing_alias(alias), None, "alias {alias:?}");
            }
            builder.entry(item.name, item.nutrition, item.aliases).unwrap();
        }
    }

    #[test]
    fn test_extend_from_json_rejects_builtin_alias() {
        let mut builder = ReferenceTableBuilder::with_builtin().unwrap();
        let err = builder
            .extend_from_json(
                r#"{"entries": [{"name": "my rice", "calories": 1, "protein": 1,
                    "carbs": 1, "fat": 1, "aliases": ["Rice"]}]}"#,
            )
            .unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateAlias { .. }));
    }

    #[test]
    fn test_extend_from_json_rejects_unknown_and_missing_fields() {
        let mut builder = ReferenceTableBuilder::new();
        let missing_fat = r#"{"entries": [{"name": "x", "calories": 1, "protein": 1,
            "carbs": 1, "aliases": ["x"]}]}"#;
        assert!(matches!(
            builder.extend_from_json(missing_fat).unwrap_err(),
            ReferenceError::Parse(_)
        ));
        let extra = r#"{"entries": [{"name": "x", "calories": 1, "protein": 1,
            "carbs": 1, "fat": 1, "fiber": 2, "aliases": ["x"]}]}"#;
        assert!(matches!(
            builder.extend_from_json(extra).unwrap_err(),
            ReferenceError::Parse(_)
        ));
    }

    #[test]
    fn test_extend_from_missing_file() {
        let mut builder = ReferenceTableBuilder::new();
        let path = std::env::temp_dir().join("kcal-does-not-exist-4f1c.json");
        let err = builder.extend_from_file(&path).unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }));
    }

    #[test]
    fn test_extend_from_file() {
        let path = std::env::temp_dir().join(format!("kcal-reference-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"entries": [{"name": "mochi", "calories": 96, "protein": 1,
                "carbs": 22, "fat": 0.2, "aliases": ["mochi"]}]}"#,
        )
        .unwrap();
        let mut builder = ReferenceTableBuilder::new();
        builder.extend_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(builder.build().find_alias("mochi").unwrap().carbs, 22.0);
    }
}

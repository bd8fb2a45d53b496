//! Stanza name to category code mapping
//!
//! Stanza markers (`== verb`) group data lines by word class, and the
//! active stanza supplies the category code the renderer combines into
//! paradigm names. The table is plain configuration data: built once,
//! passed into the processing pipeline by reference, never mutated.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Immutable stanza-name to category-code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaTable {
    entries: HashMap<String, String>,
}

/// Category codes for the usual apertium word classes.
static BUILTIN: Lazy<StanzaTable> = Lazy::new(|| {
    StanzaTable::from_entries([
        ("noun", "n"),
        ("proper-noun", "np"),
        ("verb", "vblex"),
        ("adjective", "adj"),
        ("adverb", "adv"),
        ("pronoun", "prn"),
        ("preposition", "pr"),
        ("determiner", "det"),
        ("numeral", "num"),
        ("interjection", "ij"),
        ("conjunction", "cnjcoo"),
    ])
});

impl StanzaTable {
    fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        StanzaTable {
            entries: entries
                .into_iter()
                .map(|(name, code)| (name.to_lowercase(), code.to_string()))
                .collect(),
        }
    }

    /// The built-in table of standard apertium categories.
    pub fn builtin() -> &'static StanzaTable {
        &BUILTIN
    }

    /// Load a replacement table from a YAML `name: code` mapping.
    pub fn from_yaml_str(source: &str) -> Result<Self, StanzaTableError> {
        let raw: HashMap<String, String> =
            serde_yaml::from_str(source).map_err(|e| StanzaTableError::Malformed(e.to_string()))?;
        if raw.is_empty() {
            return Err(StanzaTableError::Empty);
        }
        Ok(StanzaTable {
            entries: raw
                .into_iter()
                .map(|(name, code)| (name.to_lowercase(), code))
                .collect(),
        })
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, StanzaTableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| StanzaTableError::Unreadable(path.display().to_string(), e.to_string()))?;
        Self::from_yaml_str(&source)
    }

    /// Case-insensitive lookup; stanza names may be titled in source files.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Errors loading a user stanza table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StanzaTableError {
    Unreadable(String, String),
    Malformed(String),
    Empty,
}

impl fmt::Display for StanzaTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StanzaTableError::Unreadable(path, err) => {
                write!(f, "stanza table {} could not be read: {}", path, err)
            }
            StanzaTableError::Malformed(err) => write!(f, "stanza table is not valid YAML: {}", err),
            StanzaTableError::Empty => write!(f, "stanza table has no entries"),
        }
    }
}

impl std::error::Error for StanzaTableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = StanzaTable::builtin();
        assert_eq!(table.lookup("noun"), Some("n"));
        assert_eq!(table.lookup("verb"), Some("vblex"));
        assert_eq!(table.lookup("thing"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = StanzaTable::builtin();
        assert_eq!(table.lookup("Verb"), Some("vblex"));
        assert_eq!(table.lookup("ADJECTIVE"), Some("adj"));
    }

    #[test]
    fn test_yaml_table_replaces_builtin() {
        let table = StanzaTable::from_yaml_str("Thing: t\ntime-mood: tmmood\n").unwrap();
        assert_eq!(table.lookup("thing"), Some("t"));
        assert_eq!(table.lookup("TIME-MOOD"), Some("tmmood"));
        assert_eq!(table.lookup("noun"), None);
    }

    #[test]
    fn test_yaml_table_must_not_be_empty() {
        assert_eq!(
            StanzaTable::from_yaml_str("{}").unwrap_err(),
            StanzaTableError::Empty
        );
    }

    #[test]
    fn test_yaml_table_must_be_a_mapping() {
        assert!(matches!(
            StanzaTable::from_yaml_str("- a\n- b\n").unwrap_err(),
            StanzaTableError::Malformed(_)
        ));
    }
}

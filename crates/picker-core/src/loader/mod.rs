// crates/picker-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads the calling-code reference table, either the copy bundled into the
//! crate or a JSON (optionally gzip) file on disk, and turns it into a
//! [`DialCodeTable`].

use crate::error::Result;
use crate::model::CatalogEntry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

mod common_io;

pub use common_io::{open_stream, read_to_string};

/// The calling-code dataset shipped with the crate.
pub static BUNDLED_CALLING_CODES: &str = include_str!("../../data/calling_codes.json");

/// Where a catalog gets its dial codes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialCodeSource {
    /// The dataset compiled into the crate.
    #[default]
    Bundled,
    /// A JSON or `.json.gz` file on disk.
    Path(PathBuf),
    /// No dataset; every country ends up without a dial code.
    Empty,
}

impl DialCodeSource {
    /// Uses `path` when given, the bundled dataset otherwise.
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::Path)
    }

    pub fn load(&self) -> Result<DialCodeTable> {
        match self {
            Self::Bundled => DialCodeTable::from_json_str(BUNDLED_CALLING_CODES),
            Self::Path(path) => DialCodeTable::load_from_path(path),
            Self::Empty => Ok(DialCodeTable::default()),
        }
    }
}

/// ISO code → dial code lookup, keyed by uppercase code.
#[derive(Debug, Clone, Default)]
pub struct DialCodeTable {
    by_code: HashMap<String, String>,
}

impl DialCodeTable {
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut by_code = HashMap::new();
        for entry in entries {
            // first entry wins, like a linear scan over the raw list would
            by_code
                .entry(entry.code.trim().to_ascii_uppercase())
                .or_insert(entry.dial_code);
        }
        Self { by_code }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&read_to_string(path.as_ref())?)
    }

    /// Dial code for an ISO code (case-insensitive).
    pub fn get(&self, iso_code: &str) -> Option<&str> {
        self.by_code
            .get(&iso_code.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let table = DialCodeSource::Bundled.load().unwrap();
        assert!(table.len() > 200);
        assert_eq!(table.get("US"), Some("+1"));
        assert_eq!(table.get("de"), Some("+49"));
        assert_eq!(table.get("BV"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let table = DialCodeTable::from_json_str(
            r#"[{"code":"XK","dial_code":"+383"},{"code":"xk","dial_code":"+381"}]"#,
        )
        .unwrap();
        assert_eq!(table.get("XK"), Some("+383"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DialCodeSource::Path("/nonexistent/calling_codes.json".into())
            .load()
            .unwrap_err();
        assert!(matches!(err, crate::error::PickerError::NotFound(_)));
    }
}

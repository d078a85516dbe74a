// crates/picker-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Raw calling-code entry as it comes from the bundled dataset:
///
/// ```json
/// { "name": "Germany", "dial_code": "+49", "code": "DE" }
/// ```
///
/// Only `code` and `dial_code` are used; `name` is the dataset's own label
/// and never replaces the locale's display name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub code: String,
    pub dial_code: String,
}

/// A selectable country.
///
/// `name` comes from the locale service, `iso_code` is always stored
/// uppercase. `section_index` is only set on copies that live inside a
/// built [`Section`] list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub iso_code: String,
    pub dial_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_index: Option<usize>,
}

impl Country {
    pub fn new(name: impl Into<String>, iso_code: &str, dial_code: Option<String>) -> Self {
        Self {
            name: name.into(),
            iso_code: iso_code.to_ascii_uppercase(),
            dial_code,
            section_index: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Dial code, or `""` when the dataset has no mapping for this region.
    pub fn dial_code(&self) -> &str {
        self.dial_code.as_deref().unwrap_or("")
    }
}

/// Which kind of bucket a [`Section`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// The synthetic leading bucket holding the detected or default country.
    CurrentLocation,
    /// An alphabetical bucket; the value is the locale's section index.
    Alphabetical(usize),
}

/// An ordered bucket of countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub countries: Vec<Country>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_current_location(&self) -> bool {
        self.kind == SectionKind::CurrentLocation
    }
}

/// Position of a row in the picker, as reported by the host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

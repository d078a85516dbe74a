// crates/picker-core/src/config.rs
use crate::error::Result;
use crate::loader::{read_to_string, DialCodeSource};
use crate::sections::{EmptySections, SectionSettings, DEFAULT_CURRENT_LOCATION_TITLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Picker configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "country_codes": ["DE", "AT", "CH"], "show_calling_codes": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Countries to offer. `None` means every region the locale knows.
    pub country_codes: Option<Vec<String>>,
    /// Current location used when the region cannot be determined.
    pub default_country_code: String,
    /// Use `default_country_code` even when the region is known.
    pub force_default_country_code: bool,
    /// Append `(dial code)` to row labels.
    pub show_calling_codes: bool,
    /// Prefix row labels with the flag glyph.
    pub show_flags: bool,
    pub picker_title: String,
    pub current_location_title: String,
    pub empty_sections: EmptySections,
    /// Calling-code dataset on disk; the bundled one when unset.
    pub dial_codes_path: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            country_codes: None,
            default_country_code: "US".to_owned(),
            force_default_country_code: false,
            show_calling_codes: false,
            show_flags: true,
            picker_title: "Select a Country".to_owned(),
            current_location_title: DEFAULT_CURRENT_LOCATION_TITLE.to_owned(),
            empty_sections: EmptySections::default(),
            dial_codes_path: None,
        }
    }
}

impl PickerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&read_to_string(path.as_ref())?)
    }

    pub fn section_settings(&self) -> SectionSettings {
        SectionSettings {
            default_code: self.default_country_code.clone(),
            force_default: self.force_default_country_code,
            empty_sections: self.empty_sections,
            current_location_title: self.current_location_title.clone(),
        }
    }

    pub fn dial_code_source(&self) -> DialCodeSource {
        DialCodeSource::from_optional_path(self.dial_codes_path.clone())
    }
}

// crates/picker-core/src/lookup.rs

//! Point queries by ISO code over the unsectioned country list.

use crate::error::{PickerError, Result};
use crate::model::Country;
use crate::text::equals_folded;
use tracing::error;

/// Shown in place of a flag when the code is not in the catalog.
pub const FLAG_PLACEHOLDER: &str = "\u{1F3F3}\u{FE0F}";

/// Distance from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Flag emoji for a two-letter region code.
///
/// Each letter is shifted into the regional indicator block
/// (`A` → U+1F1E6). Lowercase input is uppercased first. Returns `None`
/// unless the code is exactly two ASCII letters.
///
/// ```rust
/// use country_picker_core::lookup::flag_emoji;
///
/// assert_eq!(flag_emoji("US").as_deref(), Some("🇺🇸"));
/// assert_eq!(flag_emoji("de").as_deref(), Some("🇩🇪"));
/// assert_eq!(flag_emoji("USA"), None);
/// ```
pub fn flag_emoji(iso_code: &str) -> Option<String> {
    let code = iso_code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    code.chars()
        .map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

/// Linear lookups over a country slice. At ~250 entries a scan is plenty.
#[derive(Debug, Clone, Copy)]
pub struct LookupIndex<'a> {
    countries: &'a [Country],
}

impl<'a> LookupIndex<'a> {
    pub fn new(countries: &'a [Country]) -> Self {
        Self { countries }
    }

    /// Country with this ISO code, compared case- and accent-insensitively.
    pub fn find(&self, iso_code: &str) -> Option<&'a Country> {
        let code = iso_code.trim();
        self.countries.iter().find(|c| equals_folded(&c.iso_code, code))
    }

    /// Flag glyph for a known code, or [`PickerError::UnknownCountryCode`].
    pub fn try_flag_glyph(&self, iso_code: &str) -> Result<String> {
        self.find(iso_code)
            .and_then(|c| flag_emoji(&c.iso_code))
            .ok_or_else(|| PickerError::UnknownCountryCode(iso_code.to_owned()))
    }

    /// Flag glyph for a known code, [`FLAG_PLACEHOLDER`] otherwise.
    ///
    /// Asking for a code outside the catalog is a programming error on the
    /// host side and is logged at error level.
    pub fn flag_glyph(&self, iso_code: &str) -> String {
        self.try_flag_glyph(iso_code).unwrap_or_else(|e| {
            error!(error = %e, "no flag for country code");
            FLAG_PLACEHOLDER.to_owned()
        })
    }

    pub fn dial_code(&self, iso_code: &str) -> Option<&'a str> {
        self.find(iso_code).and_then(|c| c.dial_code.as_deref())
    }

    pub fn display_name(&self, iso_code: &str) -> Option<&'a str> {
        self.find(iso_code).map(|c| c.name.as_str())
    }
}

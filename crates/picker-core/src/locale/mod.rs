// crates/picker-core/src/locale/mod.rs

//! # Locale Service
//!
//! The engine never collates text itself. Display names, the current region
//! and the alphabetical index all come from a [`LocaleService`], which a
//! host wires to its platform APIs. [`BuiltinLocale`] is a deterministic
//! English implementation for hosts (and tests) that have nothing better.

use crate::model::Country;
use crate::text::{fold_key, initial_letter};
use std::cmp::Ordering;

mod regions;

use regions::REGION_NAMES;

/// Locale and collation capability consumed by the catalog and sectioner.
///
/// Implementations must keep [`LocaleService::section_for`] and
/// [`LocaleService::compare_names`] consistent: two names that land in the
/// same bucket must sort by the same rule that picked the bucket.
pub trait LocaleService {
    /// Human-readable name for an ISO region code, or `None` if the code is
    /// not a region this locale can name.
    fn display_name(&self, iso_code: &str) -> Option<String>;

    /// Region of the running locale, if it can be determined.
    fn current_region_code(&self) -> Option<String>;

    /// Every region code the locale knows. Used when no explicit code set
    /// is configured.
    fn region_codes(&self) -> Vec<String>;

    /// Titles of the alphabetical sections, in display order.
    fn section_titles(&self) -> Vec<String>;

    /// Index into [`LocaleService::section_titles`] for a display name.
    fn section_for(&self, name: &str) -> usize;

    /// Collation order for two display names.
    fn compare_names(&self, a: &str, b: &str) -> Ordering;

    /// Titles for the fast-scroll index. Same as the section titles unless
    /// the locale abbreviates them.
    fn section_index_titles(&self) -> Vec<String> {
        self.section_titles()
    }

    /// Sorts one bucket in place by display name.
    fn sort_within_section(&self, countries: &mut [Country]) {
        countries.sort_by(|a, b| self.compare_names(&a.name, &b.name));
    }
}

/// Title of the catch-all section for names that don't start with a letter.
pub const OTHER_SECTION_TITLE: &str = "#";

/// English locale backed by a static region table.
///
/// Sections are `A`–`Z` plus [`OTHER_SECTION_TITLE`]; names are bucketed by
/// their first folded letter and sorted by folded key, so `Åland Islands`
/// files under `A` next to `Albania`.
#[derive(Debug, Clone, Default)]
pub struct BuiltinLocale {
    region: Option<String>,
}

impl BuiltinLocale {
    /// A locale with no detectable region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A locale whose current region is fixed to `iso_code`.
    pub fn with_region(iso_code: &str) -> Self {
        Self {
            region: Some(iso_code.trim().to_ascii_uppercase()),
        }
    }

    /// Reads the region from `LC_ALL`, `LC_MESSAGES` or `LANG`, in that order.
    pub fn from_env() -> Self {
        let region = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty())
            .and_then(|tag| region_from_locale_tag(&tag));
        Self { region }
    }

    fn lookup(iso_code: &str) -> Option<&'static str> {
        let code = iso_code.trim().to_ascii_uppercase();
        REGION_NAMES
            .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
            .ok()
            .map(|i| REGION_NAMES[i].1)
    }
}

impl LocaleService for BuiltinLocale {
    fn display_name(&self, iso_code: &str) -> Option<String> {
        Self::lookup(iso_code).map(str::to_owned)
    }

    fn current_region_code(&self) -> Option<String> {
        self.region.clone()
    }

    fn region_codes(&self) -> Vec<String> {
        REGION_NAMES.iter().map(|(c, _)| (*c).to_owned()).collect()
    }

    fn section_titles(&self) -> Vec<String> {
        ('A'..='Z')
            .map(String::from)
            .chain(std::iter::once(OTHER_SECTION_TITLE.to_owned()))
            .collect()
    }

    fn section_for(&self, name: &str) -> usize {
        match initial_letter(name) {
            Some(c) => (c as u8 - b'A') as usize,
            None => 26,
        }
    }

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
    }
}

/// Extracts the region from a POSIX/BCP-47 style tag such as
/// `en_US.UTF-8`, `de-CH` or `pt_BR@euro`.
pub fn region_from_locale_tag(tag: &str) -> Option<String> {
    let base = tag.split(['.', '@']).next()?;
    let region = base.split(['_', '-']).nth(1)?;
    (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| region.to_ascii_uppercase())
}

// crates/picker-core/src/picker.rs

//! # Country Picker
//!
//! The host-facing façade. A host list view asks it how many sections and
//! rows to draw, what to call them and what each row says; it forwards text
//! input to [`CountryPicker::set_search_text`] and row taps to
//! [`CountryPicker::select`].
//!
//! Derived state is cached per instance: the country list and the sections
//! are built on first use and dropped when a setter changes their inputs.
//!
//! ```rust
//! use country_picker_core::prelude::*;
//!
//! let mut picker = CountryPicker::with_locale(
//!     BuiltinLocale::with_region("FR"),
//!     PickerConfig::default(),
//! );
//! picker.set_country_codes(["FR", "DE", "DK"]);
//!
//! assert_eq!(picker.title_for_section(0).as_deref(), Some("Current Location"));
//! // France is listed under "Current Location" and under "F"
//! assert_eq!(picker.set_search_text("fr").len(), 2);
//! ```

use crate::catalog::CountryCatalog;
use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::locale::{BuiltinLocale, LocaleService};
use crate::lookup::LookupIndex;
use crate::model::{Country, IndexPath, Section, SectionKind};
use crate::search::SearchFilter;
use crate::sections::{EmptySections, Sectioner};
use crate::selection::{Observers, Selection, SelectionObserver};
use once_cell::unsync::OnceCell;
use tracing::debug;

#[derive(Debug)]
pub struct CountryPicker<L: LocaleService = BuiltinLocale> {
    config: PickerConfig,
    locale: L,
    catalog: CountryCatalog,
    countries: OnceCell<Vec<Country>>,
    sectioner: Sectioner,
    search: SearchFilter,
    search_text: String,
    observers: Observers,
}

impl CountryPicker<BuiltinLocale> {
    /// Picker over the built-in English locale, region taken from the
    /// environment, default configuration.
    pub fn new() -> Self {
        Self::with_locale(BuiltinLocale::from_env(), PickerConfig::default())
    }
}

impl Default for CountryPicker<BuiltinLocale> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LocaleService> CountryPicker<L> {
    pub fn with_locale(locale: L, config: PickerConfig) -> Self {
        let catalog = CountryCatalog::new(config.dial_code_source());
        Self::with_catalog(locale, config, catalog)
    }

    /// Picker that uses `catalog` instead of the one `config` describes.
    pub fn with_catalog(locale: L, config: PickerConfig, catalog: CountryCatalog) -> Self {
        let sectioner = Sectioner::new(config.section_settings());
        Self {
            config,
            locale,
            catalog,
            countries: OnceCell::new(),
            sectioner,
            search: SearchFilter::new(),
            search_text: String::new(),
            observers: Observers::default(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Restricts the picker to `codes`.
    pub fn set_country_codes<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.country_codes = Some(codes.into_iter().map(Into::into).collect());
        self.invalidate();
    }

    /// Goes back to every region the locale knows.
    pub fn clear_country_codes(&mut self) {
        self.config.country_codes = None;
        self.invalidate();
    }

    pub fn set_default_country_code(&mut self, code: &str) {
        self.config.default_country_code = code.to_owned();
        self.apply_section_settings();
    }

    pub fn set_force_default_country_code(&mut self, force: bool) {
        self.config.force_default_country_code = force;
        self.apply_section_settings();
    }

    pub fn set_empty_sections(&mut self, policy: EmptySections) {
        self.config.empty_sections = policy;
        self.apply_section_settings();
    }

    pub fn set_show_flags(&mut self, show: bool) {
        self.config.show_flags = show;
    }

    pub fn set_show_calling_codes(&mut self, show: bool) {
        self.config.show_calling_codes = show;
    }

    fn apply_section_settings(&mut self) {
        self.sectioner.set_settings(self.config.section_settings());
        self.refresh_search();
    }

    fn invalidate(&mut self) {
        if self.countries.take().is_some() {
            debug!("country cache invalidated");
        }
        self.sectioner.reset();
        self.refresh_search();
    }

    /// The codes the picker is built from: the configured set, or every
    /// region of the locale.
    pub fn configured_codes(&self) -> Vec<String> {
        configured_codes(&self.config, &self.locale)
    }

    // -----------------------------------------------------------------------
    // Data
    // -----------------------------------------------------------------------

    /// Every configured country the locale can name, unsorted.
    pub fn countries(&self) -> &[Country] {
        ensure_countries(&self.countries, &self.catalog, &self.config, &self.locale)
    }

    pub fn sections(&self) -> &[Section] {
        self.sectioner.sections(self.countries(), &self.locale)
    }

    pub fn lookup(&self) -> LookupIndex<'_> {
        LookupIndex::new(self.countries())
    }

    /// Flag glyph for `code`, or a placeholder flag if the code is not in
    /// the picker.
    pub fn flag_glyph(&self, code: &str) -> String {
        self.lookup().flag_glyph(code)
    }

    pub fn dial_code(&self, code: &str) -> Option<&str> {
        self.lookup().dial_code(code)
    }

    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.lookup().display_name(code)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Updates the search text and returns the matching countries.
    ///
    /// Empty text ends the search and the picker goes back to sections.
    pub fn set_search_text(&mut self, text: &str) -> &[Country] {
        self.search_text.clear();
        self.search_text.push_str(text);
        self.refresh_search();
        self.search.results()
    }

    fn refresh_search(&mut self) {
        if self.search_text.is_empty() {
            self.search.clear();
            return;
        }
        let countries =
            ensure_countries(&self.countries, &self.catalog, &self.config, &self.locale);
        let sections = self.sectioner.sections(countries, &self.locale);
        self.search.filter(sections, &self.search_text);
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn search_results(&self) -> &[Country] {
        self.search.results()
    }

    // -----------------------------------------------------------------------
    // Table queries
    // -----------------------------------------------------------------------

    /// Search results render as a single section.
    pub fn number_of_sections(&self) -> usize {
        if self.is_searching() {
            1
        } else {
            self.sections().len()
        }
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        if self.is_searching() {
            return if section == 0 { self.search.results().len() } else { 0 };
        }
        self.sections().get(section).map_or(0, Section::len)
    }

    pub fn country_at(&self, path: IndexPath) -> Option<&Country> {
        if self.is_searching() {
            return match path.section {
                0 => self.search.results().get(path.row),
                _ => None,
            };
        }
        self.sections().get(path.section)?.countries.get(path.row)
    }

    /// Header for a section, `None` when the section is hidden.
    ///
    /// While searching the single section is titled with the first letter
    /// of the first hit. Empty sections have no header under either
    /// [`EmptySections`] policy.
    pub fn title_for_section(&self, section: usize) -> Option<String> {
        if self.is_searching() {
            if section != 0 {
                return None;
            }
            return self
                .search
                .results()
                .first()
                .and_then(|c| c.name.chars().next())
                .map(String::from);
        }
        let section = self.sections().get(section)?;
        (!section.is_empty()).then(|| section.title.clone())
    }

    /// A section is visible exactly when it has a header.
    pub fn is_section_visible(&self, section: usize) -> bool {
        self.title_for_section(section).is_some()
    }

    pub fn section_index_titles(&self) -> Vec<String> {
        self.locale.section_index_titles()
    }

    /// Section to scroll to when the user taps fast-scroll entry `index`.
    ///
    /// With dropped empty buckets this is the next bucket that exists.
    pub fn section_for_index_title(&self, index: usize) -> Option<usize> {
        self.sections()
            .iter()
            .position(|s| matches!(s.kind, SectionKind::Alphabetical(i) if i >= index))
    }

    /// Text for a row: optional flag, name, optional `(dial code)`.
    pub fn row_label(&self, country: &Country) -> String {
        let mut label = String::new();
        if self.config.show_flags {
            label.push_str(&self.flag_glyph(&country.iso_code));
            label.push(' ');
        }
        label.push_str(&country.name);
        if self.config.show_calling_codes {
            if let Some(dial_code) = &country.dial_code {
                label.push_str(" (");
                label.push_str(dial_code);
                label.push(')');
            }
        }
        label
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn add_observer(&mut self, observer: impl SelectionObserver + 'static) {
        self.observers.add(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Unregisters every observer; later selections still return the
    /// [`Selection`] but notify nobody.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    /// Selects the row at `path` and notifies every observer once.
    pub fn select(&mut self, path: IndexPath) -> Result<Selection> {
        let selection = self
            .country_at(path)
            .map(Selection::from)
            .ok_or(PickerError::RowOutOfRange {
                section: path.section,
                row: path.row,
            })?;
        Ok(self.deliver(selection))
    }

    /// Selects a country by ISO code, as if its row had been tapped.
    pub fn select_code(&mut self, code: &str) -> Result<Selection> {
        let selection = self
            .lookup()
            .find(code)
            .map(Selection::from)
            .ok_or_else(|| PickerError::UnknownCountryCode(code.to_owned()))?;
        Ok(self.deliver(selection))
    }

    fn deliver(&mut self, selection: Selection) -> Selection {
        debug!(code = %selection.iso_code, observers = self.observers.len(), "country selected");
        self.observers.notify(&selection);
        selection
    }
}

fn configured_codes<L: LocaleService>(config: &PickerConfig, locale: &L) -> Vec<String> {
    match &config.country_codes {
        Some(codes) => codes.clone(),
        None => locale.region_codes(),
    }
}

fn ensure_countries<'a, L: LocaleService>(
    cell: &'a OnceCell<Vec<Country>>,
    catalog: &CountryCatalog,
    config: &PickerConfig,
    locale: &L,
) -> &'a [Country] {
    cell.get_or_init(|| {
        let codes = configured_codes(config, locale);
        catalog.all_countries(&codes, locale)
    })
}

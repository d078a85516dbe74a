// crates/picker-core/src/lib.rs

//! # country-picker-core
//!
//! The data side of a country picker: a catalog of countries with display
//! names and dial codes, an alphabetical section index with a leading
//! "current location" section, type-ahead filtering, and lookups of name,
//! flag and dial code by ISO code.
//!
//! Rendering is left to the host. Locale-specific behaviour (display names,
//! current region, collation) comes from a [`LocaleService`]; the crate
//! ships [`BuiltinLocale`], a deterministic English implementation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod lookup;
pub mod model;
pub mod picker;
pub mod search;
pub mod sections;
pub mod selection;
pub mod text;

// Re-exports
pub use crate::catalog::CountryCatalog;
pub use crate::config::PickerConfig;
pub use crate::error::{PickerError, Result};
pub use crate::loader::{DialCodeSource, DialCodeTable};
pub use crate::locale::{BuiltinLocale, LocaleService};
pub use crate::lookup::{flag_emoji, LookupIndex, FLAG_PLACEHOLDER};
pub use crate::model::{CatalogEntry, Country, IndexPath, Section, SectionKind};
pub use crate::picker::CountryPicker;
pub use crate::search::SearchFilter;
pub use crate::sections::{build_sections, EmptySections, SectionSettings, Sectioner};
pub use crate::selection::{Selection, SelectionObserver};

/// Common types and traits for hosts and demos.
pub mod prelude {
    pub use crate::{
        BuiltinLocale, Country, CountryCatalog, CountryPicker, DialCodeSource, EmptySections,
        IndexPath, LocaleService, PickerConfig, PickerError, Result, Section, SectionKind,
        Selection, SelectionObserver,
    };
}

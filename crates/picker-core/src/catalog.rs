// crates/picker-core/src/catalog.rs

//! # Country Catalog
//!
//! Joins the configured ISO codes with locale display names and the
//! calling-code table. The table is read once per catalog, on first use; a
//! missing or broken dataset leaves every country without a dial code
//! rather than failing.

use crate::loader::{DialCodeSource, DialCodeTable};
use crate::locale::LocaleService;
use crate::model::Country;
use once_cell::unsync::OnceCell;
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct CountryCatalog {
    source: DialCodeSource,
    table: OnceCell<DialCodeTable>,
}

impl CountryCatalog {
    pub fn new(source: DialCodeSource) -> Self {
        Self {
            source,
            table: OnceCell::new(),
        }
    }

    /// Catalog backed by the dataset compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(DialCodeSource::Bundled)
    }

    /// Catalog with a pre-built table, skipping the lazy load.
    pub fn with_table(table: DialCodeTable) -> Self {
        Self {
            source: DialCodeSource::Empty,
            table: OnceCell::with_value(table),
        }
    }

    pub fn source(&self) -> &DialCodeSource {
        &self.source
    }

    /// The calling-code table, loading it on first access.
    pub fn dial_codes(&self) -> &DialCodeTable {
        self.table.get_or_init(|| match self.source.load() {
            Ok(table) => {
                debug!(entries = table.len(), source = ?self.source, "loaded calling codes");
                table
            }
            Err(e) => {
                warn!(error = %e, source = ?self.source, "calling codes unavailable, continuing without dial codes");
                DialCodeTable::default()
            }
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// One [`Country`] per distinct configured code the locale can name.
    ///
    /// Codes are compared case-insensitively, so `"us"` and `"US"` collapse
    /// into a single entry. Unnamed codes are skipped with a warning. The
    /// result keeps configuration order; sectioning imposes the display
    /// order.
    pub fn all_countries<L, S>(&self, codes: &[S], locale: &L) -> Vec<Country>
    where
        L: LocaleService + ?Sized,
        S: AsRef<str>,
    {
        let table = self.dial_codes();
        let mut seen = HashSet::with_capacity(codes.len());
        let mut out = Vec::with_capacity(codes.len());

        for code in codes {
            let code = code.as_ref().trim().to_ascii_uppercase();
            if !seen.insert(code.clone()) {
                continue;
            }

            let Some(name) = locale.display_name(&code) else {
                warn!(code = %code, "invalid country code, skipping");
                continue;
            };

            let dial_code = table.get(&code).map(str::to_owned);
            out.push(Country::new(name, &code, dial_code));
        }

        out
    }
}

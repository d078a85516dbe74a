// crates/picker-core/src/search.rs
use crate::model::{Country, Section};
use crate::text::matches_prefix;

/// Type-ahead filter over a built section list.
///
/// Holds a reusable result buffer and nothing else; every call starts
/// from scratch.
#[derive(Debug, Default)]
pub struct SearchFilter {
    results: Vec<Country>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Countries whose name starts with `query`, ignoring case and accents.
    ///
    /// Results follow section traversal order (current location first, then
    /// each alphabetical bucket in its sorted order), so the current country
    /// can show up twice. An empty query means no search is running and
    /// yields nothing.
    pub fn filter(&mut self, sections: &[Section], query: &str) -> &[Country] {
        self.results.clear();
        if query.is_empty() {
            return &self.results;
        }

        let hits = sections
            .iter()
            .flat_map(|s| &s.countries)
            .filter(|c| matches_prefix(&c.name, query))
            .cloned();
        self.results.extend(hits);
        &self.results
    }

    /// Results of the last [`SearchFilter::filter`] call.
    pub fn results(&self) -> &[Country] {
        &self.results
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

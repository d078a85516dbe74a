// crates/picker-core/src/sections.rs

//! # Sectioner
//!
//! Buckets countries by the locale's alphabetical index, sorts every bucket
//! with the same collation, and puts a synthetic "current location" bucket
//! in front.
//!
//! The result is memoized in [`Sectioner`] until [`Sectioner::reset`] is
//! called, which the picker does whenever an input to sectioning changes.

use crate::locale::LocaleService;
use crate::model::{Country, Section, SectionKind};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_CURRENT_LOCATION_TITLE: &str = "Current Location";

/// What happens to alphabetical buckets that end up with no countries.
///
/// The current-location section is never dropped: it is always at index 0,
/// even when empty, and is then treated like any other empty section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySections {
    /// Leave empty buckets out of the section list.
    #[default]
    Drop,
    /// Keep them in place; they report no title and are not visible.
    Hide,
}

/// Inputs to sectioning besides the countries and the locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSettings {
    pub default_code: String,
    pub force_default: bool,
    pub empty_sections: EmptySections,
    pub current_location_title: String,
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            default_code: "US".to_owned(),
            force_default: false,
            empty_sections: EmptySections::default(),
            current_location_title: DEFAULT_CURRENT_LOCATION_TITLE.to_owned(),
        }
    }
}

/// The region shown under "current location".
///
/// The locale's region wins unless `force_default` is set or the locale
/// cannot tell.
pub fn current_country_code<L>(locale: &L, default_code: &str, force_default: bool) -> String
where
    L: LocaleService + ?Sized,
{
    let detected = if force_default {
        None
    } else {
        locale
            .current_region_code()
            .filter(|code| !code.trim().is_empty())
    };
    detected
        .unwrap_or_else(|| default_code.to_owned())
        .trim()
        .to_ascii_uppercase()
}

/// Builds the full section list from scratch.
///
/// The current-location bucket holds the current country only if that code
/// is among `countries` (i.e. it was configured and the locale could name
/// it); otherwise it is empty. Every country also appears exactly once in
/// an alphabetical bucket.
pub fn build_sections<L>(countries: &[Country], locale: &L, settings: &SectionSettings) -> Vec<Section>
where
    L: LocaleService + ?Sized,
{
    let titles = locale.section_titles();
    let mut buckets: Vec<Vec<Country>> = vec![Vec::new(); titles.len()];

    for country in countries {
        let Some(last) = titles.len().checked_sub(1) else {
            warn!(code = %country.iso_code, "locale has no section titles, country not sectioned");
            continue;
        };
        let mut index = locale.section_for(&country.name);
        if index > last {
            warn!(name = %country.name, index, "section index out of range, using last section");
            index = last;
        }
        buckets[index].push(country.clone());
    }

    for bucket in &mut buckets {
        locale.sort_within_section(bucket);
    }

    let current_code = current_country_code(locale, &settings.default_code, settings.force_default);
    let current: Vec<Country> = countries
        .iter()
        .find(|c| c.iso_code.eq_ignore_ascii_case(&current_code))
        .cloned()
        .into_iter()
        .collect();
    if current.is_empty() {
        debug!(code = %current_code, "current location not among configured countries");
    }

    let mut sections = Vec::with_capacity(titles.len() + 1);
    sections.push(Section {
        title: settings.current_location_title.clone(),
        kind: SectionKind::CurrentLocation,
        countries: current,
    });

    for (index, (title, bucket)) in titles.into_iter().zip(buckets).enumerate() {
        if bucket.is_empty() && settings.empty_sections == EmptySections::Drop {
            continue;
        }
        sections.push(Section {
            title,
            kind: SectionKind::Alphabetical(index),
            countries: bucket,
        });
    }

    for (index, section) in sections.iter_mut().enumerate() {
        for country in &mut section.countries {
            country.section_index = Some(index);
        }
    }

    sections
}

/// Memoizing wrapper around [`build_sections`].
#[derive(Debug, Default)]
pub struct Sectioner {
    settings: SectionSettings,
    cache: OnceCell<Vec<Section>>,
}

impl Sectioner {
    pub fn new(settings: SectionSettings) -> Self {
        Self {
            settings,
            cache: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &SectionSettings {
        &self.settings
    }

    /// Replaces the settings, dropping the cache if anything changed.
    pub fn set_settings(&mut self, settings: SectionSettings) {
        if settings != self.settings {
            self.settings = settings;
            self.reset();
        }
    }

    /// Cached sections, building them on first call.
    ///
    /// `countries` and `locale` are only read when the cache is empty; pass
    /// the same inputs until [`Sectioner::reset`].
    pub fn sections<L>(&self, countries: &[Country], locale: &L) -> &[Section]
    where
        L: LocaleService + ?Sized,
    {
        self.cache.get_or_init(|| {
            let sections = build_sections(countries, locale, &self.settings);
            debug!(
                countries = countries.len(),
                sections = sections.len(),
                "built country sections"
            );
            sections
        })
    }

    pub fn reset(&mut self) {
        if self.cache.take().is_some() {
            debug!("section cache invalidated");
        }
    }

    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }
}

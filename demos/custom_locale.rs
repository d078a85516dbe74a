//! Plugging in a host locale
//!
//! Hosts normally back `LocaleService` with their platform's locale APIs.
//! This example wraps the built-in locale to show German names for a
//! handful of regions and to bucket by the German initial.

use country_picker_rs::prelude::*;
use std::cmp::Ordering;

struct GermanLocale {
    fallback: BuiltinLocale,
}

impl GermanLocale {
    fn name(code: &str) -> Option<&'static str> {
        match code.to_ascii_uppercase().as_str() {
            "DE" => Some("Deutschland"),
            "AT" => Some("Österreich"),
            "CH" => Some("Schweiz"),
            "FR" => Some("Frankreich"),
            "NL" => Some("Niederlande"),
            _ => None,
        }
    }
}

impl LocaleService for GermanLocale {
    fn display_name(&self, iso_code: &str) -> Option<String> {
        Self::name(iso_code)
            .map(str::to_owned)
            .or_else(|| self.fallback.display_name(iso_code))
    }

    fn current_region_code(&self) -> Option<String> {
        Some("DE".to_owned())
    }

    fn region_codes(&self) -> Vec<String> {
        self.fallback.region_codes()
    }

    fn section_titles(&self) -> Vec<String> {
        self.fallback.section_titles()
    }

    fn section_for(&self, name: &str) -> usize {
        self.fallback.section_for(name)
    }

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        self.fallback.compare_names(a, b)
    }
}

fn main() -> Result<()> {
    let locale = GermanLocale {
        fallback: BuiltinLocale::new(),
    };
    let config = PickerConfig {
        country_codes: Some(["DE", "AT", "CH", "FR", "NL"].map(String::from).to_vec()),
        current_location_title: "Aktueller Standort".to_owned(),
        ..PickerConfig::default()
    };
    let picker = CountryPicker::with_locale(locale, config);

    for section in picker.sections() {
        if section.is_empty() {
            continue;
        }
        println!("{}", section.title);
        for country in &section.countries {
            println!("  {}", picker.row_label(country));
        }
    }

    Ok(())
}

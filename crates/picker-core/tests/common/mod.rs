#![allow(dead_code)]

use country_picker_core::text::fold_key;
use country_picker_core::LocaleService;
use std::cell::Cell;
use std::cmp::Ordering;

/// Small deterministic locale: a fixed name table, sections `A`–`Z`, and a
/// counter of bucketing calls so tests can tell when sections were rebuilt.
#[derive(Debug, Default)]
pub struct FakeLocale {
    pub names: Vec<(&'static str, &'static str)>,
    pub region: Option<String>,
    pub section_calls: Cell<usize>,
}

impl FakeLocale {
    pub fn new(region: Option<&str>) -> Self {
        Self {
            names: vec![
                ("AX", "Åland Islands"),
                ("AL", "Albania"),
                ("AT", "Austria"),
                ("CI", "Côte d’Ivoire"),
                ("CL", "Chile"),
                ("TD", "Chad"),
                ("DE", "Germany"),
                ("FR", "France"),
                ("PE", "Peru"),
                ("RE", "Réunion"),
                ("US", "United States"),
                ("BV", "Bouvet Island"),
            ],
            region: region.map(str::to_owned),
            section_calls: Cell::new(0),
        }
    }

    pub fn codes(&self) -> Vec<String> {
        self.names.iter().map(|(c, _)| (*c).to_owned()).collect()
    }
}

impl LocaleService for FakeLocale {
    fn display_name(&self, iso_code: &str) -> Option<String> {
        self.names
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(iso_code))
            .map(|(_, n)| (*n).to_owned())
    }

    fn current_region_code(&self) -> Option<String> {
        self.region.clone()
    }

    fn region_codes(&self) -> Vec<String> {
        self.codes()
    }

    fn section_titles(&self) -> Vec<String> {
        ('A'..='Z').map(String::from).collect()
    }

    fn section_for(&self, name: &str) -> usize {
        self.section_calls.set(self.section_calls.get() + 1);
        let first = fold_key(name)
            .chars()
            .next()
            .map_or('a', |c| c.to_ascii_lowercase());
        (first as u8 - b'a') as usize
    }

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        fold_key(a).cmp(&fold_key(b))
    }
}

pub const DIAL_CODES: &str = r#"[
  {"name": "Albania", "dial_code": "+355", "code": "AL"},
  {"name": "Austria", "dial_code": "+43", "code": "AT"},
  {"name": "Chad", "dial_code": "+235", "code": "TD"},
  {"name": "Chile", "dial_code": "+56", "code": "CL"},
  {"name": "Côte d'Ivoire", "dial_code": "+225", "code": "CI"},
  {"name": "France", "dial_code": "+33", "code": "FR"},
  {"name": "Germany", "dial_code": "+49", "code": "DE"},
  {"name": "Peru", "dial_code": "+51", "code": "PE"},
  {"name": "Réunion", "dial_code": "+262", "code": "RE"},
  {"name": "United States", "dial_code": "+1", "code": "US"},
  {"name": "Åland Islands", "dial_code": "+358", "code": "AX"}
]"#;

pub fn test_catalog() -> country_picker_core::CountryCatalog {
    let table = country_picker_core::DialCodeTable::from_json_str(DIAL_CODES).unwrap();
    country_picker_core::CountryCatalog::with_table(table)
}

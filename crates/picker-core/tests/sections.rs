mod common;

use common::{test_catalog, FakeLocale};
use country_picker_core::sections::current_country_code;
use country_picker_core::{
    build_sections, Country, EmptySections, LocaleService, SectionKind, SectionSettings, Sectioner,
};

fn countries(locale: &FakeLocale) -> Vec<Country> {
    test_catalog().all_countries(&locale.codes(), locale)
}

fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn current_location_leads_with_detected_region() {
    let locale = FakeLocale::new(Some("FR"));
    let sections = build_sections(&countries(&locale), &locale, &SectionSettings::default());

    assert_eq!(sections[0].kind, SectionKind::CurrentLocation);
    assert_eq!(sections[0].title, "Current Location");
    assert_eq!(names(&sections[0].countries), ["France"]);
    assert_eq!(sections[0].countries[0].dial_code.as_deref(), Some("+33"));
    assert!(sections[1..]
        .iter()
        .all(|s| matches!(s.kind, SectionKind::Alphabetical(_))));
}

#[test]
fn falls_back_to_default_code() {
    let locale = FakeLocale::new(None);
    let settings = SectionSettings {
        default_code: "de".into(),
        ..SectionSettings::default()
    };
    let sections = build_sections(&countries(&locale), &locale, &settings);

    assert_eq!(names(&sections[0].countries), ["Germany"]);
}

#[test]
fn force_default_overrides_region() {
    let locale = FakeLocale::new(Some("FR"));
    assert_eq!(current_country_code(&locale, "PE", false), "FR");
    assert_eq!(current_country_code(&locale, "PE", true), "PE");

    let settings = SectionSettings {
        default_code: "PE".into(),
        force_default: true,
        ..SectionSettings::default()
    };
    let sections = build_sections(&countries(&locale), &locale, &settings);
    assert_eq!(names(&sections[0].countries), ["Peru"]);
}

#[test]
fn current_location_requires_configured_code() {
    let locale = FakeLocale::new(Some("US"));
    let configured = test_catalog().all_countries(&["FR", "DE"], &locale);
    let sections = build_sections(&configured, &locale, &SectionSettings::default());

    assert!(sections[0].is_current_location());
    assert!(sections[0].is_empty());
}

#[test]
fn every_country_in_exactly_one_alphabetical_section() {
    let locale = FakeLocale::new(Some("US"));
    let all = countries(&locale);
    let sections = build_sections(&all, &locale, &SectionSettings::default());

    for country in &all {
        let hits = sections[1..]
            .iter()
            .flat_map(|s| &s.countries)
            .filter(|c| c.iso_code == country.iso_code)
            .count();
        assert_eq!(hits, 1, "{} listed {hits} times", country.iso_code);
    }
    let total: usize = sections.iter().map(|s| s.len()).sum();
    assert_eq!(total, all.len() + 1);
}

#[test]
fn buckets_are_sorted_by_collation() {
    let locale = FakeLocale::new(None);
    let sections = build_sections(&countries(&locale), &locale, &SectionSettings::default());

    let a = sections.iter().find(|s| s.title == "A").unwrap();
    assert_eq!(names(&a.countries), ["Åland Islands", "Albania", "Austria"]);

    let c = sections.iter().find(|s| s.title == "C").unwrap();
    assert_eq!(names(&c.countries), ["Chad", "Chile", "Côte d’Ivoire"]);

    for section in &sections {
        let folded: Vec<_> = section
            .countries
            .iter()
            .map(|c| country_picker_core::text::fold_key(&c.name))
            .collect();
        assert!(folded.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn drop_policy_removes_empty_buckets() {
    let locale = FakeLocale::new(None);
    let sections = build_sections(&countries(&locale), &locale, &SectionSettings::default());

    let titles: Vec<_> = sections.iter().skip(1).map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C", "F", "G", "P", "R", "U"]);
    assert!(sections[1..].iter().all(|s| !s.is_empty()));
}

#[test]
fn hide_policy_keeps_every_bucket() {
    let locale = FakeLocale::new(None);
    let settings = SectionSettings {
        empty_sections: EmptySections::Hide,
        ..SectionSettings::default()
    };
    let sections = build_sections(&countries(&locale), &locale, &settings);

    assert_eq!(sections.len(), locale.section_titles().len() + 1);
    assert_eq!(sections[4].title, "D");
    assert!(sections[4].is_empty());
    assert_eq!(sections[4].kind, SectionKind::Alphabetical(3));
}

#[test]
fn section_index_tags_match_position() {
    let locale = FakeLocale::new(Some("US"));
    let sections = build_sections(&countries(&locale), &locale, &SectionSettings::default());

    for (i, section) in sections.iter().enumerate() {
        assert!(section.countries.iter().all(|c| c.section_index == Some(i)));
    }
}

#[test]
fn sectioner_memoizes_until_reset() {
    let locale = FakeLocale::new(Some("US"));
    let all = countries(&locale);
    let mut sectioner = Sectioner::default();

    let first = sectioner.sections(&all, &locale).to_vec();
    let calls = locale.section_calls.get();
    assert!(calls > 0);

    let second = sectioner.sections(&all, &locale);
    assert_eq!(first, second);
    assert_eq!(locale.section_calls.get(), calls);
    assert!(sectioner.is_cached());

    sectioner.reset();
    assert!(!sectioner.is_cached());
    let rebuilt = sectioner.sections(&all, &locale).to_vec();
    assert_eq!(locale.section_calls.get(), calls * 2);
    assert_eq!(rebuilt, build_sections(&all, &locale, &SectionSettings::default()));
}

#[test]
fn changing_settings_invalidates() {
    let locale = FakeLocale::new(None);
    let all = countries(&locale);
    let mut sectioner = Sectioner::default();
    sectioner.sections(&all, &locale);

    sectioner.set_settings(SectionSettings::default());
    assert!(sectioner.is_cached());

    sectioner.set_settings(SectionSettings {
        default_code: "FR".into(),
        ..SectionSettings::default()
    });
    assert!(!sectioner.is_cached());
    assert_eq!(names(&sectioner.sections(&all, &locale)[0].countries), ["France"]);
}

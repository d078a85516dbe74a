mod common;

use common::{test_catalog, FakeLocale};
use country_picker_core::{build_sections, Section, SearchFilter, SectionSettings};

fn sections(region: Option<&str>) -> Vec<Section> {
    let locale = FakeLocale::new(region);
    let countries = test_catalog().all_countries(&locale.codes(), &locale);
    build_sections(&countries, &locale, &SectionSettings::default())
}

fn hits(filter: &mut SearchFilter, sections: &[Section], query: &str) -> Vec<String> {
    filter
        .filter(sections, query)
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

#[test]
fn prefix_match_ignores_case_and_accents() {
    let sections = sections(None);
    let mut filter = SearchFilter::new();

    assert_eq!(hits(&mut filter, &sections, "ch"), ["Chad", "Chile"]);
    assert_eq!(hits(&mut filter, &sections, "COTE"), ["Côte d’Ivoire"]);
    assert_eq!(hits(&mut filter, &sections, "réu"), ["Réunion"]);
    assert_eq!(hits(&mut filter, &sections, "reu"), ["Réunion"]);
    assert_eq!(hits(&mut filter, &sections, "aland"), ["Åland Islands"]);
}

#[test]
fn only_prefixes_match() {
    let sections = sections(None);
    let mut filter = SearchFilter::new();

    assert!(hits(&mut filter, &sections, "many").is_empty());
    assert!(hits(&mut filter, &sections, "States").is_empty());
}

#[test]
fn names_shorter_than_query_never_match() {
    let sections = sections(None);
    let mut filter = SearchFilter::new();

    assert_eq!(hits(&mut filter, &sections, "Peru"), ["Peru"]);
    assert!(hits(&mut filter, &sections, "Peru ").is_empty());
    assert!(hits(&mut filter, &sections, "Peruvia").is_empty());
}

#[test]
fn empty_query_yields_nothing() {
    let sections = sections(Some("US"));
    let mut filter = SearchFilter::new();

    filter.filter(&sections, "a");
    assert!(!filter.results().is_empty());
    assert!(filter.filter(&sections, "").is_empty());
    assert!(filter.results().is_empty());
}

#[test]
fn results_follow_section_order_with_current_first() {
    let sections = sections(Some("US"));
    let mut filter = SearchFilter::new();

    assert_eq!(
        hits(&mut filter, &sections, "u"),
        ["United States", "United States"]
    );
    let results = filter.results();
    assert_eq!(results[0].section_index, Some(0));
    assert!(results[1].section_index.unwrap() > 0);
}

#[test]
fn any_input_is_a_valid_query() {
    let sections = sections(None);
    let mut filter = SearchFilter::new();

    for query in ["*", "(", "\\", "🇺🇸", "   ", "ß"] {
        assert!(filter.filter(&sections, query).is_empty(), "{query:?}");
    }
}

#[test]
fn query_that_folds_to_nothing_has_no_hits() {
    let sections = sections(Some("US"));
    let mut filter = SearchFilter::new();

    for query in ["\u{301}", "\u{AD}", "\u{FE0F}", "\u{301}\u{AD}"] {
        assert!(filter.filter(&sections, query).is_empty(), "{query:?}");
    }
}

#[test]
fn filtering_leaves_sections_untouched() {
    let sections = sections(Some("FR"));
    let before = sections.clone();
    let mut filter = SearchFilter::new();

    filter.filter(&sections, "a");
    filter.filter(&sections, "fr");

    assert_eq!(sections, before);
    let total: usize = sections.iter().map(Section::len).sum();
    assert!(filter.results().len() <= total);
}

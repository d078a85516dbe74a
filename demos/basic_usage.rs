//! Basic usage example for country-picker-rs
//!
//! This example demonstrates how to:
//! - Build a picker over the built-in English locale
//! - Walk its sections like a list view would
//! - Filter as the user types
//! - Look up flags and dial codes
//! - Receive selection events

use country_picker_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Country Picker Basic Usage Example ===\n");

    let config = PickerConfig {
        show_calling_codes: true,
        ..PickerConfig::default()
    };
    let mut picker = CountryPicker::with_locale(BuiltinLocale::with_region("CH"), config);

    // Example 1: Sections
    println!("--- Example 1: Sections ---");
    println!("Total countries: {}", picker.countries().len());
    for section in 0..picker.number_of_sections().min(4) {
        if let Some(title) = picker.title_for_section(section) {
            println!("{title}: {} rows", picker.number_of_rows(section));
        }
    }
    println!("... and {} more sections\n", picker.number_of_sections().saturating_sub(4));

    // Example 2: Search as you type
    println!("--- Example 2: Type-ahead search ---");
    for query in ["s", "sw", "swi"] {
        let hits: Vec<String> = picker
            .set_search_text(query)
            .iter()
            .map(|c| c.name.clone())
            .collect();
        println!("{query:>4} -> {} hits: {}", hits.len(), hits.join(", "));
    }
    picker.set_search_text("");
    println!();

    // Example 3: Lookups
    println!("--- Example 3: Lookups by ISO code ---");
    for code in ["US", "de", "ZZ"] {
        println!(
            "{code}: {} {} {}",
            picker.flag_glyph(code),
            picker.country_name(code).unwrap_or("<unknown>"),
            picker.dial_code(code).unwrap_or("")
        );
    }
    println!();

    // Example 4: Selection
    println!("--- Example 4: Selection ---");
    picker.add_observer(|s: &Selection| {
        println!("Selected {} ({}) {}", s.name, s.iso_code, s.dial_code);
    });
    picker.select(IndexPath::new(0, 0))?;

    Ok(())
}

//! country-picker: command-line host for country-picker-core
//!
//! Drives the picker engine the way a list UI would and prints what that UI
//! would show.
//!
//! Usage examples
//! --------------
//!
//! - List every section (current location first)
//!   $ country-picker sections
//!   $ country-picker --codes=DE,AT,CH --calling-codes sections
//!
//! - Type-ahead search
//!   $ country-picker search cote
//!
//! - Point lookups by ISO code
//!   $ country-picker lookup us
//!
//! - Fire a selection event
//!   $ country-picker select DE
//!
//! The current region comes from `LC_ALL` / `LANG` unless `--region` is
//! given. Set `RUST_LOG=debug` to watch the caches being built.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use country_picker_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config()?;
    let locale = match &args.region {
        Some(region) => BuiltinLocale::with_region(region),
        None => BuiltinLocale::from_env(),
    };
    let mut picker = CountryPicker::with_locale(locale, config);

    match args.command {
        Commands::Sections => {
            println!("{}", picker.config().picker_title);
            for section in 0..picker.number_of_sections() {
                let Some(title) = picker.title_for_section(section) else {
                    continue;
                };
                println!();
                println!("{title}");
                for country in &picker.sections()[section].countries {
                    println!("  {}", picker.row_label(country));
                }
            }
        }

        Commands::Search { query } => {
            let hits = picker.set_search_text(&query).to_vec();
            if hits.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for country in &hits {
                    println!("{}", picker.row_label(country));
                }
            }
        }

        Commands::Lookup { code } => match picker.country_name(&code) {
            Some(name) => {
                println!("Country: {name}");
                println!("Flag: {}", picker.flag_glyph(&code));
                println!("Dial Code: {}", picker.dial_code(&code).unwrap_or("-"));
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Select { code } => {
            picker.add_observer(|s: &Selection| {
                println!("Selected: {} ({}) {}", s.name, s.iso_code, s.dial_code);
            });
            picker.select_code(&code)?;
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use country_picker_core::{EmptySections, PickerConfig};
use std::path::PathBuf;

/// CLI arguments for country-picker
#[derive(Debug, Parser)]
#[command(
    name = "country-picker",
    version,
    about = "Browse, search and select countries the way a picker UI would"
)]
pub struct CliArgs {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Comma-separated ISO codes to offer (e.g. DE,CH,AT). Default: all regions
    #[arg(short = 'f', long = "codes", global = true)]
    pub codes: Option<String>,

    /// Current location when the region cannot be determined
    #[arg(long = "default-code", global = true)]
    pub default_code: Option<String>,

    /// Use the default code even when the region is known
    #[arg(long = "force-default", global = true)]
    pub force_default: bool,

    /// Region of the running locale (default: from LC_ALL / LANG)
    #[arg(short = 'r', long = "region", global = true)]
    pub region: Option<String>,

    /// Calling-code dataset (.json or .json.gz) instead of the bundled one
    #[arg(long = "dial-codes", global = true)]
    pub dial_codes: Option<PathBuf>,

    /// Hide flag glyphs in row labels
    #[arg(long = "no-flags", global = true)]
    pub no_flags: bool,

    /// Show calling codes in row labels
    #[arg(long = "calling-codes", global = true)]
    pub calling_codes: bool,

    /// Keep empty alphabetical sections (listed without a header)
    #[arg(long = "keep-empty", global = true)]
    pub keep_empty: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every section with its rows
    Sections,

    /// Print the countries whose name starts with the query
    Search {
        /// Name prefix (case and accents are ignored)
        query: String,
    },

    /// Show name, flag and dial code for an ISO code
    Lookup {
        /// ISO 3166-1 alpha-2 code (e.g. DE, us)
        code: String,
    },

    /// Select a country and print the selection event
    Select {
        /// ISO code of the country to select
        code: String,
    },
}

impl CliArgs {
    /// Effective picker configuration: config file (if any) plus flags.
    pub fn to_config(&self) -> country_picker_core::Result<PickerConfig> {
        let mut config = match &self.config {
            Some(path) => PickerConfig::from_json_path(path)?,
            None => PickerConfig::default(),
        };

        if let Some(codes) = &self.codes {
            config.country_codes = Some(
                codes
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_owned)
                    .collect(),
            );
        }
        if let Some(code) = &self.default_code {
            config.default_country_code = code.clone();
        }
        if self.force_default {
            config.force_default_country_code = true;
        }
        if let Some(path) = &self.dial_codes {
            config.dial_codes_path = Some(path.clone());
        }
        if self.no_flags {
            config.show_flags = false;
        }
        if self.calling_codes {
            config.show_calling_codes = true;
        }
        if self.keep_empty {
            config.empty_sections = EmptySections::Hide;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "country-picker",
            "--codes",
            "de, ch,,AT",
            "--default-code",
            "CH",
            "--calling-codes",
            "--no-flags",
            "sections",
        ]);
        let config = args.to_config().unwrap();

        assert_eq!(
            config.country_codes,
            Some(vec!["de".to_owned(), "ch".to_owned(), "AT".to_owned()])
        );
        assert_eq!(config.default_country_code, "CH");
        assert!(config.show_calling_codes);
        assert!(!config.show_flags);
        assert_eq!(config.empty_sections, EmptySections::Drop);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["country-picker", "search", "ger", "--keep-empty"]);

        assert!(matches!(args.command, Commands::Search { ref query } if query == "ger"));
        assert_eq!(args.to_config().unwrap().empty_sections, EmptySections::Hide);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = CliArgs::parse_from([
            "country-picker",
            "--config",
            "/no/such/picker.json",
            "sections",
        ]);
        assert!(args.to_config().is_err());
    }
}

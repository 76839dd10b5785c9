pub mod cli;
pub mod toml_config;

use crate::core::transform::DEFAULT_MAX_STEPS;
use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_REQUIRED_COLUMNS;
use crate::utils::error::{EtlError, Result};
use crate::utils::paths::{derive_output_path, same_file_path, DEFAULT_OUTPUT_SUFFIX};
use crate::utils::validation::{
    validate_non_empty_list, validate_path, validate_positive_number, Validate,
};
use std::path::Path;
use toml_config::TomlConfig;

pub const USAGE: &str = "Usage: testomatio-convert <input-file.csv>";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "testomatio-convert")]
#[command(about = "Convert a test case CSV export into a Testomatio import file")]
pub struct CliConfig {
    /// Exported test cases (CSV with a header row)
    pub input: Option<String>,

    /// Write the converted file here instead of next to the input
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Highest `Step N` column scanned per row
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Read, validate and convert without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges command-line flags over the settings file (if any) over defaults.
    pub fn resolve(&self) -> Result<ConvertConfig> {
        let input = self.input.as_deref().ok_or_else(|| EtlError::UsageError {
            message: format!(
                "Please provide an input file path as an argument\n{}",
                USAGE
            ),
        })?;

        let settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path);
                let settings = TomlConfig::from_file(path)?;
                settings.validate()?;
                settings
            }
            None => TomlConfig::default(),
        };

        let mut config = ConvertConfig::from_settings(input, &settings);
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: String,
    pub output_path: String,
    pub required_columns: Vec<String>,
    pub max_steps: usize,
}

impl ConvertConfig {
    /// Defaults only: output derived from the input path.
    pub fn new(input_path: impl Into<String>) -> Self {
        Self::from_settings(input_path, &TomlConfig::default())
    }

    pub fn from_settings(input_path: impl Into<String>, settings: &TomlConfig) -> Self {
        let input_path = input_path.into();

        let suffix = settings.output_suffix().unwrap_or(DEFAULT_OUTPUT_SUFFIX);
        let output_path = derive_output_path(
            Path::new(&input_path),
            suffix,
            settings.output_directory().map(Path::new),
        )
        .to_string_lossy()
        .into_owned();

        let required_columns = settings
            .required_columns()
            .map(<[String]>::to_vec)
            .unwrap_or_else(|| {
                DEFAULT_REQUIRED_COLUMNS
                    .iter()
                    .map(|c| c.to_string())
                    .collect()
            });

        Self {
            input_path,
            output_path,
            required_columns,
            max_steps: settings.max_steps().unwrap_or(DEFAULT_MAX_STEPS),
        }
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_non_empty_list("required_columns", &self.required_columns)?;
        validate_positive_number("max_steps", self.max_steps, 1)?;

        if same_file_path(Path::new(&self.input_path), Path::new(&self.output_path)) {
            return Err(EtlError::ConfigValidationError {
                field: "output".to_string(),
                message: "Output path must differ from the input path".to_string(),
            });
        }
        Ok(())
    }
}

impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn required_columns(&self) -> &[String] {
        &self.required_columns
    }

    fn max_steps(&self) -> usize {
        self.max_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::new("exports/cases.csv");

        assert_eq!(config.output_path, "exports/cases_Testomatio.csv");
        assert_eq!(config.required_columns, vec!["Title", "Key", "Suite"]);
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = TomlConfig::from_toml_str(
            r#"
[input]
required_columns = ["Title"]

[transform]
max_steps = 8

[output]
suffix = "_import"
directory = "converted"
"#,
        )
        .unwrap();

        let config = ConvertConfig::from_settings("exports/cases.csv", &settings);
        assert_eq!(config.output_path, "converted/cases_import.csv");
        assert_eq!(config.required_columns, vec!["Title"]);
        assert_eq!(config.max_steps, 8);
    }

    #[test]
    fn test_output_must_differ_from_input() {
        let mut config = ConvertConfig::new("cases.csv");
        config.output_path = "cases.csv".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_spelled_differently_still_matches_input() {
        let mut config = ConvertConfig::new("cases.csv");
        config.output_path = "./cases.csv".to_string();
        assert!(matches!(
            config.validate(),
            Err(EtlError::ConfigValidationError { .. })
        ));
    }

    #[cfg(feature = "cli")]
    mod cli {
        use super::*;
        use clap::Parser;

        #[test]
        fn test_missing_input_is_usage_error() {
            let cli = CliConfig::parse_from(["testomatio-convert"]);
            match cli.resolve() {
                Err(EtlError::UsageError { message }) => assert!(message.contains(USAGE)),
                other => panic!("expected usage error, got {:?}", other),
            }
        }

        #[test]
        fn test_flags_override_settings() {
            let cli = CliConfig::parse_from([
                "testomatio-convert",
                "cases.csv",
                "--output",
                "elsewhere.csv",
                "--max-steps",
                "3",
            ]);
            let config = cli.resolve().unwrap();

            assert_eq!(config.input_path, "cases.csv");
            assert_eq!(config.output_path, "elsewhere.csv");
            assert_eq!(config.max_steps, 3);
        }

        #[test]
        fn test_zero_max_steps_rejected() {
            let cli = CliConfig::parse_from(["testomatio-convert", "cases.csv", "--max-steps", "0"]);
            assert!(matches!(
                cli.resolve(),
                Err(EtlError::InvalidConfigValueError { .. })
            ));
        }
    }
}

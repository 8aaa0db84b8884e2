pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::data::SchemaRevision;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "privacy-fixtures")]
#[command(about = "Generate DFD/DPIA fixture scenarios for compliance testing")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Root directory for scenario folders
    #[arg(long)]
    pub output_path: Option<String>,

    /// Prefix for generated file names, e.g. "out."
    #[arg(long)]
    pub file_prefix: Option<String>,

    #[arg(long, value_enum)]
    pub schema_revision: Option<SchemaRevision>,

    /// Scenarios to generate (default: all)
    #[arg(short, long = "scenario", value_delimiter = ',')]
    pub scenarios: Vec<String>,

    /// Render scenarios without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// List scenario names and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (or defaults), applies command line
    /// overrides and validates the result.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(output_path) = &self.output_path {
            config.generator.output_path = output_path.clone();
        }
        if let Some(prefix) = &self.file_prefix {
            config.generator.file_prefix = prefix.clone();
        }
        if let Some(revision) = self.schema_revision {
            config.generator.schema_revision = revision;
        }
        if !self.scenarios.is_empty() {
            config.generator.scenarios = self.scenarios.clone();
        }
    }
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::AdvisorConfig;

pub const DEFAULT_CATALOG_PATH: &str = "courses.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "course-advisor")]
#[command(about = "Interactive course catalog advisor")]
pub struct CliConfig {
    /// Course catalog file (overrides `catalog.path` from --config)
    #[arg(long)]
    pub catalog_path: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flag beats file, file beats the built-in default.
    pub fn resolve_catalog_path(&self, file_config: Option<&AdvisorConfig>) -> String {
        self.catalog_path
            .clone()
            .or_else(|| file_config.map(|c| c.catalog.path.clone()))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog_path {
            validate_path("catalog_path", path)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::FileSource;
pub use config::toml_config::AdvisorConfig;
pub use crate::core::catalog::Catalog;
pub use crate::core::loader::{validate_prerequisites, CourseLoader};
pub use crate::core::shell::{MenuChoice, Shell, ShellState};
pub use domain::model::{Course, DanglingPrerequisite, LoadReport};
pub use domain::ports::{CatalogSource, InMemorySource};
pub use utils::error::{AdvisorError, Result};

pub mod catalog;
pub mod loader;
pub mod shell;

pub use crate::domain::model::{Course, DanglingPrerequisite, LoadReport};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;

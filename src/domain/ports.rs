use crate::utils::error::Result;
use std::io::BufRead;

/// Where course lines come from. Each `open` yields a fresh reader over the
/// whole source; the reader is dropped once a load pass finishes.
pub trait CatalogSource {
    fn open(&self) -> Result<Box<dyn BufRead + '_>>;

    /// Human-readable location used in console diagnostics.
    fn describe(&self) -> String;
}

/// Course lines held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    content: String,
}

impl InMemorySource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl CatalogSource for InMemorySource {
    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.content.as_bytes()))
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

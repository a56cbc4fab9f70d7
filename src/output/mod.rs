mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::builder::ApplyLists;
use crate::error::Result;

/// Trait for rendering build results into an output format.
pub trait OutputFormatter {
    /// Format the lists into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, lists: &ApplyLists) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format; `verbose` only affects text output.
    #[must_use]
    pub fn formatter(self, verbose: u8) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::with_verbose(verbose)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

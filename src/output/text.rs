use std::fmt::Write;

use crate::builder::ApplyLists;
use crate::error::Result;

use super::OutputFormatter;

/// Plain text output: the apply list, one path per line.
///
/// At verbosity 1 and above the resolved exclusion and inclusion lists
/// follow as headed sections.
#[derive(Debug, Default)]
pub struct TextFormatter {
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_verbose(0)
    }

    #[must_use]
    pub const fn with_verbose(verbose: u8) -> Self {
        Self { verbose }
    }

    fn write_section(output: &mut String, title: &str, paths: &[String], empty_note: &str) {
        if paths.is_empty() {
            writeln!(output, "{title}: {empty_note}").ok();
            return;
        }
        writeln!(output, "{title} ({}):", paths.len()).ok();
        for path in paths {
            writeln!(output, "  {path}").ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, lists: &ApplyLists) -> Result<String> {
        let mut output = String::new();
        for path in &lists.apply {
            writeln!(output, "{path}").ok();
        }

        if self.verbose >= 1 {
            output.push('\n');
            Self::write_section(&mut output, "Exclusions", &lists.exclusions, "none");
            Self::write_section(
                &mut output,
                "Inclusions",
                &lists.inclusions,
                "none (all files eligible)",
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

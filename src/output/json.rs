use serde::Serialize;

use crate::builder::ApplyLists;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    #[serde(flatten)]
    lists: &'a ApplyLists,
}

#[derive(Serialize)]
struct Summary {
    apply: usize,
    exclusions: usize,
    inclusions: usize,
    inclusion_filter: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, lists: &ApplyLists) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                apply: lists.apply.len(),
                exclusions: lists.exclusions.len(),
                inclusions: lists.inclusions.len(),
                inclusion_filter: !lists.inclusions.is_empty(),
            },
            lists,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

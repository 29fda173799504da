use strut_checks::result::CheckRunResult;

use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}

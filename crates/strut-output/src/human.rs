use strut_checks::result::CheckRunResult;
use strut_core::diagnostics::{Diagnostic, Severity};

use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String {
        if result.diagnostics.is_empty() {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();
        for d in &result.diagnostics {
            out.push_str(&format_diagnostic(d));
        }

        let errors = result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        out.push_str(&format!(
            "\n{} error(s) in {} unit(s)\n",
            errors,
            result.units_analyzed.len(),
        ));

        out
    }
}

fn format_diagnostic(d: &Diagnostic) -> String {
    let severity_label = match d.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n",
        severity_label, d.check, d.message, d.file, d.span.line, d.span.col,
    );

    if let Some(text) = &d.source_text {
        out.push_str(&format!("   = source: {}\n", text));
    }

    if let Some(fix) = &d.fix {
        out.push_str(&format!("   = fix: {}", fix.message));
        if let Some(edit) = fix.edits.first() {
            out.push_str(&format!(" (`{}`)", edit.new_text));
        }
        out.push('\n');
    }

    out
}

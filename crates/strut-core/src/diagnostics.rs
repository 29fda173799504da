//! Diagnostic records produced by the convention checks.
//!
//! A diagnostic is a position, a message, and optionally a structured edit
//! that would fix the violation. Checks never print anything themselves; they
//! append to a [`DiagnosticSink`] and the driver decides how to render the
//! result.

use serde::{Deserialize, Serialize};

/// A half-open source range within a single file.
///
/// Lines and columns are 1-based; `end_col` points one past the last
/// character, so a zero-width span has `col == end_col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(line: u32, col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            line,
            col,
            end_line,
            end_col,
        }
    }

    /// A single-point span, useful when the front-end only reports a position.
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, line, col)
    }
}

/// Identifies which check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    LayerDependency,
    ConfigureReceiver,
    InjectReceiver,
    BindingConformance,
    InjectTags,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::LayerDependency => "layer-dependency",
            CheckId::ConfigureReceiver => "configure-receiver",
            CheckId::InjectReceiver => "inject-receiver",
            CheckId::BindingConformance => "binding-conformance",
            CheckId::InjectTags => "inject-tags",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a diagnostic. Convention violations are errors; the driver
/// reserves warnings for degraded-input situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

/// A single convention violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub check: CheckId,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub span: Span,
    /// Pretty-printed text of the offending node, when the front-end
    /// supplied it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    /// Mechanical rewrite that would resolve the violation. Only the
    /// receiver-shape check produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<SuggestedFix>,
}

impl Diagnostic {
    pub fn error(check: CheckId, message: impl Into<String>, file: &str, span: Span) -> Self {
        Self {
            check,
            severity: Severity::Error,
            message: message.into(),
            file: file.to_string(),
            span,
            source_text: None,
            fix: None,
        }
    }

    pub fn with_source_text(mut self, text: Option<String>) -> Self {
        self.source_text = text;
        self
    }

    pub fn with_fix(mut self, fix: SuggestedFix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// A suggested source rewrite, independent of how it is displayed or applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedFix {
    pub message: String,
    pub edits: Vec<TextEdit>,
}

/// Replace the text covered by `span` in `file` with `new_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEdit {
    pub file: String,
    pub span: Span,
    pub new_text: String,
}

/// Write-only sink the checks append to.
///
/// Implementations must preserve append order; the engine relies on that for
/// order-stable output.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// In-memory sink. Each engine worker owns a private buffer, merged by the
/// driver after the unit completes.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

//! Degradation records.

use crate::WarningCode;
use sapling_common::Span;
use std::fmt;

/// How much a degradation changed the tree. There is no error level: a
/// parse always produces a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Part of the input is missing from the tree or was kept verbatim.
    Warning,
    /// The tree is complete but holds a placeholder.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Note => "note",
        })
    }
}

/// Which stage noticed the degradation.
/// 发现降级的阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Expression,
    Statement,
}

/// A span with a short message, drawn under the source when rendered.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// One place where the parser had to guess.
/// 解析器做出猜测的一处位置。
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub code: Option<WarningCode>,
    pub message: String,
    /// Byte range in the whole parsed text.
    pub span: Span,
    pub labels: Vec<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            help: None,
        }
    }

    /// A diagnostic for `code`: its severity, description and suggestion.
    /// 根据警告码构建诊断：严重程度、描述与建议均取自警告码。
    pub fn from_code(kind: DiagnosticKind, span: Span, code: WarningCode) -> Self {
        let mut diag = Self::new(code.severity(), kind, span, code.description());
        diag.code = Some(code);
        diag.help = code.suggestion().map(str::to_string);
        diag
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn is(&self, code: WarningCode) -> bool {
        self.code == Some(code)
    }
}

/// One-line form: `warning[W0003]: unclosed delimiter at 10..11`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code.as_str())?;
        }
        write!(f, ": {} at {:?}", self.message, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_fills_help() {
        let diag = Diagnostic::from_code(
            DiagnosticKind::Expression,
            Span::from_usize(3, 4),
            WarningCode::UnclosedDelimiter,
        );
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.is(WarningCode::UnclosedDelimiter));
        assert_eq!(diag.help.as_deref(), Some("add the matching `)`"));
    }

    #[test]
    fn test_display_line() {
        let diag = Diagnostic::from_code(
            DiagnosticKind::Expression,
            Span::from_usize(10, 11),
            WarningCode::UnclosedDelimiter,
        );
        assert_eq!(diag.to_string(), "warning[W0003]: unclosed delimiter at 10..11");

        let plain = Diagnostic::new(Severity::Note, DiagnosticKind::Statement, Span::point(0), "x");
        assert_eq!(plain.to_string(), "note: x at 0..0");
    }
}

//! Degradation reporting for Sapling.
//! Sapling 的降级诊断报告。
//!
//! Parsing never fails; instead every place where the parser had to guess
//! can be reported as a warning. This crate holds those warnings and renders
//! them with ariadne.
//! 解析永不失败；解析器做出猜测之处会以警告形式报告，本 crate 使用 ariadne 渲染它们。

mod codes;
mod diagnostic;

pub use codes::WarningCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use ariadne::{Color, Label as AriadneLabel, Report, ReportKind, Source};
use std::ops::Range;

type SourceSpan<'a> = (&'a str, Range<usize>);

/// Render a diagnostic against its source to stderr.
/// 将诊断信息对照源码渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    // A closed stderr is not worth aborting the caller over.
    let _ = report(filename, diagnostic).eprint((filename, Source::from(source)));
}

fn report<'a>(filename: &'a str, diagnostic: &Diagnostic) -> Report<'a, SourceSpan<'a>> {
    let (kind, color) = match diagnostic.severity {
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
        Severity::Note => (ReportKind::Advice, Color::Blue),
    };

    let mut report = Report::build(kind, filename, diagnostic.span.range().start)
        .with_message(&diagnostic.message);

    if let Some(code) = diagnostic.code {
        report = report.with_code(code.as_str());
    }

    report = report.with_labels(diagnostic.labels.iter().map(|label| {
        AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(color)
    }));

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

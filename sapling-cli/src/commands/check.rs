//! The `sapling check` command.
//! `sapling check` 命令。

use super::{read_source, resolve_dialect};
use crate::output;
use sapling_diagnostic::emit;
use sapling_parser::{ParseConfig, parse_with_diagnostics};
use sapling_syntax::Dialect;

/// Parse a file and report every degradation, either rendered against the
/// source or as one `file:line: ...` line each.
/// 解析文件并报告所有降级，可对照源码渲染，或每条一行输出。
pub fn run(file: &str, dialect: Option<Dialect>, brief: bool, quiet: bool) -> Result<(), String> {
    let source = read_source(file)?;
    let config = ParseConfig::for_dialect(resolve_dialect(file, dialect));

    let (_, diagnostics) = parse_with_diagnostics(&source, &config);

    if !quiet {
        for diag in &diagnostics {
            if brief {
                println!("{}:{}: {}", file, line_of(&source, diag.span.range().start), diag);
            } else {
                emit(&source, file, diag);
            }
        }
    }

    if let Some(summary) = Summary::of(diagnostics.len(), quiet) {
        summary.print();
    }
    Ok(())
}

/// Closing status line of a check.
#[derive(Debug, PartialEq, Eq)]
enum Summary {
    Clean,
    BestEffort(usize),
}

impl Summary {
    /// `None` under `--quiet`.
    fn of(guesses: usize, quiet: bool) -> Option<Self> {
        match (quiet, guesses) {
            (true, _) => None,
            (false, 0) => Some(Summary::Clean),
            (false, n) => Some(Summary::BestEffort(n)),
        }
    }

    fn print(&self) {
        match self {
            Summary::Clean => output::success("OK - parsed without guessing"),
            Summary::BestEffort(n) => output::warning(format!(
                "{} parsed on a best-effort basis",
                output::count(*n, "place")
            )),
        }
    }
}

/// 1-based line number of byte offset `pos`.
fn line_of(source: &str, pos: usize) -> usize {
    let end = pos.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of() {
        let source = "a\nbb\nccc";
        assert_eq!(line_of(source, 0), 1);
        assert_eq!(line_of(source, 3), 2);
        assert_eq!(line_of(source, 5), 3);
        assert_eq!(line_of(source, 99), 3);
    }

    #[test]
    fn test_quiet_has_no_summary() {
        assert_eq!(Summary::of(0, true), None);
        assert_eq!(Summary::of(3, true), None);
        assert_eq!(Summary::of(0, false), Some(Summary::Clean));
        assert_eq!(Summary::of(2, false), Some(Summary::BestEffort(2)));
    }
}

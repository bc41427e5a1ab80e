//! The `sapling parse` command.
//! `sapling parse` 命令。

use super::{read_source, render, resolve_dialect};
use crate::{Format, output};
use sapling_parser::build;
use sapling_syntax::Dialect;

/// Parse a file and print its tree to stdout.
/// 解析文件并将语法树打印到标准输出。
pub fn run(
    file: &str,
    dialect: Option<Dialect>,
    format: Format,
    show_ids: bool,
    verbose: bool,
) -> Result<(), String> {
    let source = read_source(file)?;
    let dialect = resolve_dialect(file, dialect);

    if verbose {
        output::info(format!("Parsing '{}' as {}", file, dialect));
    }

    let tree = build(&source, dialect);

    if verbose {
        output::info(format!("Built {}", output::count(tree.len(), "node")));
    }

    print!("{}", render(&tree, format, show_ids)?);
    Ok(())
}

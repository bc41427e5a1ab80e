//! The `sapling expr` command.

use super::render;
use crate::Format;
use sapling_parser::parse_expression_in;
use sapling_syntax::Dialect;

pub fn run(expr: &str, dialect: Dialect, format: Format, show_ids: bool) -> Result<(), String> {
    let tree = parse_expression_in(expr, dialect);
    print!("{}", render(&tree, format, show_ids)?);
    Ok(())
}

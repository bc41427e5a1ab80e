//! CLI command implementations.

pub mod check;
pub mod expr;
pub mod parse;

use crate::Format;
use crate::printer::Printer;
use sapling_syntax::{Dialect, Node};
use std::fs;
use std::path::Path;

/// Read a source file into a string.
pub fn read_source(file: &str) -> Result<String, String> {
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

/// The dialect given on the command line, or one guessed from `file`'s
/// extension.
pub fn resolve_dialect(file: &str, dialect: Option<Dialect>) -> Dialect {
    dialect.unwrap_or_else(|| {
        Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(Dialect::Expression, Dialect::from_extension)
    })
}

/// Render a tree in the requested format.
pub fn render(node: &Node, format: Format, show_ids: bool) -> Result<String, String> {
    match format {
        Format::Tree => Ok(Printer::new(2, show_ids).print(node)),
        Format::Json => serde_json::to_string_pretty(node)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| format!("cannot serialize tree: {}", e)),
    }
}

//! Operator precedence tables.
//! 运算符优先级表。
//!
//! Every dialect runs the same precedence-climbing parser; they differ only
//! in the table selected here.
//! 所有方言共用同一个优先级爬升解析器，仅在此处选择的表上不同。

use sapling_lexer::TokenTable;
use sapling_syntax::Dialect;

/// How operators of one level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// One binary precedence level.
#[derive(Debug)]
pub struct Level {
    pub ops: &'static [&'static str],
    pub assoc: Assoc,
}

impl Level {
    const fn left(ops: &'static [&'static str]) -> Self {
        Level {
            ops,
            assoc: Assoc::Left,
        }
    }
}

/// An expression grammar.
#[derive(Debug)]
pub struct Grammar {
    pub table: &'static TokenTable,
    /// Binary levels, lowest binding power first.
    pub levels: &'static [Level],
    /// Prefix operators, right-associative, binding tighter than any level.
    pub prefixes: &'static [&'static str],
    /// Postfix operators applied directly to an identifier.
    pub postfixes: &'static [&'static str],
}

/// Flat arithmetic: `+ -`, `* / %`, then right-associative `^`.
pub static ARITHMETIC: Grammar = Grammar {
    table: &TokenTable::ARITHMETIC,
    levels: &[
        Level::left(&["+", "-"]),
        Level::left(&["*", "/", "%"]),
        Level {
            ops: &["^"],
            assoc: Assoc::Right,
        },
    ],
    prefixes: &["-"],
    postfixes: &[],
};

/// C and Java style operators.
pub static C_FAMILY: Grammar = Grammar {
    table: &TokenTable::STATEMENT,
    levels: &[
        Level::left(&["||"]),
        Level::left(&["&&"]),
        Level::left(&["==", "!="]),
        Level::left(&["<", ">", "<=", ">="]),
        Level::left(&["+", "-"]),
        Level::left(&["*", "/", "%"]),
    ],
    prefixes: &["-", "!", "++", "--"],
    postfixes: &["++", "--"],
};

/// C-family operators plus Python's word operators.
pub static PYTHON: Grammar = Grammar {
    table: &TokenTable::STATEMENT,
    levels: &[
        Level::left(&["||", "or"]),
        Level::left(&["&&", "and"]),
        Level::left(&["==", "!="]),
        Level::left(&["<", ">", "<=", ">="]),
        Level::left(&["+", "-"]),
        Level::left(&["*", "/", "%"]),
    ],
    prefixes: &["-", "!", "not"],
    postfixes: &[],
};

impl Grammar {
    pub fn for_dialect(dialect: Dialect) -> &'static Grammar {
        match dialect {
            Dialect::Expression => &ARITHMETIC,
            Dialect::CLike | Dialect::JavaLike => &C_FAMILY,
            Dialect::PythonLike => &PYTHON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_levels_follow_c_order() {
        let ops: Vec<_> = C_FAMILY.levels.iter().map(|l| l.ops[0]).collect();
        assert_eq!(ops, vec!["||", "&&", "==", "<", "+", "*"]);
    }

    #[test]
    fn test_python_word_operators() {
        let ops: Vec<_> = PYTHON.levels.iter().map(|l| l.ops[0]).collect();
        assert_eq!(ops, vec!["or", "and", "==", "<", "+", "*"]);
        assert!(PYTHON.prefixes.contains(&"not"));
        assert!(!C_FAMILY.prefixes.contains(&"not"));
    }
}

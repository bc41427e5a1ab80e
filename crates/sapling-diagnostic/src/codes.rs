//! Warning codes for best-effort parsing.

use crate::Severity;

/// Every way a parse can degrade while still producing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    TrailingInput,
    MissingOperand,
    UnclosedDelimiter,
    EmptyExpression,
    UnparsedLine,
    RawFallback,
    NestingTooDeep,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::TrailingInput => "W0001",
            WarningCode::MissingOperand => "W0002",
            WarningCode::UnclosedDelimiter => "W0003",
            WarningCode::EmptyExpression => "W0004",
            WarningCode::UnparsedLine => "W0005",
            WarningCode::RawFallback => "W0006",
            WarningCode::NestingTooDeep => "W0007",
        }
    }

    /// Human-readable description of the degradation.
    pub fn description(&self) -> &'static str {
        match self {
            WarningCode::TrailingInput => "input after the expression was ignored",
            WarningCode::MissingOperand => "operator is missing an operand",
            WarningCode::UnclosedDelimiter => "unclosed delimiter",
            WarningCode::EmptyExpression => "expected an expression, found nothing",
            WarningCode::UnparsedLine => "line was not recognized and has been dropped",
            WarningCode::RawFallback => "text could not be parsed and was kept verbatim",
            WarningCode::NestingTooDeep => "expression nesting is too deep",
        }
    }

    /// An empty expression still yields a placeholder leaf, so it is only
    /// a note; every other code means input was lost or kept verbatim.
    pub fn severity(&self) -> Severity {
        match self {
            WarningCode::EmptyExpression => Severity::Note,
            _ => Severity::Warning,
        }
    }

    /// A hint for the user, if one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            WarningCode::UnclosedDelimiter => Some("add the matching `)`"),
            WarningCode::MissingOperand => Some("add an operand after the operator"),
            WarningCode::NestingTooDeep => Some("raise `max_depth` or flatten the expression"),
            _ => None,
        }
    }
}

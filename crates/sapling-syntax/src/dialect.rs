//! Source dialects.
//! 源码方言。

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which pseudo-language governs recognition.
/// 决定识别规则的伪语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// A single arithmetic expression. / 单个算术表达式。
    #[default]
    Expression,
    /// C-like, line oriented. / 类 C，按行识别。
    CLike,
    /// Python-like, line oriented. / 类 Python，按行识别。
    PythonLike,
    /// Java-like, line oriented. / 类 Java，按行识别。
    JavaLike,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Expression,
        Dialect::CLike,
        Dialect::PythonLike,
        Dialect::JavaLike,
    ];

    /// Whether the text is recognized line by line.
    pub fn is_line_oriented(self) -> bool {
        !matches!(self, Dialect::Expression)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Expression => "expression",
            Dialect::CLike => "c-like",
            Dialect::PythonLike => "python-like",
            Dialect::JavaLike => "java-like",
        }
    }

    /// Guess a dialect from a file extension, without the dot.
    /// 根据文件扩展名（不含点）推断方言。
    pub fn from_extension(ext: &str) -> Dialect {
        match ext {
            "c" | "h" | "cpp" | "cc" => Dialect::CLike,
            "py" => Dialect::PythonLike,
            "java" => Dialect::JavaLike,
            _ => Dialect::Expression,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect `{0}` (expected expression, c-like, python-like or java-like)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expression" | "expr" => Ok(Dialect::Expression),
            "c" | "c-like" | "clike" => Ok(Dialect::CLike),
            "python" | "py" | "python-like" => Ok(Dialect::PythonLike),
            "java" | "java-like" => Ok(Dialect::JavaLike),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

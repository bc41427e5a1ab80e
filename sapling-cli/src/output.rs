//! Status lines for the CLI.
//! CLI 状态输出。
//!
//! Trees go to stdout; everything here goes to stderr except the final
//! success line, so `sapling parse ... > tree.txt` captures only the tree.
//! 语法树写入标准输出；此处除成功消息外均写入标准错误。

use std::fmt::Display;

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: impl Display) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print a warning message in yellow.
/// 以黄色打印警告消息。
pub fn warning(msg: impl Display) {
    eprintln!("\x1b[33mwarning:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: impl Display) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}

/// `1 place`, `3 places`.
pub fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

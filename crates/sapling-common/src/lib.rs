//! Common utilities shared by the Sapling crates.
//! Sapling 各 crate 共享的基础工具。
//!
//! - `Span`: byte ranges into the text handed to the parser
//! - `SourceLines`: splitting text into logical lines with their spans

mod lines;
mod span;

pub use lines::{Line, SourceLines};
pub use span::{BytePos, Span};

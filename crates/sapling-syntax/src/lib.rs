//! Syntax tree definitions for Sapling.
//! Sapling 的语法树定义。
//!
//! The tree produced by the parser is made of a single node type, [`Node`],
//! classified twice: by structural role ([`NodeKind`]) and by lexical
//! category ([`Category`]). Trees are immutable once returned.
//! 解析器产出的树只有一种节点类型 [`Node`]，按结构角色与词法类别双重分类，返回后不可变。

mod dialect;
mod id;
mod node;

pub use dialect::{Dialect, UnknownDialect};
pub use id::{IdGen, NodeId};
pub use node::{Category, Node, NodeKind, Preorder};

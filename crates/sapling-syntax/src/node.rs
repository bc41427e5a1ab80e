//! The syntax tree node.
//! 语法树节点。

use crate::NodeId;
use serde::Serialize;
use std::fmt;

/// Structural role of a node.
/// 节点的结构角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Root of every tree / 树根
    Program,
    /// `int add(int a, int b)` / 函数声明
    FunctionDeclaration,
    /// `int x = 5;` / 变量声明
    VariableDeclaration,
    /// Container for variable declarations / 声明分组
    DeclarationsGroup,
    /// Container for everything else / 语句分组
    StatementsGroup,
    /// Container for function parameters / 参数列表
    ParameterList,
    /// A single `<type> <name>` parameter / 单个参数声明
    Declaration,
    If,
    While,
    For,
    Return,
    /// `target = value` / 赋值
    Assignment,
    BinaryOp,
    UnaryOp,
    /// `f(args)` / 函数调用
    Call,
    Identifier,
    Constant,
    Keyword,
    /// A bare expression used as a statement / 表达式语句
    Statement,
    /// A labelled expression slot, e.g. the parts of a `for` header
    /// 带标签的表达式槽位，例如 `for` 头部的各部分
    Expression,
}

impl NodeKind {
    /// Whether this kind is synthetic scaffolding rather than a source
    /// construct. Consumers use this instead of comparing labels.
    /// 是否为合成的结构性节点（而非源码构造）。
    pub fn is_grouping(self) -> bool {
        matches!(
            self,
            NodeKind::Program
                | NodeKind::DeclarationsGroup
                | NodeKind::StatementsGroup
                | NodeKind::ParameterList
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::FunctionDeclaration => "function-declaration",
            NodeKind::VariableDeclaration => "variable-declaration",
            NodeKind::DeclarationsGroup => "declarations-group",
            NodeKind::StatementsGroup => "statements-group",
            NodeKind::ParameterList => "parameter-list",
            NodeKind::Declaration => "declaration",
            NodeKind::If => "if",
            NodeKind::While => "while",
            NodeKind::For => "for",
            NodeKind::Return => "return",
            NodeKind::Assignment => "assignment",
            NodeKind::BinaryOp => "binary-op",
            NodeKind::UnaryOp => "unary-op",
            NodeKind::Call => "call",
            NodeKind::Identifier => "identifier",
            NodeKind::Constant => "constant",
            NodeKind::Keyword => "keyword",
            NodeKind::Statement => "statement",
            NodeKind::Expression => "expression",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical category, used for presentation only.
/// 词法类别，仅用于展示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Keyword,
    Operator,
    Identifier,
    Constant,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Identifier => "identifier",
            Category::Constant => "constant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax tree node. Children are owned; the tree has no back references.
///
/// Nodes are assembled bottom-up with [`Node::new`] and the `with_*`
/// builders, then handed out read-only: there are no mutating accessors.
/// 节点自底向上构建，之后只读；子节点按插入顺序保存，顺序有语义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    lexeme: String,
    category: Category,
    children: Vec<Node>,
    /// Levels in this subtree; a leaf is 1.
    #[serde(skip)]
    height: usize,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, category: Category, lexeme: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            lexeme: lexeme.into(),
            category,
            children: Vec::new(),
            height: 1,
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.height = self.height.max(child.height + 1);
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self = self.with_child(child);
        }
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels from this node down to its deepest leaf.
    /// 子树高度，叶子为 1。
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pre-order traversal starting at this node.
    /// 从当前节点开始的先序遍历。
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a subtree contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First node of the given kind in pre-order.
    pub fn find(&self, kind: NodeKind) -> Option<&Node> {
        self.iter().find(|n| n.kind == kind)
    }

    /// Structural equality ignoring ids.
    /// 忽略 id 的结构相等比较。
    pub fn same_shape(&self, other: &Node) -> bool {
        self.kind == other.kind
            && self.lexeme == other.lexeme
            && self.category == other.category
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_shape(b))
    }
}

// Freed with an explicit work stack so arbitrarily deep trees can be dropped.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over a subtree.
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

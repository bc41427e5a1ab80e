//! Indented text dump of a syntax tree.
//! 语法树的缩进文本转储。

use sapling_syntax::Node;

/// Builds an indented, one-node-per-line view of a tree.
/// 构建缩进的、每行一个节点的树视图。
pub struct Printer {
    /// Output buffer. / 输出缓冲区。
    output: String,
    /// Spaces per depth level. / 每层缩进的空格数。
    indent_width: usize,
    /// Whether to print node ids. / 是否打印节点 id。
    show_ids: bool,
}

impl Printer {
    pub fn new(indent_width: usize, show_ids: bool) -> Self {
        Self {
            output: String::new(),
            indent_width,
            show_ids,
        }
    }

    /// Render `node` and its subtree, returning the text.
    /// 渲染 `node` 及其子树并返回文本。
    pub fn print(mut self, node: &Node) -> String {
        self.node(node, 0);
        self.output
    }

    fn node(&mut self, node: &Node, depth: usize) {
        self.output.push_str(&" ".repeat(depth * self.indent_width));
        if self.show_ids {
            self.output.push_str(&format!("#{} ", node.id()));
        }
        self.output.push_str(node.kind().as_str());
        if !node.lexeme().is_empty() {
            self.output.push_str(&format!(" `{}`", node.lexeme()));
        }
        self.output.push_str(&format!(" [{}]\n", node.category()));

        for child in node.children() {
            self.node(child, depth + 1);
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(2, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapling_syntax::{Category, NodeId, NodeKind};

    #[test]
    fn test_print_nested() {
        let tree = Node::new(NodeId(2), NodeKind::UnaryOp, Category::Operator, "-")
            .with_child(Node::new(NodeId(1), NodeKind::Constant, Category::Constant, "1"));
        assert_eq!(
            Printer::default().print(&tree),
            "unary-op `-` [operator]\n  constant `1` [constant]\n"
        );
        assert!(Printer::new(2, true).print(&tree).starts_with("#2 unary-op"));
    }
}

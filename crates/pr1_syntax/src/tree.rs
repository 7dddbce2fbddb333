//! Parse tree built by the parser.
//!
//! Nodes live in a single arena owned by [`ParseTree`] and refer to each
//! other by [`NodeId`]. Interior nodes are grammar rules (name only); leaves
//! are matched terminals (name = the token kind's description, value = the
//! token text). Every node except the root records its parent, so the tree
//! can be walked both ways without reference cycles.
//!
//! The tree is append-only: `start_rule`/`end_rule` move a cursor up and
//! down, `add_node` attaches leaves under the cursor, and nothing is ever
//! removed. A failed match simply leaves a rule node with fewer children.

use crate::lexer::Token;

/// Line number given to synthetic nodes (the root, rules opened at EOF).
const NO_LINE: i32 = -1;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One parse tree node: a rule (no value) or a matched terminal (with value).
#[derive(Debug, Clone)]
pub struct ParseTreeNode {
    pub name: String,
    /// Token text for leaves, `None` for rule nodes.
    pub value: Option<String>,
    /// Line of the first token under this node, or [`NO_LINE`].
    pub line: i32,
    pub source_file: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl ParseTreeNode {
    fn rule(name: &str, line: i32, source_file: Option<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            value: None,
            line,
            source_file,
            children: Vec::new(),
            parent,
        }
    }
}

/// Arena parse tree with a cursor for the rule currently being built.
#[derive(Debug)]
pub struct ParseTree {
    nodes: Vec<ParseTreeNode>,
    /// Rule node that new children attach to.
    current: NodeId,
    /// Enclosing rules of `current`, innermost last.
    stack: Vec<NodeId>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![ParseTreeNode::rule("ROOT", NO_LINE, None, None)],
            current: NodeId(0),
            stack: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &ParseTreeNode {
        &self.nodes[id.0]
    }

    /// Open a rule node under the cursor and descend into it.
    pub fn start_rule(&mut self, name: &str, line: i32, source_file: Option<String>) {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(ParseTreeNode::rule(name, line, source_file, Some(self.current)));
        self.nodes[self.current.0].children.push(id);
        self.stack.push(self.current);
        self.current = id;
    }

    /// Close the current rule and return the cursor to its parent.
    /// A spurious call at the root is ignored.
    pub fn end_rule(&mut self) {
        if let Some(parent) = self.stack.pop() {
            self.current = parent;
        }
    }

    /// Attach a matched terminal as a leaf under the current rule.
    pub fn add_node(&mut self, token: &Token) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ParseTreeNode {
            name: token.kind.description().to_string(),
            value: Some(token.text.clone()),
            line: token.line as i32,
            source_file: token.source_file.clone(),
            children: Vec::new(),
            parent: Some(self.current),
        });
        self.nodes[self.current.0].children.push(id);
    }

    /// Rule nodes with a real source position, in the order they were opened.
    pub fn matched_rules(&self) -> impl Iterator<Item = &ParseTreeNode> {
        self.nodes
            .iter()
            .filter(|n| n.value.is_none() && n.line > 0)
    }

    /// Render the tree as indented text, one node per line.
    ///
    /// `show_files` appends the source file to each positioned node, for
    /// output that mixes spliced inclusions.
    pub fn render(&self, show_files: bool) -> String {
        let mut out = String::new();
        self.render_node(self.root(), 0, show_files, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, show_files: bool, out: &mut String) {
        let node = self.node(id);
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node.name);
        if let Some(value) = &node.value {
            out.push_str(": ");
            out.push_str(value);
        }
        if node.line >= 0 {
            match (show_files, &node.source_file) {
                (true, Some(file)) => {
                    out.push_str(&format!(" (Line {}, File: {})", node.line, file));
                }
                _ => out.push_str(&format!(" (Line {})", node.line)),
            }
        }
        out.push('\n');
        for &child in &node.children {
            self.render_node(child, depth + 1, show_files, out);
        }
    }

    /// True when the cursor is back at the root (all opened rules closed).
    pub fn current_is_root(&self) -> bool {
        self.current == self.root()
    }

    /// Number of rules currently open.
    pub fn open_rule_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn leaf(kind: TokenKind, text: &str, line: u32) -> Token {
        Token::new(kind, text, line, None)
    }

    #[test]
    fn test_start_end_moves_cursor() {
        let mut tree = ParseTree::new();
        assert!(tree.current_is_root());
        tree.start_rule("Program", 1, None);
        assert!(!tree.current_is_root());
        assert_eq!(tree.open_rule_depth(), 1);
        tree.end_rule();
        assert!(tree.current_is_root());
    }

    #[test]
    fn test_end_rule_at_root_is_ignored() {
        let mut tree = ParseTree::new();
        tree.end_rule();
        tree.end_rule();
        assert!(tree.current_is_root());
    }

    #[test]
    fn test_leaves_attach_under_current_rule() {
        let mut tree = ParseTree::new();
        tree.start_rule("VarDeclaration", 2, None);
        tree.add_node(&leaf(TokenKind::Integer, "Ire", 2));
        tree.add_node(&leaf(TokenKind::Identifier, "x", 2));
        tree.end_rule();

        let rule_id = tree.node(tree.root()).children[0];
        let rule = tree.node(rule_id);
        assert_eq!(rule.name, "VarDeclaration");
        assert_eq!(rule.children.len(), 2);
        let first_leaf = tree.node(rule.children[0]);
        assert_eq!(first_leaf.value.as_deref(), Some("Ire"));
        assert_eq!(first_leaf.parent, Some(rule_id));
    }

    #[test]
    fn test_parent_pointers_reach_root() {
        let mut tree = ParseTree::new();
        tree.start_rule("A", 1, None);
        tree.start_rule("B", 1, None);
        tree.add_node(&leaf(TokenKind::Identifier, "x", 1));
        tree.end_rule();
        tree.end_rule();

        // Walk up from the deepest leaf.
        let a = tree.node(tree.root()).children[0];
        let b = tree.node(a).children[0];
        let x = tree.node(b).children[0];
        assert_eq!(tree.node(x).parent, Some(b));
        assert_eq!(tree.node(b).parent, Some(a));
        assert_eq!(tree.node(a).parent, Some(tree.root()));
        assert_eq!(tree.node(tree.root()).parent, None);
    }

    #[test]
    fn test_render_indentation_and_positions() {
        let mut tree = ParseTree::new();
        tree.start_rule("Program", 1, None);
        tree.add_node(&leaf(TokenKind::StartStatement, "Program", 1));
        tree.end_rule();

        let rendered = tree.render(false);
        assert_eq!(
            rendered,
            "ROOT\n  Program (Line 1)\n    Start Statement: Program (Line 1)\n"
        );
    }

    #[test]
    fn test_render_with_files() {
        let mut tree = ParseTree::new();
        tree.start_rule("VarDeclaration", 1, Some("lib.pr1".to_string()));
        tree.add_node(&Token::new(TokenKind::Integer, "Ire", 1, Some("lib.pr1".to_string())));
        tree.end_rule();

        let rendered = tree.render(true);
        assert!(rendered.contains("VarDeclaration (Line 1, File: lib.pr1)"));
        assert!(rendered.contains("Integer: Ire (Line 1, File: lib.pr1)"));
    }

    #[test]
    fn test_matched_rules_skip_root_and_synthetic() {
        let mut tree = ParseTree::new();
        tree.start_rule("Program", 1, None);
        tree.start_rule("ClassDeclarationList", -1, None);
        tree.end_rule();
        tree.start_rule("ClassDeclaration", 2, None);
        tree.end_rule();
        tree.end_rule();

        let names: Vec<&str> = tree.matched_rules().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Program", "ClassDeclaration"]);
    }
}

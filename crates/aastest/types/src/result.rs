//! Hierarchical conformance results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single result node.
///
/// Ordered so that `Info < Warning < Error < Critical`; the effective level
/// of a subtree is the maximum over all of its nodes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One node of a result tree.
///
/// Children are owned exclusively by their parent and are only ever
/// appended, so a finished subtree is never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultNode {
    message: String,
    level: Level,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ResultNode>,
}

impl ResultNode {
    /// Create an `Info` node.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_level(message, Level::Info)
    }

    /// Create a node with an explicit level.
    pub fn with_level(message: impl Into<String>, level: Level) -> Self {
        Self {
            message: message.into(),
            level,
            children: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, Level::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, Level::Error)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::with_level(message, Level::Critical)
    }

    /// Append a child node.
    pub fn append(&mut self, child: ResultNode) {
        self.children.push(child);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The level of this node alone, ignoring descendants.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn children(&self) -> &[ResultNode] {
        &self.children
    }

    /// Maximum level among this node and all of its descendants.
    pub fn effective_level(&self) -> Level {
        self.children
            .iter()
            .map(ResultNode::effective_level)
            .fold(self.level, Ord::max)
    }

    /// `true` unless an `Error` or `Critical` node exists in the subtree.
    pub fn ok(&self) -> bool {
        self.effective_level() < Level::Error
    }

    /// Depth-first search for a node whose message contains `needle`.
    pub fn find(&self, needle: &str) -> Option<&ResultNode> {
        if self.message.contains(needle) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(needle))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self.level {
            Level::Info => writeln!(f, "{}{}", indent, self.message)?,
            level => writeln!(f, "{}[{}] {}", indent, level, self.message)?,
        }
        for child in &self.children {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ResultNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_info_and_warning_tree_is_ok() {
        let mut root = ResultNode::new("root");
        let mut child = ResultNode::new("child");
        child.append(ResultNode::warning("careful"));
        root.append(child);
        assert!(root.ok());
        assert_eq!(root.effective_level(), Level::Warning);
    }

    #[test]
    fn test_deep_error_propagates_to_root() {
        let mut leaf_parent = ResultNode::new("parent");
        leaf_parent.append(ResultNode::error("bad"));
        let mut mid = ResultNode::new("mid");
        mid.append(leaf_parent);
        let mut root = ResultNode::new("root");
        root.append(ResultNode::new("sibling"));
        root.append(mid);

        assert!(!root.ok());
        assert_eq!(root.effective_level(), Level::Error);
        assert_eq!(root.level(), Level::Info);
        assert!(root.children()[0].ok());
    }

    #[test]
    fn test_critical_dominates() {
        let mut root = ResultNode::error("failed");
        root.append(ResultNode::critical("crashed"));
        assert_eq!(root.effective_level(), Level::Critical);
    }

    #[test]
    fn test_render_nested_text() {
        let mut root = ResultNode::new("Checking compliance");
        let mut probe = ResultNode::new("Trying to reach http://localhost");
        probe.append(ResultNode::warning("Skipped due to dry run"));
        root.append(probe);

        let text = root.to_string();
        assert_eq!(
            text,
            "Checking compliance\n  Trying to reach http://localhost\n    [WARNING] Skipped due to dry run\n"
        );
    }

    #[test]
    fn test_find() {
        let mut root = ResultNode::new("root");
        let mut summary = ResultNode::new("Summary");
        summary.append(ResultNode::new("Semantic tests passed: 1 / 1"));
        root.append(summary);

        assert!(root.find("Semantic tests passed").is_some());
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_serialize_skips_empty_children() {
        let node = ResultNode::error("boom");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["level"], "ERROR");
        assert!(json.get("children").is_none());
    }
}

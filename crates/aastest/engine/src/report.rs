//! Run reports.

use aastest_types::{ConfusionMatrix, Level, ResultNode};
use serde::{Deserialize, Serialize};

/// Outcome of checking one server against one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Normalized profile name.
    pub profile: String,
    pub server: String,
    pub result: ResultNode,
    pub matrix: ConfusionMatrix,
}

impl RunReport {
    pub fn new(
        profile: impl Into<String>,
        server: impl Into<String>,
        result: ResultNode,
        matrix: ConfusionMatrix,
    ) -> Self {
        Self {
            profile: profile.into(),
            server: server.into(),
            result,
            matrix,
        }
    }

    /// `true` unless an error or crash was recorded.
    pub fn ok(&self) -> bool {
        self.result.ok()
    }

    pub fn level(&self) -> Level {
        self.result.effective_level()
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut output = self.result.to_string();
        output.push('\n');
        output.push_str(&self.matrix.to_string());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_follows_result_tree() {
        let mut root = ResultNode::new("Checking compliance to Description API");
        root.append(ResultNode::warning("Skipped due to dry run"));
        let report = RunReport::new("Description API", "http://localhost", root.clone(), ConfusionMatrix::default());
        assert!(report.ok());
        assert_eq!(report.level(), Level::Warning);

        root.append(ResultNode::critical("Server crashed with code 500: "));
        let report = RunReport::new("Description API", "http://localhost", root, ConfusionMatrix::default());
        assert!(!report.ok());
        assert!(report.to_text().starts_with("Checking compliance to Description API\n"));
    }

    #[test]
    fn test_serializes_to_json() {
        let report = RunReport::new(
            "Description API",
            "http://localhost",
            ResultNode::new("root"),
            ConfusionMatrix::default(),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["profile"], "Description API");
        assert_eq!(value["matrix"]["valid_accepted"], 0);
    }
}

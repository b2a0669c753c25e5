//! Confusion matrix over generated requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ground-truth validity × observed acceptance.
///
/// Every classified request increments exactly one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub valid_accepted: u64,
    pub valid_rejected: u64,
    pub invalid_accepted: u64,
    pub invalid_rejected: u64,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified request.
    pub fn add(&mut self, expected_valid: bool, was_accepted: bool) {
        let counter = match (expected_valid, was_accepted) {
            (true, true) => &mut self.valid_accepted,
            (true, false) => &mut self.valid_rejected,
            (false, true) => &mut self.invalid_accepted,
            (false, false) => &mut self.invalid_rejected,
        };
        *counter += 1;
    }

    pub fn total_valid(&self) -> u64 {
        self.valid_accepted + self.valid_rejected
    }

    pub fn total_invalid(&self) -> u64 {
        self.invalid_accepted + self.invalid_rejected
    }

    pub fn total(&self) -> u64 {
        self.total_valid() + self.total_invalid()
    }

    /// invalid_rejected / total_invalid, `None` without invalid requests.
    pub fn syntactic_pass_rate(&self) -> Option<f64> {
        ratio(self.invalid_rejected, self.total_invalid())
    }

    /// valid_accepted / total_valid, `None` without valid requests.
    pub fn semantic_pass_rate(&self) -> Option<f64> {
        ratio(self.valid_accepted, self.total_valid())
    }

    /// Add the counters of another matrix into this one.
    pub fn merge(&mut self, other: &ConfusionMatrix) {
        self.valid_accepted += other.valid_accepted;
        self.valid_rejected += other.valid_rejected;
        self.invalid_accepted += other.invalid_accepted;
        self.invalid_rejected += other.invalid_rejected;
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "              accepted  rejected")?;
        writeln!(
            f,
            "valid    {:>13}  {:>8}",
            self.valid_accepted, self.valid_rejected
        )?;
        write!(
            f,
            "invalid  {:>13}  {:>8}",
            self.invalid_accepted, self.invalid_rejected
        )
    }
}

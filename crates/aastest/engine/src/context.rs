//! Run-scoped mutable state.

use aastest_contract::SampleCache;
use aastest_types::ConfusionMatrix;

/// State shared by all test cases of one run.
///
/// Created when a run starts and dropped when it ends.
#[derive(Debug, Default)]
pub struct RunContext {
    pub sample_cache: SampleCache,
    pub matrix: ConfusionMatrix,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }
}

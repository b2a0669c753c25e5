//! Core types for aastest conformance runs.
//!
//! - [`ResultNode`]: a hierarchical, severity-leveled outcome record. It is
//!   used both for rendering a report and for flow control (the orchestrator
//!   checks [`ResultNode::ok`] after each setup phase).
//! - [`ConfusionMatrix`]: ground-truth validity of every generated request
//!   crossed with whether the server accepted it.

pub mod matrix;
pub mod result;

pub use matrix::ConfusionMatrix;
pub use result::{Level, ResultNode};

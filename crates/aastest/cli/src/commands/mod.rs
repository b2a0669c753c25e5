//! CLI command implementations

pub mod api;
pub mod profiles;

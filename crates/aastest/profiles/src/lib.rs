//! Profile registry for the AAS HTTP API family.
//!
//! A profile (API, service specification or service-specification profile)
//! maps to an ordered list of members. Each member is either a leaf operation
//! id or the name of another profile. [`ProfileRegistry::resolve`] flattens a
//! name into the set of operation ids it covers.
//!
//! ```rust
//! use aastest_profiles::ProfileRegistry;
//!
//! let registry = ProfileRegistry::builtin();
//! let ops = registry.resolve("Description API").unwrap();
//! assert!(ops.contains("GetSelfDescription"));
//! ```

pub mod builtin;
pub mod error;
pub mod registry;

pub use builtin::SSP_PREFIX;
pub use error::{ProfileError, ProfileResult};
pub use registry::{normalize_name, ProfileRegistry};

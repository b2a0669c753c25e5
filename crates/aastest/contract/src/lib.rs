//! API contract collaborator for the aastest engine.
//!
//! The engine treats three concerns as external and reaches them through
//! this crate:
//!
//! - **Contract**: which operations exist, their method, path template and
//!   parameters ([`ApiContract`], [`Operation`]). Version 3.0 of the AAS
//!   HTTP API ships as a static table.
//! - **Request generation**: turning an operation plus value bindings into
//!   a [`RequestGraph`] of concrete requests, each tagged valid or invalid
//!   ([`RequestGenerator`], [`ParameterGenerator`]).
//! - **Transport**: sending a request to a server ([`Transport`],
//!   [`HttpTransport`]).

pub mod contract;
pub mod encoding;
pub mod error;
pub mod generate;
pub mod operation;
pub mod request;
pub mod transport;
mod v3_0;

pub use contract::{ApiContract, DEFAULT_VERSION};
pub use encoding::{b64url, b64url_decode};
pub use error::{ContractError, ContractResult, TransportError, TransportResult};
pub use generate::{GraphPath, ParameterGenerator, RequestGenerator, RequestGraph};
pub use operation::{Method, Operation, ParamKind, ParamLocation, Parameter};
pub use request::{Request, RequestBody, SampleCache, ValueBindings};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportConfig};

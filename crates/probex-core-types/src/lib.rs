//! Probex core types
//!
//! Dependency-light vocabulary shared by the kernel, the engine and the
//! transports: correlation ids and the structured log schema.

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};

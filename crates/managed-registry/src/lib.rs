//! managed-registry: the processor side of managed concurrency resource
//! definitions.
//!
//! A container feeds the declarations collected from an application component
//! (see `managed-defs`) through this crate at initialization time: each
//! definition's context sets are checked for overlap and normalized, provider
//! capability policy is applied, and the surviving definitions are bound in a
//! name-keyed registry for lookup. Validation failures stop the affected
//! definition only; a duplicate name rejects the whole deployment.
//!
//! # Modules
//!
//! - [`normalize`] — context-set overlap detection and `Remaining` resolution
//! - [`capabilities`] — provider capability policy
//! - [`registry`] — the name-keyed binding registry
//! - [`deploy`] — whole-component deployment processing

pub mod capabilities;
pub mod deploy;
pub mod normalize;
pub mod registry;

pub use capabilities::*;
pub use deploy::*;
pub use normalize::*;
pub use registry::*;

//! managed-defs: declarative definitions for container-managed concurrency resources.
//!
//! An application component declares named concurrency resources (thread
//! factories and context-propagation policies) as plain metadata records.
//! A hosting container collects the declarations at initialization time,
//! validates them, constructs the runtime objects, and binds each one under
//! its namespace-qualified name for lookup. This crate supplies only the
//! declaration surface; the processor contract lives in `managed-registry`.
//!
//! # Modules
//!
//! - [`context`] — context-type identifiers, including the `Remaining` sentinel
//! - [`name`] — validated namespace-qualified resource names
//! - [`definition`] — the two definition records and their documented defaults
//! - [`declare`] — repeatable declarations and the per-component view

pub mod context;
pub mod declare;
pub mod definition;
pub mod name;

pub use context::*;
pub use declare::*;
pub use definition::*;
pub use name::*;

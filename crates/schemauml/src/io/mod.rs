//! Schema sources and output sinks
//!
//! The I/O collaborators around the transformer. Each performs a single
//! attempt and reports failure through [`crate::core::SchemaUmlError`].

mod sink;
mod source;

pub use sink::*;
pub use source::*;

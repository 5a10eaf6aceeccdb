//! Core abstractions for schema conversion
//!
//! The schema model, the diagram database and renderer traits, the shared
//! error type, and logging setup.

mod database;
mod error;
pub mod logging;
mod renderer;
mod schema;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use renderer::*;
pub use schema::*;

//! Diagram output plugins
//!
//! Each plugin pairs a diagram database with a renderer for one markup
//! language.

pub mod plantuml;

pub use plantuml::*;

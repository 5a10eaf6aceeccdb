//! PlantUML class diagram plugin
//!
//! Turns a schema into a class diagram database and renders it as
//! PlantUML markup.

mod database;
mod renderer;

pub use database::{ClassDiagram, ClassNode, Member, Relationship, RelationshipKind};
pub use renderer::{PlantUmlRenderer, END_MARKER, START_MARKER};

//! schemauml - Convert Parse Server class schemas to PlantUML
//!
//! A library for turning a schema (classes with typed fields, some of
//! which point at other classes) into a PlantUML class diagram.
//!
//! # Quick Start
//!
//! ```rust
//! use schemauml::render_json;
//!
//! let schema = r#"[{"className": "User", "fields": {
//!     "name": {"type": "String"},
//!     "team": {"type": "Pointer", "targetClass": "Team"}
//! }}]"#;
//! let uml = render_json(schema).unwrap();
//! assert!(uml.contains("User <|-- Team"));
//! assert!(uml.contains("\tTeam team"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use schemauml::prelude::*;
//!
//! let schema = Schema::new(vec![
//!     ClassDescriptor::new("Post")
//!         .with_value_field("title", "String")
//!         .with_reference_field("author", "_User"),
//! ]);
//!
//! let diagram = ClassDiagram::from_schema(&schema);
//! assert_eq!(diagram.node_count(), 1);
//! assert_eq!(diagram.edge_count(), 1);
//!
//! let renderer = PlantUmlRenderer::new().with_title("Blog");
//! let uml = renderer.render(&diagram).unwrap();
//! assert!(uml.starts_with("@startuml\ntitle Blog\n"));
//! ```

pub mod core;
#[cfg(not(target_arch = "wasm32"))]
pub mod io;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ClassDescriptor, Database, Field, FieldKind, Renderer, Schema, SchemaUmlError,
    };
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::io::{Credentials, FileSink, FileSource, SchemaSource, ServerSource};
    pub use crate::plugins::plantuml::{
        ClassDiagram, ClassNode, Member, PlantUmlRenderer, Relationship, RelationshipKind,
    };
}

/// Convert a schema into PlantUML class diagram markup
///
/// Pure and deterministic: the same schema always gives the same text.
///
/// # Example
/// ```rust
/// use schemauml::{schema_to_uml, ClassDescriptor, Schema};
///
/// let schema = Schema::new(vec![ClassDescriptor::new("Empty")]);
/// assert_eq!(schema_to_uml(&schema), "@startuml\nclass Empty {\n}\n@enduml\n");
/// ```
pub fn schema_to_uml(schema: &Schema) -> String {
    use crate::plugins::plantuml::{ClassDiagram, PlantUmlRenderer};

    let diagram = ClassDiagram::from_schema(schema);
    PlantUmlRenderer::new().render_diagram(&diagram)
}

/// Decode schema JSON and render it as PlantUML
///
/// Accepts a bare array of class descriptors or a `/schemas` response
/// object with a `results` array.
pub fn render_json(input: &str) -> Result<String> {
    let schema = Schema::from_json_str(input)?;
    Ok(schema_to_uml(&schema))
}

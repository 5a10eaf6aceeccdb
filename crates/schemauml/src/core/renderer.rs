//! Core renderer trait for diagram output

use anyhow::Result;

use super::Database;

/// Core trait for diagram renderers
///
/// Converts a populated diagram database into its textual markup.
///
/// # Example
/// ```
/// use schemauml::core::{Database, Renderer};
/// use schemauml::plugins::plantuml::{ClassDiagram, PlantUmlRenderer};
///
/// let diagram = ClassDiagram::new();
/// let renderer = PlantUmlRenderer::new();
/// let output = renderer.render(&diagram).unwrap();
/// assert_eq!(output, "@startuml\n@enduml\n");
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// Render the diagram database into markup text
    fn render(&self, database: &D) -> Result<String>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}

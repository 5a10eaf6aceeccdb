//! PlantUML class diagram renderer
//!
//! Renders a [`ClassDiagram`] as PlantUML markup: a relations block
//! followed by a class block, between `@startuml` and `@enduml`.

use anyhow::Result;
use tracing::debug;

use super::database::{ClassDiagram, ClassNode, Relationship};
use crate::core::Renderer;

/// Opening marker of a PlantUML document
pub const START_MARKER: &str = "@startuml";

/// Closing marker of a PlantUML document
pub const END_MARKER: &str = "@enduml";

/// PlantUML class diagram renderer
#[derive(Debug, Clone, Default)]
pub struct PlantUmlRenderer {
    title: Option<String>,
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a `title` line ahead of the diagram body
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the diagram to markup text
    pub fn render_diagram(&self, diagram: &ClassDiagram) -> String {
        let header = self.header_lines();
        let relations: Vec<String> = diagram
            .relationships()
            .iter()
            .map(relation_line)
            .collect();
        let class_nodes: Vec<String> = diagram.classes().iter().flat_map(class_lines).collect();

        debug!(
            relations = relations.len(),
            class_lines = class_nodes.len(),
            "Rendering PlantUML"
        );

        let mut out = String::new();
        out.push_str(START_MARKER);
        out.push('\n');
        for line in header.iter().chain(&relations).chain(&class_nodes) {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(END_MARKER);
        out.push('\n');
        out
    }

    fn header_lines(&self) -> Vec<String> {
        match &self.title {
            Some(title) if !title.trim().is_empty() => vec![format!("title {}", title.trim())],
            _ => Vec::new(),
        }
    }
}

fn relation_line(rel: &Relationship) -> String {
    format!("{} {} {}", rel.from, rel.kind.connector(), rel.to)
}

fn class_lines(class: &ClassNode) -> Vec<String> {
    let mut lines = Vec::with_capacity(class.members.len() + 2);
    lines.push(format!("class {} {{", class.name));
    for member in &class.members {
        lines.push(format!("\t{} {}", member.type_name, member.name));
    }
    lines.push("}".to_string());
    lines
}

impl Renderer<ClassDiagram> for PlantUmlRenderer {
    fn render(&self, database: &ClassDiagram) -> Result<String> {
        Ok(self.render_diagram(database))
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn format(&self) -> &'static str {
        "plantuml"
    }
}

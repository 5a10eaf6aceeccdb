//! Class diagram database
//!
//! Stores class nodes and relationships for a PlantUML class diagram,
//! each in the order they were discovered.

use crate::core::{ClassDescriptor, Database, Schema};
use anyhow::Result;
use tracing::{debug, trace};

/// A field line inside a class body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub type_name: String,
    pub name: String,
}

impl Member {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// A class node in the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    pub members: Vec<Member>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }
}

/// Relationship type between classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// A pointer field from one class to another, drawn with the
    /// inheritance connector
    Reference, // <|--
}

impl RelationshipKind {
    pub fn connector(self) -> &'static str {
        match self {
            RelationshipKind::Reference => "<|--",
        }
    }
}

/// A relationship between classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    pub fn reference(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, RelationshipKind::Reference)
    }
}

/// Class diagram database
#[derive(Debug, Clone, Default)]
pub struct ClassDiagram {
    classes: Vec<ClassNode>,
    relationships: Vec<Relationship>,
}

impl ClassDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the diagram for a schema
    ///
    /// Classes keep their schema order and members keep field order.
    /// Every reference field adds one edge from the containing class to
    /// its target; the target does not have to be part of the schema.
    pub fn from_schema(schema: &Schema) -> Self {
        let mut diagram = Self::new();
        for class in schema.classes() {
            diagram.add_descriptor(class);
        }
        debug!(
            class_count = diagram.class_count(),
            relationship_count = diagram.relationship_count(),
            "Built class diagram"
        );
        diagram
    }

    fn add_descriptor(&mut self, class: &ClassDescriptor) {
        let mut node = ClassNode::new(&class.class_name);
        for field in &class.fields {
            let display_type = field.kind.display_type();
            if field.kind.is_reference() {
                trace!(from = %class.class_name, to = display_type, field = %field.name, "Reference edge");
                self.relationships
                    .push(Relationship::reference(&class.class_name, display_type));
            }
            node.add_member(Member::new(display_type, &field.name));
        }
        self.classes.push(node);
    }

    pub fn add_class(&mut self, class: ClassNode) -> Result<()> {
        self.classes.push(class);
        Ok(())
    }

    pub fn add_relationship(&mut self, rel: Relationship) -> Result<()> {
        self.relationships.push(rel);
        Ok(())
    }

    pub fn classes(&self) -> &[ClassNode] {
        &self.classes
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassNode> {
        self.classes.iter().find(|c| c.name == name)
    }
}

impl Database for ClassDiagram {
    type Node = ClassNode;
    type Edge = Relationship;

    fn add_node(&mut self, node: Self::Node) -> Result<()> {
        self.add_class(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        self.add_relationship(edge)
    }

    fn get_node(&self, id: &str) -> Option<&Self::Node> {
        self.get_class(id)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.classes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relationships.iter()
    }

    fn clear(&mut self) {
        self.classes.clear();
        self.relationships.clear();
    }

    fn node_count(&self) -> usize {
        self.classes.len()
    }

    fn edge_count(&self) -> usize {
        self.relationships.len()
    }
}

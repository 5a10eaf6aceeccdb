//! Schema ingestion model
//!
//! Class descriptors as returned by a Parse Server `/schemas` endpoint.
//! Reference fields are told apart from value fields once, while decoding,
//! so nothing downstream compares type strings against the pointer marker.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::error::{Result, SchemaUmlError};

/// Type name that marks a field as a reference to another class
pub const POINTER_TYPE: &str = "Pointer";

/// Type shown for a field that carries no `type` at all
pub const MISSING_TYPE: &str = "undefined";

/// What a field holds, decided at ingestion time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain value, displayed by its type name
    Value { type_name: String },
    /// A pointer to an instance of another class
    Reference { target_class: String },
}

impl FieldKind {
    /// Classify a raw `type` / `targetClass` pair
    ///
    /// A pointer without a usable target degrades to a value field showing
    /// the marker itself, so no dangling edge is produced.
    pub fn classify(type_name: Option<&str>, target_class: Option<&str>) -> Self {
        match (type_name, target_class) {
            (Some(POINTER_TYPE), Some(target)) if !target.is_empty() => FieldKind::Reference {
                target_class: target.to_string(),
            },
            (Some(type_name), _) => FieldKind::Value {
                type_name: type_name.to_string(),
            },
            (None, _) => FieldKind::Value {
                type_name: MISSING_TYPE.to_string(),
            },
        }
    }

    /// The type name shown in the class body
    pub fn display_type(&self) -> &str {
        match self {
            FieldKind::Value { type_name } => type_name,
            FieldKind::Reference { target_class } => target_class,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, FieldKind::Reference { .. })
    }
}

/// A named field of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn value(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Value {
                type_name: type_name.into(),
            },
        }
    }

    pub fn reference(name: impl Into<String>, target_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Reference {
                target_class: target_class.into(),
            },
        }
    }
}

/// A class of the data model with its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClassDescriptor")]
pub struct ClassDescriptor {
    pub class_name: String,
    pub fields: Vec<Field>,
}

impl ClassDescriptor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_value_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(Field::value(name, type_name));
        self
    }

    pub fn with_reference_field(
        mut self,
        name: impl Into<String>,
        target_class: impl Into<String>,
    ) -> Self {
        self.fields.push(Field::reference(name, target_class));
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate over the reference fields only
    pub fn references(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind.is_reference())
    }
}

#[derive(Deserialize)]
struct RawClassDescriptor {
    #[serde(rename = "className")]
    class_name: String,
    #[serde(default)]
    fields: Value,
}

impl From<RawClassDescriptor> for ClassDescriptor {
    fn from(raw: RawClassDescriptor) -> Self {
        let class_name = raw.class_name;
        let entries = match raw.fields {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                warn!(class = %class_name, found = json_kind(&other), "Class fields are not an object");
                Map::new()
            }
        };

        let fields = entries
            .into_iter()
            .map(|(name, value)| {
                // Keys are read one at a time so a bad sibling keeps a valid type
                let field_type = value.get("type").and_then(Value::as_str);
                let target_class = value.get("targetClass").and_then(Value::as_str);
                if field_type.is_none() {
                    warn!(class = %class_name, field = %name, "Field without a string type");
                }
                if field_type == Some(POINTER_TYPE) && target_class.map_or(true, str::is_empty) {
                    warn!(class = %class_name, field = %name, "Pointer field without targetClass");
                }
                let kind = FieldKind::classify(field_type, target_class);
                Field { name, kind }
            })
            .collect();

        Self { class_name, fields }
    }
}

/// Ordered collection of class descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    classes: Vec<ClassDescriptor>,
}

impl Schema {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// Decode a schema from JSON text
    ///
    /// Accepts a bare array of class descriptors or a `/schemas` response
    /// object carrying them under `results`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Decode a schema from an already parsed JSON value
    pub fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            Value::Object(_) => Self::from_response(value),
            other => Err(SchemaUmlError::schema_error(format!(
                "expected an array of classes or an object with `results`, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Extract the schema from a `/schemas` response body
    pub fn from_response(mut body: Value) -> Result<Self> {
        let results = body
            .get_mut("results")
            .map(Value::take)
            .filter(|results| !results.is_null())
            .ok_or(SchemaUmlError::MissingResults)?;

        if !results.is_array() {
            return Err(SchemaUmlError::schema_error(format!(
                "`results` must be an array, found {}",
                json_kind(&results)
            )));
        }

        let schema: Schema = serde_json::from_value(results)?;
        debug!(class_count = schema.class_count(), "Decoded schema");
        Ok(schema)
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of reference fields across all classes
    pub fn reference_count(&self) -> usize {
        self.classes.iter().map(|c| c.references().count()).sum()
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.class_name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_value() {
        assert_eq!(
            FieldKind::classify(Some("String"), None),
            FieldKind::Value {
                type_name: "String".to_string()
            }
        );
    }

    #[test]
    fn test_classify_pointer() {
        let kind = FieldKind::classify(Some("Pointer"), Some("Team"));
        assert!(kind.is_reference());
        assert_eq!(kind.display_type(), "Team");
    }

    #[test]
    fn test_classify_pointer_without_target() {
        let kind = FieldKind::classify(Some("Pointer"), None);
        assert!(!kind.is_reference());
        assert_eq!(kind.display_type(), "Pointer");

        let kind = FieldKind::classify(Some("Pointer"), Some(""));
        assert!(!kind.is_reference());
    }

    #[test]
    fn test_classify_missing_type() {
        let kind = FieldKind::classify(None, Some("Team"));
        assert_eq!(kind.display_type(), MISSING_TYPE);
    }

    #[test]
    fn test_target_class_ignored_for_value_types() {
        // Relation fields carry a targetClass too, but only Pointer is a reference
        let kind = FieldKind::classify(Some("Relation"), Some("Role"));
        assert_eq!(kind.display_type(), "Relation");
        assert!(!kind.is_reference());
    }

    #[test]
    fn test_decode_preserves_field_order() {
        let schema = Schema::from_json_value(json!([{
            "className": "User",
            "fields": {
                "zeta": {"type": "String"},
                "alpha": {"type": "Number"},
                "team": {"type": "Pointer", "targetClass": "Team"}
            }
        }]))
        .unwrap();

        let names: Vec<_> = schema.classes()[0]
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "team"]);
        assert_eq!(schema.reference_count(), 1);
    }

    #[test]
    fn test_decode_results_object() {
        let schema = Schema::from_json_str(
            r#"{"results": [{"className": "A", "fields": {}}, {"className": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(schema.class_count(), 2);
        assert!(schema.get_class("B").unwrap().fields.is_empty());
    }

    #[test]
    fn test_decode_missing_results() {
        let err = Schema::from_json_str(r#"{"error": "unauthorized"}"#).unwrap_err();
        assert!(matches!(err, SchemaUmlError::MissingResults));
    }

    #[test]
    fn test_decode_null_results() {
        let err = Schema::from_response(json!({"results": null})).unwrap_err();
        assert!(matches!(err, SchemaUmlError::MissingResults));
    }

    #[test]
    fn test_decode_results_not_array() {
        let err = Schema::from_response(json!({"results": "nope"})).unwrap_err();
        assert!(matches!(err, SchemaUmlError::SchemaError { .. }));
    }

    #[test]
    fn test_decode_scalar_rejected() {
        let err = Schema::from_json_str("42").unwrap_err();
        assert!(format!("{}", err).contains("a number"));
    }

    #[test]
    fn test_decode_missing_class_name() {
        let err = Schema::from_json_str(r#"[{"fields": {}}]"#).unwrap_err();
        assert!(matches!(err, SchemaUmlError::JsonError { .. }));
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let schema = Schema::from_json_value(json!([{
            "className": "_User",
            "fields": {
                "objectId": {"type": "String"},
                "email": {"type": "String", "required": false, "defaultValue": ""}
            },
            "classLevelPermissions": {"find": {"*": true}},
            "indexes": {"_id_": {"_id": 1}}
        }]))
        .unwrap();
        assert_eq!(schema.classes()[0].fields.len(), 2);
    }

    #[test]
    fn test_decode_degrades_malformed_fields() {
        let schema = Schema::from_json_value(json!([{
            "className": "Post",
            "fields": {
                "untyped": {},
                "odd": "String",
                "author": {"type": "Pointer"}
            }
        }]))
        .unwrap();
        let post = &schema.classes()[0];
        assert_eq!(post.get_field("untyped").unwrap().kind.display_type(), MISSING_TYPE);
        assert_eq!(post.get_field("odd").unwrap().kind.display_type(), MISSING_TYPE);
        assert_eq!(post.get_field("author").unwrap().kind.display_type(), "Pointer");
        assert_eq!(post.references().count(), 0);
    }

    #[test]
    fn test_decode_bad_target_keeps_type() {
        let schema = Schema::from_json_value(json!([{
            "className": "A",
            "fields": {
                "p": {"type": "Pointer", "targetClass": 7},
                "s": {"type": "String", "targetClass": 7},
                "q": {"type": "Pointer", "targetClass": "B"}
            }
        }]))
        .unwrap();
        let a = &schema.classes()[0];
        assert_eq!(a.get_field("p").unwrap().kind.display_type(), "Pointer");
        assert!(!a.get_field("p").unwrap().kind.is_reference());
        assert_eq!(a.get_field("s").unwrap().kind.display_type(), "String");
        assert_eq!(a.get_field("q").unwrap().kind.display_type(), "B");
        assert_eq!(a.references().count(), 1);
    }

    #[test]
    fn test_decode_non_object_fields() {
        let schema = Schema::from_json_value(json!([
            {"className": "A", "fields": [1]},
            {"className": "B", "fields": null},
            {"className": "C", "fields": {"n": {"type": "Number"}}}
        ]))
        .unwrap();
        assert_eq!(schema.class_count(), 3);
        assert!(schema.get_class("A").unwrap().fields.is_empty());
        assert!(schema.get_class("B").unwrap().fields.is_empty());
        assert_eq!(schema.get_class("C").unwrap().fields.len(), 1);
    }

    #[test]
    fn test_builder() {
        let class = ClassDescriptor::new("Post")
            .with_value_field("title", "String")
            .with_reference_field("author", "_User");
        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.references().count(), 1);
        assert_eq!(class.get_field("author").unwrap().kind.display_type(), "_User");
    }
}

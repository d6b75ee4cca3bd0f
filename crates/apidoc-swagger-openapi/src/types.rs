//! Typed Swagger 2.0 structures.
//!
//! These types represent the subset of Swagger 2.0 produced from apidoc output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use apidoc_swagger_core::AnnotatedField;

/// Prefix of every local definition reference.
pub const REF_PREFIX: &str = "#/definitions/";

/// The only media type emitted for `consumes` and `produces`.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A schema node: a property, a parameter body, or a response payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schema {
    /// Primitive type (`string`, `array`, `object`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `#/definitions/<name>` reference.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Element schema, only when `schema_type` is `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// Inline primitive schema.
    pub fn typed(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    /// `$ref` to a named definition.
    pub fn ref_to(definition: &str) -> Self {
        Self {
            reference: Some(format!("{REF_PREFIX}{definition}")),
            ..Default::default()
        }
    }

    /// Object-typed `$ref` to a named definition.
    pub fn object_ref(definition: &str) -> Self {
        Self {
            schema_type: Some("object".to_string()),
            ..Self::ref_to(definition)
        }
    }

    /// Array of `items`.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Name of the referenced definition, if this is a `$ref`.
    pub fn ref_name(&self) -> Option<&str> {
        self.reference.as_deref()?.strip_prefix(REF_PREFIX)
    }
}

/// A named object definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectDefinition {
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
    /// Required property names, without duplicates.
    #[serde(default)]
    pub required: Vec<String>,
}

impl ObjectDefinition {
    /// Whether `name` is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// The document-wide definitions mapping.
///
/// Definitions are only ever created or extended, never replaced or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Definitions(IndexMap<String, ObjectDefinition>);

impl Definitions {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a definition with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Look up a definition.
    pub fn get(&self, name: &str) -> Option<&ObjectDefinition> {
        self.0.get(name)
    }

    /// Look up a definition mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ObjectDefinition> {
        self.0.get_mut(name)
    }

    /// Create an empty definition unless one exists. Returns whether it was created.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), ObjectDefinition::default());
        true
    }

    /// The definition for `name`, created empty if absent.
    pub fn entry_mut(&mut self, name: &str) -> &mut ObjectDefinition {
        self.0.entry(name.to_string()).or_default()
    }

    /// Definition names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ObjectDefinition)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    Path,
    Query,
    Header,
    Body,
}

/// A Swagger parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location: path, query, header or body.
    #[serde(rename = "in")]
    pub location: ParameterIn,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
    /// Primitive type for non-body parameters.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Parameter description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body schema, only for body parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Build a non-body parameter from an annotated field.
    ///
    /// Untyped fields default to `string`. Path parameters are always required.
    pub fn from_field(field: &AnnotatedField, location: ParameterIn) -> Self {
        let param_type = field
            .field_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| "string".to_string());

        Self {
            name: field.field.clone(),
            location,
            required: location == ParameterIn::Path || !field.optional,
            param_type: Some(param_type),
            description: apidoc_swagger_core::text::strip_tags_opt(field.description.as_deref()),
            schema: None,
        }
    }

    /// Create a required body parameter.
    pub fn body(name: impl Into<String>, description: Option<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            location: ParameterIn::Body,
            required: true,
            param_type: None,
            description,
            schema: Some(schema),
        }
    }
}

/// A response entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Response {
    /// Create a response without a schema.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schema: None,
        }
    }

    /// Set the schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// A Swagger operation (one verb on one path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code (or apidoc group name).
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    #[serde(rename = "operationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            summary: None,
            description: None,
            consumes: vec![JSON_MEDIA_TYPE.to_string()],
            produces: vec![JSON_MEDIA_TYPE.to_string()],
            parameters: Vec::new(),
            responses: IndexMap::new(),
            operation_id: None,
        }
    }
}

/// Operations of one URL keyed by lower-case verb.
pub type PathItem = IndexMap<String, Operation>;

/// API information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Swagger 2.0 document root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerDocument {
    /// Always `"2.0"`.
    pub swagger: String,
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "basePath", default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub definitions: Definitions,
}

impl SwaggerDocument {
    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a JSON value.
    pub fn to_value(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_serialization() {
        let schema = Schema::array(Schema::ref_to("User")).with_description(Some("All".into()));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"type": "array", "description": "All", "items": {"$ref": "#/definitions/User"}})
        );
    }

    #[test]
    fn test_ref_name() {
        assert_eq!(Schema::ref_to("a.b").ref_name(), Some("a.b"));
        assert_eq!(Schema::typed("string").ref_name(), None);
    }

    #[test]
    fn test_definitions_ensure_keeps_existing() {
        let mut defs = Definitions::new();
        assert!(defs.ensure("User"));
        defs.entry_mut("User")
            .properties
            .insert("name".into(), Schema::typed("string"));

        assert!(!defs.ensure("User"));
        assert_eq!(defs.get("User").unwrap().properties.len(), 1);
        assert_eq!(defs.names().collect::<Vec<_>>(), vec!["User"]);
    }

    #[test]
    fn test_definition_serializes_empty_required() {
        let mut defs = Definitions::new();
        defs.ensure("Empty");
        assert_eq!(
            serde_json::to_value(&defs).unwrap(),
            json!({"Empty": {"properties": {}, "required": []}})
        );
    }

    #[test]
    fn test_parameter_from_field() {
        let field = AnnotatedField::new("active", "Boolean").optional();
        let param = Parameter::from_field(&field, ParameterIn::Query);
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"name": "active", "in": "query", "required": false, "type": "boolean"})
        );
    }

    #[test]
    fn test_parameter_untyped_defaults_to_string() {
        let field = AnnotatedField::untyped("token").with_description("<p>Auth</p>");
        let param = Parameter::from_field(&field, ParameterIn::Header);
        assert_eq!(param.param_type.as_deref(), Some("string"));
        assert_eq!(param.description.as_deref(), Some("Auth"));
    }

    #[test]
    fn test_path_parameter_always_required() {
        let field = AnnotatedField::new("id", "String").optional();
        let param = Parameter::from_field(&field, ParameterIn::Path);
        assert!(param.required);
    }

    #[test]
    fn test_document_keys() {
        let doc = SwaggerDocument {
            swagger: "2.0".into(),
            info: Info::default(),
            host: None,
            base_path: Some("/v1".into()),
            schemes: None,
            paths: IndexMap::new(),
            definitions: Definitions::new(),
        };
        let value = doc.to_value().unwrap();
        assert_eq!(value["swagger"], "2.0");
        assert_eq!(value["basePath"], "/v1");
        assert!(value.get("host").is_none());
        assert!(value["paths"].is_object());
        assert!(value["definitions"].is_object());
    }
}

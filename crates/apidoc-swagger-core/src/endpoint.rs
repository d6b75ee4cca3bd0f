//! Endpoint records as emitted by apidoc.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default group for `@apiParam` fields without an explicit `(Group)`.
pub const PARAMETER_GROUP: &str = "Parameter";

/// Group marking parameter fields that belong to the request body.
pub const BODY_FIELDS_GROUP: &str = "Request Body Fields";

/// Default group for `@apiHeader` fields.
pub const HEADER_GROUP: &str = "Header";

/// Group names that are structural and never become shared definitions.
pub const RESERVED_GROUPS: [&str; 3] = [PARAMETER_GROUP, BODY_FIELDS_GROUP, HEADER_GROUP];

/// Field lists keyed by group name, in declaration order.
pub type FieldGroups = IndexMap<String, Vec<AnnotatedField>>;

/// One annotated field row (`@apiParam`, `@apiSuccess`, `@apiHeader`, `@apiError`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedField {
    /// Group the field was declared in.
    #[serde(default)]
    pub group: String,
    /// Raw type string (`String`, `Object`, `Number[]`, a definition name, ...).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Whether the field was declared in `[brackets]`.
    #[serde(default)]
    pub optional: bool,
    /// Dotted field path (`user.address.city`).
    #[serde(default)]
    pub field: String,
    /// Free text, possibly with HTML markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnnotatedField {
    /// Create a required field in the default parameter group.
    pub fn new(field: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            group: PARAMETER_GROUP.to_string(),
            field_type: Some(field_type.into()),
            optional: false,
            field: field.into(),
            description: None,
        }
    }

    /// Create a field without a declared type.
    pub fn untyped(field: impl Into<String>) -> Self {
        Self {
            field_type: None,
            ..Self::new(field, "")
        }
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the group.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Raw type, or `""` when absent.
    pub fn raw_type(&self) -> &str {
        self.field_type.as_deref().unwrap_or("")
    }

    /// Whether the field belongs to the request body group.
    pub fn is_body_field(&self) -> bool {
        self.group == BODY_FIELDS_GROUP
    }
}

/// A `{ "fields": { group: [...] } }` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldSection {
    #[serde(default)]
    pub fields: FieldGroups,
}

/// One documented endpoint (`@api {verb} url title`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiEndpoint {
    /// HTTP verb as written (`get`, `post`, `del`, ...).
    #[serde(rename = "type")]
    pub method: String,
    /// URL with colon placeholders (`/users/:id`).
    pub url: String,
    /// Endpoint name (`@apiName`), used as `operationId` and definition prefix.
    #[serde(default)]
    pub name: String,
    /// Endpoint group (`@apiGroup`), used as the operation tag.
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<FieldSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<FieldSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<FieldSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldSection>,
}

impl ApiEndpoint {
    /// Create an endpoint with no fields.
    pub fn new(method: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the endpoint group (operation tag).
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Append parameter fields under a group.
    pub fn with_parameters(mut self, group: &str, fields: Vec<AnnotatedField>) -> Self {
        push_fields(&mut self.parameter, group, fields);
        self
    }

    /// Append header fields under a group.
    pub fn with_headers(mut self, group: &str, fields: Vec<AnnotatedField>) -> Self {
        push_fields(&mut self.header, group, fields);
        self
    }

    /// Append success fields under a group.
    pub fn with_success(mut self, group: &str, fields: Vec<AnnotatedField>) -> Self {
        push_fields(&mut self.success, group, fields);
        self
    }

    /// Append error fields under a group.
    pub fn with_errors(mut self, group: &str, fields: Vec<AnnotatedField>) -> Self {
        push_fields(&mut self.error, group, fields);
        self
    }

    /// Parameter groups, empty when the endpoint has none.
    pub fn parameter_groups(&self) -> impl Iterator<Item = (&String, &Vec<AnnotatedField>)> {
        groups(&self.parameter)
    }

    /// Success groups, empty when the endpoint has none.
    pub fn success_groups(&self) -> impl Iterator<Item = (&String, &Vec<AnnotatedField>)> {
        groups(&self.success)
    }

    /// Error groups, empty when the endpoint has none.
    pub fn error_groups(&self) -> impl Iterator<Item = (&String, &Vec<AnnotatedField>)> {
        groups(&self.error)
    }

    /// All header fields across groups, in declaration order.
    pub fn header_fields(&self) -> Vec<AnnotatedField> {
        groups(&self.header)
            .flat_map(|(_, fields)| fields.iter().cloned())
            .collect()
    }
}

fn groups(section: &Option<FieldSection>) -> impl Iterator<Item = (&String, &Vec<AnnotatedField>)> {
    section.iter().flat_map(|s| s.fields.iter())
}

fn push_fields(section: &mut Option<FieldSection>, group: &str, fields: Vec<AnnotatedField>) {
    section
        .get_or_insert_with(FieldSection::default)
        .fields
        .entry(group.to_string())
        .or_default()
        .extend(fields);
}

/// Parse the contents of `api_data.json`.
pub fn parse_endpoints(json: &str) -> crate::Result<Vec<ApiEndpoint>> {
    Ok(serde_json::from_str(json)?)
}

//! Non-fatal findings collected during a conversion.

use apidoc_swagger_core::AnnotatedField;
use thiserror::Error;

/// Category of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An error description without the `code: text` delimiter.
    MalformedFieldKind,
    /// An endpoint verb that maps to no HTTP method; the endpoint is skipped.
    UnsupportedMethod,
}

/// Something in the input that was degraded rather than converted faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?} in endpoint '{endpoint}': {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Name of the endpoint the finding belongs to.
    pub endpoint: String,
    pub message: String,
}

impl Diagnostic {
    /// Error field whose description has no status code prefix.
    pub fn malformed_field_kind(endpoint: &str, field: &AnnotatedField, description: &str) -> Self {
        Self {
            kind: DiagnosticKind::MalformedFieldKind,
            endpoint: endpoint.to_string(),
            message: format!(
                "error field '{}' has no 'code: text' description ({:?}); filed under 'unknown'",
                field.field, description
            ),
        }
    }

    /// Endpoint verb that could not be mapped.
    pub fn unsupported_method(endpoint: &str, method: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedMethod,
            endpoint: endpoint.to_string(),
            message: format!("unsupported HTTP method '{method}'"),
        }
    }
}

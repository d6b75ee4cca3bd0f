//! Response maps built from `@apiSuccess` and `@apiError` groups.

use apidoc_swagger_core::text::{strip_tags, upper_camel};
use apidoc_swagger_core::{AnnotatedField, ApiEndpoint};
use indexmap::IndexMap;

use crate::context::SchemaContext;
use crate::diagnostics::Diagnostic;
use crate::synth::{Payload, synthesize};
use crate::types::Response;

/// Response key for error descriptions without a status code.
pub const UNKNOWN_ERROR_CODE: &str = "unknown";

/// Whether a success group documents "no body".
///
/// apidoc users write `@apiSuccess {null} null` (or leave the type off) to say
/// the response has no payload; such groups get a response without a schema.
pub fn is_no_body_sentinel(fields: &[AnnotatedField]) -> bool {
    let Some(first) = fields.first() else {
        return true;
    };
    let no_name = first.field.is_empty() || first.field == "null";
    let no_type = first
        .field_type
        .as_deref()
        .is_none_or(|t| t.is_empty() || t == "null");
    no_name || no_type
}

/// One response per success group, keyed and described by the group name.
pub fn success_results(
    ctx: &mut SchemaContext,
    endpoint: &ApiEndpoint,
) -> IndexMap<String, Response> {
    let mut results = IndexMap::new();

    for (group, fields) in endpoint.success_groups() {
        let mut response = Response::new(group.clone());
        if !is_no_body_sentinel(fields) {
            let name = format!("{}{}", endpoint.name, upper_camel(group));
            response.schema = Some(synthesize(ctx, fields, &name, Payload::Response));
        }
        results.insert(group.clone(), response);
    }

    results
}

/// Error responses keyed by the status code in each description.
///
/// Descriptions are expected as `"<code>: <text>"`. Rows sharing a code are
/// newline-joined in input order as `<field>:<text>`. Descriptions without a
/// code are filed whole under [`UNKNOWN_ERROR_CODE`] and reported.
pub fn error_results(ctx: &mut SchemaContext, endpoint: &ApiEndpoint) -> IndexMap<String, Response> {
    let mut results: IndexMap<String, Response> = IndexMap::new();

    for (_, fields) in endpoint.error_groups() {
        for field in fields {
            let description = field.description.as_deref().map(strip_tags).unwrap_or_default();

            let (code, text) = match description.split_once(':') {
                Some((code, rest)) => (code.trim().to_string(), format!("{}:{}", field.field, rest)),
                None => {
                    ctx.report(Diagnostic::malformed_field_kind(&endpoint.name, field, &description));
                    (UNKNOWN_ERROR_CODE.to_string(), description)
                }
            };

            match results.get_mut(&code) {
                Some(existing) => {
                    existing.description.push('\n');
                    existing.description.push_str(&text);
                }
                None => {
                    results.insert(code, Response::new(text));
                }
            }
        }
    }

    results
}

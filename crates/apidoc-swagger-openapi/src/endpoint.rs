//! Operation assembly for a single endpoint and verb.

use apidoc_swagger_core::text::strip_tags_opt;
use apidoc_swagger_core::{AnnotatedField, ApiEndpoint, PathPattern};
use tracing::debug;

use crate::context::SchemaContext;
use crate::method::HttpMethod;
use crate::results::{error_results, success_results};
use crate::synth::{Payload, synthesize};
use crate::types::{Operation, Parameter, ParameterIn};

/// Assemble the operation for `endpoint`.
///
/// `parameters` is the endpoint's flattened parameter list (already filtered
/// of groups registered as shared definitions) and `headers` its flattened
/// header list.
pub fn assemble_operation(
    ctx: &mut SchemaContext,
    endpoint: &ApiEndpoint,
    method: HttpMethod,
    pattern: &PathPattern,
    parameters: &[AnnotatedField],
    headers: &[AnnotatedField],
) -> Operation {
    let mut params = if method.has_body() {
        body_parameters(ctx, endpoint, pattern, parameters)
    } else {
        query_parameters(pattern, parameters)
    };
    params.extend(
        headers
            .iter()
            .map(|field| Parameter::from_field(field, ParameterIn::Header)),
    );

    let mut responses = success_results(ctx, endpoint);
    let errors = error_results(ctx, endpoint);
    ctx.policy().merge_responses(&mut responses, errors);

    debug!(
        endpoint = %endpoint.name,
        method = method.as_str(),
        path = %pattern.template,
        parameters = params.len(),
        responses = responses.len(),
        "assembled operation"
    );

    Operation {
        tags: vec![endpoint.group.clone()],
        summary: strip_tags_opt(endpoint.title.as_deref()),
        description: strip_tags_opt(endpoint.description.as_deref()),
        parameters: params,
        responses,
        operation_id: Some(endpoint.name.clone()),
        ..Default::default()
    }
}

/// Path parameters plus a single body parameter built from `Request Body Fields`.
///
/// Remaining parameter fields are not emitted for write verbs.
fn body_parameters(
    ctx: &mut SchemaContext,
    endpoint: &ApiEndpoint,
    pattern: &PathPattern,
    parameters: &[AnnotatedField],
) -> Vec<Parameter> {
    let mut params: Vec<Parameter> = parameters
        .iter()
        .filter(|field| pattern.has_key(&field.field) && !field.is_body_field())
        .map(|field| Parameter::from_field(field, ParameterIn::Path))
        .collect();

    let body_name = format!("{}Body", endpoint.name);
    let body_fields: Vec<AnnotatedField> = parameters
        .iter()
        .filter(|field| field.is_body_field())
        .map(|field| AnnotatedField {
            field: format!("{body_name}.{}", field.field),
            ..field.clone()
        })
        .collect();

    if !body_fields.is_empty() {
        let mut fields = Vec::with_capacity(body_fields.len() + 1);
        fields.push(AnnotatedField::new(body_name.as_str(), "Object"));
        fields.extend(body_fields);

        let schema = synthesize(ctx, &fields, &body_name, Payload::Request);
        params.push(Parameter::body(
            body_name,
            strip_tags_opt(endpoint.description.as_deref()),
            schema,
        ));
    }

    params
}

/// Path parameters first, then everything else as query parameters.
fn query_parameters(pattern: &PathPattern, parameters: &[AnnotatedField]) -> Vec<Parameter> {
    let (path, query): (Vec<_>, Vec<_>) = parameters
        .iter()
        .partition(|field| pattern.has_key(&field.field));

    path.into_iter()
        .map(|field| Parameter::from_field(field, ParameterIn::Path))
        .chain(
            query
                .into_iter()
                .map(|field| Parameter::from_field(field, ParameterIn::Query)),
        )
        .collect()
}

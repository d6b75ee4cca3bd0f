//! apidoc-swagger - Swagger 2.0 documents from apidoc output
//!
//! apidoc turns `@api` annotations into `api_data.json` (the endpoints) and
//! `api_project.json` (project metadata). This crate converts the pair into a
//! single Swagger 2.0 document.
//!
//! # Quick Start
//!
//! ```ignore
//! use apidoc_swagger::{ConvertOptions, convert_json};
//!
//! let api_data = std::fs::read_to_string("doc/api_data.json")?;
//! let project = std::fs::read_to_string("doc/api_project.json")?;
//!
//! let conversion = convert_json(&api_data, &project, &ConvertOptions::default())?;
//! std::fs::write("swagger.json", conversion.document.to_json_pretty()?)?;
//! ```
//!
//! # What gets generated
//!
//! | apidoc | Swagger |
//! |--------|---------|
//! | `@api {get} /users/:id` | `paths./users/{id}.get` |
//! | `@apiParam` (path key) | `in: path` parameter |
//! | `@apiParam` (other, read verbs) | `in: query` parameter |
//! | `@apiParam (Request Body Fields)` | one `in: body` parameter with a schema |
//! | `@apiParam (SomeGroup)` | shared definition `SomeGroup` |
//! | `@apiHeader` | `in: header` parameter |
//! | `@apiSuccess` | response keyed by group, schema in `definitions` |
//! | `@apiError` with `"404: text"` | response keyed by `404` |
//!
//! Dotted field names (`user.address.city`) become nested definitions
//! (`user.address`), and a type naming an already-registered definition
//! becomes a `$ref` to it.
//!
//! # Crates
//!
//! - [`apidoc_swagger_core`]: input records, options, URL and text helpers
//! - [`apidoc_swagger_openapi`]: the schema synthesis engine and document builder

pub use apidoc_swagger_core::{
    AnnotatedField, ApiEndpoint, ConvertOptions, CoreError, ProjectInfo, parse_endpoints,
};
pub use apidoc_swagger_openapi::{
    Conversion, Diagnostic, DiagnosticKind, MergePolicy, Result, SwaggerBuilder, SwaggerDocument,
    SwaggerError,
};

/// Convert parsed endpoints into a Swagger document.
pub fn convert(
    endpoints: &[ApiEndpoint],
    project: &ProjectInfo,
    options: &ConvertOptions,
) -> Conversion {
    SwaggerBuilder::new()
        .project(project.clone())
        .options(options.clone())
        .add_endpoints(endpoints)
        .build()
}

/// Convert the raw contents of `api_data.json` and `api_project.json`.
pub fn convert_json(api_data: &str, project: &str, options: &ConvertOptions) -> Result<Conversion> {
    let endpoints = parse_endpoints(api_data)?;
    let project = ProjectInfo::parse(project)?;
    Ok(convert(&endpoints, &project, options))
}

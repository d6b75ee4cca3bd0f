//! Core types for apidoc-swagger.
//!
//! This crate holds everything the Swagger synthesis engine reads:
//!
//! - [`ApiEndpoint`] and [`AnnotatedField`], the records found in apidoc's `api_data.json`
//! - [`ProjectInfo`], the `api_project.json` metadata
//! - [`ConvertOptions`], loadable from TOML
//! - [`PathPattern`], the `:param` URL tokenizer
//! - small text helpers shared by the engine

mod endpoint;
mod error;
mod options;
mod path_pattern;
mod project;
pub mod text;

pub use endpoint::{
    AnnotatedField, ApiEndpoint, BODY_FIELDS_GROUP, FieldGroups, FieldSection, HEADER_GROUP,
    PARAMETER_GROUP, RESERVED_GROUPS, parse_endpoints,
};
pub use error::CoreError;
pub use options::{ConvertOptions, GroupFilter};
pub use path_pattern::PathPattern;
pub use project::{ProjectInfo, ServerLocation};

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

//! Swagger 2.0 generation from apidoc endpoint records.
//!
//! Field lists are folded into a single document-wide definitions mapping
//! owned by a [`SchemaContext`], and endpoints are assembled into path items.
//!
//! # Example
//!
//! ```ignore
//! use apidoc_swagger_openapi::SwaggerBuilder;
//!
//! let conversion = SwaggerBuilder::new()
//!     .project(project)
//!     .add_endpoints(&endpoints)
//!     .build();
//! println!("{}", conversion.document.to_json_pretty()?);
//! ```

mod builder;
mod classify;
mod context;
mod diagnostics;
mod endpoint;
mod error;
mod merge;
mod method;
mod nested_name;
mod results;
mod synth;
mod tree;
mod types;

pub use builder::{Conversion, SWAGGER_VERSION, SwaggerBuilder};
pub use classify::{FieldKind, classify};
pub use context::SchemaContext;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use endpoint::assemble_operation;
pub use error::SwaggerError;
pub use merge::{Conflict, MergePolicy};
pub use method::HttpMethod;
pub use nested_name::{NestedName, split_field_path};
pub use results::{UNKNOWN_ERROR_CODE, error_results, is_no_body_sentinel, success_results};
pub use synth::{Payload, inline_schema, synthesize, synthesize_group};
pub use tree::{TreeRoot, build_tree, register_group};
pub use types::*;

/// Result type for Swagger operations.
pub type Result<T> = std::result::Result<T, SwaggerError>;

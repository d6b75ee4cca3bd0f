//! Swagger document builder for a whole apidoc project.

use apidoc_swagger_core::{AnnotatedField, ApiEndpoint, ConvertOptions, GroupFilter, PathPattern, ProjectInfo};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::context::SchemaContext;
use crate::diagnostics::Diagnostic;
use crate::endpoint::assemble_operation;
use crate::merge::MergePolicy;
use crate::method::HttpMethod;
use crate::synth::synthesize_group;
use crate::types::{Info, PathItem, SwaggerDocument};

/// Swagger version written to every document.
pub const SWAGGER_VERSION: &str = "2.0";

/// The outcome of a conversion: the document plus everything that was degraded.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: SwaggerDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builder for a Swagger 2.0 document from apidoc endpoints.
///
/// # Example
///
/// ```ignore
/// use apidoc_swagger_openapi::SwaggerBuilder;
///
/// let conversion = SwaggerBuilder::new()
///     .project(project)
///     .options(options)
///     .add_endpoints(&endpoints)
///     .build();
/// ```
///
/// # Conflict Resolution
///
/// - **Operations**: Last write wins for the same URL and verb. Other verbs on the URL are kept.
/// - **Definitions**: Only ever extended. Properties already present are kept.
#[derive(Debug, Clone)]
pub struct SwaggerBuilder {
    project: ProjectInfo,
    options: ConvertOptions,
    paths: IndexMap<String, PathItem>,
    context: SchemaContext,
}

impl Default for SwaggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SwaggerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            project: ProjectInfo::default(),
            options: ConvertOptions::default(),
            paths: IndexMap::new(),
            context: SchemaContext::new(),
        }
    }

    /// Set the project metadata.
    pub fn project(mut self, project: ProjectInfo) -> Self {
        self.project = project;
        self
    }

    /// Set the conversion options.
    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the merge policy.
    ///
    /// Only affects endpoints added afterwards.
    pub fn policy(mut self, policy: MergePolicy) -> Self {
        self.context.set_policy(policy);
        self
    }

    /// Convert endpoints and merge them into the document.
    ///
    /// Shared parameter groups are registered first, so every endpoint sees
    /// them. Endpoints are then grouped by URL in first-seen order.
    pub fn add_endpoints(mut self, endpoints: &[ApiEndpoint]) -> Self {
        let filter = self.options.group_filter();

        if let Some(filter) = &filter {
            for endpoint in endpoints {
                for (group, fields) in endpoint.parameter_groups() {
                    if !filter.is_ignored(group) {
                        synthesize_group(&mut self.context, group, fields);
                    }
                }
            }
        }

        let mut by_url: IndexMap<&str, Vec<&ApiEndpoint>> = IndexMap::new();
        for endpoint in endpoints {
            by_url.entry(endpoint.url.as_str()).or_default().push(endpoint);
        }

        for (url, group) in by_url {
            let pattern = PathPattern::parse(url);
            debug!(url, path = %pattern.template, endpoints = group.len(), "building path item");

            for endpoint in group {
                self.add_endpoint(endpoint, &pattern, filter.as_ref());
            }
        }

        self
    }

    fn add_endpoint(&mut self, endpoint: &ApiEndpoint, pattern: &PathPattern, filter: Option<&GroupFilter>) {
        let Some(method) = HttpMethod::from_verb(&endpoint.method) else {
            self.context
                .report(Diagnostic::unsupported_method(&endpoint.name, &endpoint.method));
            return;
        };

        let parameters = plain_parameters(endpoint, filter);
        let headers = endpoint.header_fields();
        let operation = assemble_operation(
            &mut self.context,
            endpoint,
            method,
            pattern,
            &parameters,
            &headers,
        );

        let policy = self.context.policy();
        let item = self.paths.entry(pattern.template.clone()).or_default();
        policy.add_operation(item, method.as_str(), operation);
    }

    /// Build the document.
    pub fn build(self) -> Conversion {
        let location = self.project.server_location();
        let (definitions, diagnostics) = self.context.into_parts();

        info!(
            paths = self.paths.len(),
            definitions = definitions.len(),
            diagnostics = diagnostics.len(),
            "built swagger document"
        );

        let document = SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                title: self.project.display_title().map(str::to_string),
                version: self.project.version.clone(),
                description: self.project.description.clone(),
            },
            host: location.as_ref().and_then(|l| l.host.clone()),
            base_path: location.as_ref().and_then(|l| l.base_path.clone()),
            schemes: location.map(|l| l.schemes),
            paths: self.paths,
            definitions,
        };

        Conversion {
            document,
            diagnostics,
        }
    }
}

/// Parameter groups that stay plain parameters, flattened in declaration order.
///
/// With definitions enabled only ignored groups qualify; the rest were
/// registered as shared definitions. Without a filter every group qualifies.
fn plain_parameters(endpoint: &ApiEndpoint, filter: Option<&GroupFilter>) -> Vec<AnnotatedField> {
    endpoint
        .parameter_groups()
        .filter(|(group, _)| filter.is_none_or(|f| f.is_ignored(group)))
        .flat_map(|(_, fields)| fields.iter().cloned())
        .collect()
}

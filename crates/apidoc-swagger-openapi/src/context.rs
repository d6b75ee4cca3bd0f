//! The single owner of mutable conversion state.

use tracing::warn;

use crate::diagnostics::Diagnostic;
use crate::merge::MergePolicy;
use crate::types::Definitions;

/// Shared state threaded by `&mut` through every synthesis call.
///
/// Holds the document-wide definitions mapping, the merge policy and the
/// diagnostics collected so far. Later endpoints see, and may extend, what
/// earlier endpoints registered.
#[derive(Debug, Clone, Default)]
pub struct SchemaContext {
    definitions: Definitions,
    policy: MergePolicy,
    diagnostics: Vec<Diagnostic>,
}

impl SchemaContext {
    /// Create an empty context with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context with a custom policy.
    pub fn with_policy(policy: MergePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn definitions_mut(&mut self) -> &mut Definitions {
        &mut self.definitions
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: MergePolicy) {
        self.policy = policy;
    }

    /// Record a diagnostic and log it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!(
            kind = ?diagnostic.kind,
            endpoint = %diagnostic.endpoint,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context, yielding the definitions and diagnostics.
    pub fn into_parts(self) -> (Definitions, Vec<Diagnostic>) {
        (self.definitions, self.diagnostics)
    }
}

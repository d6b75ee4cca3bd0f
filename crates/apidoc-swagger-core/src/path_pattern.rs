//! Colon-placeholder URL tokenizer.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("valid regex"));

/// A URL pattern split into its Swagger template and path keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    /// URL with `:name` rewritten to `{name}`.
    pub template: String,
    /// Placeholder names in order of appearance.
    pub keys: Vec<String>,
}

impl PathPattern {
    /// Tokenize a URL such as `/users/:id/posts/:postId`.
    pub fn parse(url: &str) -> Self {
        let keys = PLACEHOLDER
            .captures_iter(url)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        let template = PLACEHOLDER.replace_all(url, "{$1}").into_owned();

        Self { template, keys }
    }

    /// Whether `name` is one of the path keys.
    pub fn has_key(&self, name: &str) -> bool {
        self.keys.iter().any(|k| k == name)
    }
}

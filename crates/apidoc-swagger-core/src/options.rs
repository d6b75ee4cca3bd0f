//! Conversion options and the group filter derived from them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::endpoint::RESERVED_GROUPS;

/// Options recognised by the conversion entry point.
///
/// Loaded from TOML with camelCase keys:
///
/// ```toml
/// generateDefinitions = true
/// ignoredGroupNames = ["Internal", "Pagination"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Build shared definitions from non-reserved parameter groups.
    pub generate_definitions: bool,
    /// Extra group names (case-insensitive) that never become shared definitions.
    pub ignored_group_names: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            generate_definitions: true,
            ignored_group_names: Vec::new(),
        }
    }
}

impl ConvertOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Group filter for shared-definition extraction.
    ///
    /// `None` when definitions are disabled: every parameter group is then
    /// treated as a plain parameter group.
    pub fn group_filter(&self) -> Option<GroupFilter> {
        if !self.generate_definitions {
            return None;
        }
        Some(GroupFilter::new(&self.ignored_group_names))
    }
}

/// Case-insensitive set of group names excluded from shared definitions.
///
/// Always contains the reserved group names.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFilter {
    ignored: Vec<String>,
}

impl GroupFilter {
    /// Build a filter from configured names plus the reserved ones.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut ignored: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
        for reserved in RESERVED_GROUPS {
            let reserved = reserved.to_lowercase();
            if !ignored.contains(&reserved) {
                ignored.push(reserved);
            }
        }
        Self { ignored }
    }

    /// Whether a group stays a parameter group rather than a shared definition.
    pub fn is_ignored(&self, group: &str) -> bool {
        let group = group.to_lowercase();
        self.ignored.iter().any(|g| *g == group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert!(options.generate_definitions);
        assert!(options.ignored_group_names.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let options = ConvertOptions::from_toml_str(
            r#"
            generateDefinitions = false
            ignoredGroupNames = ["Internal"]
            "#,
        )
        .unwrap();

        assert!(!options.generate_definitions);
        assert_eq!(options.ignored_group_names, vec!["Internal".to_string()]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = ConvertOptions::from_toml_str(r#"ignoredGroupNames = ["A"]"#).unwrap();
        assert!(options.generate_definitions);
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConvertOptions::from_toml_str("generateDefinitions = \"yes\"");
        assert!(matches!(result, Err(crate::CoreError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let options = ConvertOptions::load(Path::new("/nonexistent/apidoc-swagger.toml")).unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ignoredGroupNames = [\"Paging\"]").unwrap();

        let options = ConvertOptions::load(file.path()).unwrap();
        assert!(options.generate_definitions);
        assert_eq!(options.ignored_group_names, vec!["Paging".to_string()]);
    }

    #[test]
    fn test_filter_disabled() {
        let options = ConvertOptions {
            generate_definitions: false,
            ..Default::default()
        };
        assert!(options.group_filter().is_none());
    }

    #[test]
    fn test_filter_reserved_and_configured() {
        let filter = GroupFilter::new(&["Internal"]);

        assert!(filter.is_ignored("parameter"));
        assert!(filter.is_ignored("Parameter"));
        assert!(filter.is_ignored("REQUEST BODY FIELDS"));
        assert!(filter.is_ignored("Header"));
        assert!(filter.is_ignored("internal"));
        assert!(!filter.is_ignored("User"));
    }
}

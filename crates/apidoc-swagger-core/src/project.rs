//! Project metadata (`api_project.json`).

use serde::{Deserialize, Serialize};

/// Project-level metadata from apidoc's `api_project.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base URL of the API (`https://api.example.com/v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Where the API is served, split out of [`ProjectInfo::url`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerLocation {
    pub schemes: Vec<String>,
    pub host: Option<String>,
    pub base_path: Option<String>,
}

impl ProjectInfo {
    /// Parse the contents of `api_project.json`.
    pub fn parse(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Document title: `title`, falling back to `name`.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// Split `url` into schemes, host and base path.
    ///
    /// A URL without `scheme://` is served over both `http` and `https`.
    pub fn server_location(&self) -> Option<ServerLocation> {
        let url = self.url.as_deref()?;

        let (schemes, rest) = match url.split_once("://") {
            Some((scheme, rest)) => (vec![scheme.to_string()], rest),
            None => (vec!["http".to_string(), "https".to_string()], url),
        };

        let (host, base_path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], Some(rest[idx..].to_string())),
            None => (rest, None),
        };

        Some(ServerLocation {
            schemes,
            host: (!host.is_empty()).then(|| host.to_string()),
            base_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> ProjectInfo {
        ProjectInfo {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let project = ProjectInfo {
            name: Some("users-api".to_string()),
            ..Default::default()
        };
        assert_eq!(project.display_title(), Some("users-api"));

        let project = ProjectInfo {
            name: Some("users-api".to_string()),
            title: Some("Users".to_string()),
            ..Default::default()
        };
        assert_eq!(project.display_title(), Some("Users"));
    }

    #[test]
    fn test_no_url() {
        assert_eq!(ProjectInfo::default().server_location(), None);
    }

    #[test]
    fn test_full_url() {
        let loc = with_url("https://api.example.com/v1").server_location().unwrap();
        assert_eq!(loc.schemes, vec!["https"]);
        assert_eq!(loc.host.as_deref(), Some("api.example.com"));
        assert_eq!(loc.base_path.as_deref(), Some("/v1"));
    }

    #[test]
    fn test_url_without_scheme() {
        let loc = with_url("api.example.com/v2").server_location().unwrap();
        assert_eq!(loc.schemes, vec!["http", "https"]);
        assert_eq!(loc.host.as_deref(), Some("api.example.com"));
        assert_eq!(loc.base_path.as_deref(), Some("/v2"));
    }

    #[test]
    fn test_url_without_path() {
        let loc = with_url("http://localhost:8080").server_location().unwrap();
        assert_eq!(loc.host.as_deref(), Some("localhost:8080"));
        assert_eq!(loc.base_path, None);
    }

    #[test]
    fn test_path_only_url() {
        let loc = with_url("/api").server_location().unwrap();
        assert_eq!(loc.host, None);
        assert_eq!(loc.base_path.as_deref(), Some("/api"));
    }
}

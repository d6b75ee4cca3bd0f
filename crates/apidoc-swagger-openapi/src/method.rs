//! HTTP verbs as written in apidoc's `@api {verb}`.

/// HTTP method enum for Swagger generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Lower-case key used in Swagger path items.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    /// Parse an apidoc verb (case-insensitive, `del` is an alias for `delete`).
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.to_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" | "del" => Some(HttpMethod::Delete),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    /// Whether parameters are split into path parameters and a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verb() {
        assert_eq!(HttpMethod::from_verb("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_verb("POST"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_verb("del"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::from_verb("fetch"), None);
    }

    #[test]
    fn test_delete_alias_renders_as_delete() {
        assert_eq!(HttpMethod::from_verb("del").unwrap().as_str(), "delete");
    }

    #[test]
    fn test_has_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}

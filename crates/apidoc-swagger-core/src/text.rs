//! Text helpers for apidoc descriptions and group names.

use std::sync::LazyLock;

use regex::Regex;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Remove HTML tags (`<p>`, `</p>`, ...) that apidoc wraps descriptions in.
pub fn strip_tags(text: &str) -> String {
    TAGS.replace_all(text, "").into_owned()
}

/// [`strip_tags`] over an optional description.
pub fn strip_tags_opt(text: Option<&str>) -> Option<String> {
    text.map(strip_tags)
}

/// `"Success 200"` -> `"Success200"`, used to suffix generated definition names.
///
/// Only the first character of each space-separated word is upper-cased; the
/// rest of the word keeps its case (`"HTTP 200"` -> `"HTTP200"`).
pub fn upper_camel(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>User id</p>"), "User id");
        assert_eq!(strip_tags("<p>a <b>bold</b> move</p>"), "a bold move");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn test_strip_tags_opt() {
        assert_eq!(strip_tags_opt(None), None);
        assert_eq!(strip_tags_opt(Some("<p>x</p>")), Some("x".to_string()));
    }

    #[test]
    fn test_upper_camel() {
        assert_eq!(upper_camel("Success 200"), "Success200");
        assert_eq!(upper_camel("some text value"), "SomeTextValue");
    }

    #[test]
    fn test_upper_camel_keeps_word_case() {
        assert_eq!(upper_camel("HTTP 200"), "HTTP200");
        assert_eq!(upper_camel("success OK"), "SuccessOK");
        assert_eq!(upper_camel("Success  200"), "Success200");
        assert_eq!(upper_camel("user-list"), "User-list");
        assert_eq!(upper_camel(""), "");
    }
}

//! Dotted field path decomposition.

/// A dotted path split into owning object and leaf property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedName<'a> {
    /// All segments but the last, dot-joined. `None` for single-segment paths.
    pub object_name: Option<&'a str>,
    /// The last segment.
    pub property_name: &'a str,
}

/// Split `user.address.city` into `("user.address", "city")`.
///
/// Empty segments are not validated: `a..b` yields `("a.", "b")`.
pub fn split_field_path(path: &str) -> NestedName<'_> {
    match path.rfind('.') {
        Some(idx) => NestedName {
            object_name: Some(&path[..idx]),
            property_name: &path[idx + 1..],
        },
        None => NestedName {
            object_name: None,
            property_name: path,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let name = split_field_path("id");
        assert_eq!(name.object_name, None);
        assert_eq!(name.property_name, "id");
    }

    #[test]
    fn test_two_segments() {
        let name = split_field_path("user.name");
        assert_eq!(name.object_name, Some("user"));
        assert_eq!(name.property_name, "name");
    }

    #[test]
    fn test_deep_path() {
        let name = split_field_path("user.address.city");
        assert_eq!(name.object_name, Some("user.address"));
        assert_eq!(name.property_name, "city");
    }

    #[test]
    fn test_malformed_paths_pass_through() {
        assert_eq!(
            split_field_path("a..b"),
            NestedName {
                object_name: Some("a."),
                property_name: "b"
            }
        );
        assert_eq!(
            split_field_path("a."),
            NestedName {
                object_name: Some("a"),
                property_name: ""
            }
        );
        assert_eq!(split_field_path("").property_name, "");
    }
}

//! Raw apidoc type classification.
//!
//! Reference detection looks at the definitions registered so far, so a type
//! naming a definition that is only created later classifies as a scalar.
//! Forward references are not supported.

use crate::types::Definitions;

/// Shape of a raw field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive type, lower-cased (`string`, `number`, ...).
    Scalar(String),
    /// `T[]` where `T` is primitive.
    ArrayOfScalar(String),
    /// Exactly `Object`: a nested object populated by later rows.
    Object,
    /// `Object[]` (any case) or exactly `Array`.
    ArrayOfObject,
    /// Name of an existing definition.
    Reference(String),
    /// `T[]` where `T` names an existing definition.
    ArrayOfReference(String),
}

impl FieldKind {
    /// Whether the field owns a nested definition named after its own path.
    pub fn nests(&self) -> bool {
        matches!(self, FieldKind::Object | FieldKind::ArrayOfObject)
    }
}

/// Classify a raw type against the definitions registered so far.
pub fn classify(raw: &str, definitions: &Definitions) -> FieldKind {
    if let Some(item) = raw.strip_suffix("[]") {
        return if item.eq_ignore_ascii_case("object") {
            FieldKind::ArrayOfObject
        } else if definitions.contains(item) {
            FieldKind::ArrayOfReference(item.to_string())
        } else {
            FieldKind::ArrayOfScalar(item.to_lowercase())
        };
    }

    match raw {
        "Object" => FieldKind::Object,
        "Array" => FieldKind::ArrayOfObject,
        _ if definitions.contains(raw) => FieldKind::Reference(raw.to_string()),
        _ => FieldKind::Scalar(raw.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(names: &[&str]) -> Definitions {
        let mut defs = Definitions::new();
        for name in names {
            defs.ensure(name);
        }
        defs
    }

    #[test]
    fn test_primitives_lowercase() {
        let d = defs(&[]);
        assert_eq!(classify("String", &d), FieldKind::Scalar("string".into()));
        assert_eq!(classify("Number", &d), FieldKind::Scalar("number".into()));
        assert_eq!(classify("boolean", &d), FieldKind::Scalar("boolean".into()));
        assert_eq!(classify("", &d), FieldKind::Scalar(String::new()));
    }

    #[test]
    fn test_structural_names_are_case_sensitive() {
        let d = defs(&[]);
        assert_eq!(classify("Object", &d), FieldKind::Object);
        assert_eq!(classify("Array", &d), FieldKind::ArrayOfObject);
        assert_eq!(classify("object", &d), FieldKind::Scalar("object".into()));
        assert_eq!(classify("array", &d), FieldKind::Scalar("array".into()));
    }

    #[test]
    fn test_arrays() {
        let d = defs(&["Foo"]);
        assert_eq!(classify("Number[]", &d), FieldKind::ArrayOfScalar("number".into()));
        assert_eq!(classify("Object[]", &d), FieldKind::ArrayOfObject);
        assert_eq!(classify("object[]", &d), FieldKind::ArrayOfObject);
        assert_eq!(classify("Foo[]", &d), FieldKind::ArrayOfReference("Foo".into()));
        assert_eq!(classify("Bar[]", &d), FieldKind::ArrayOfScalar("bar".into()));
    }

    #[test]
    fn test_reference() {
        let d = defs(&["Address"]);
        assert_eq!(classify("Address", &d), FieldKind::Reference("Address".into()));
        assert_eq!(classify("address", &d), FieldKind::Scalar("address".into()));
    }

    #[test]
    fn test_forward_reference_is_scalar() {
        let mut d = defs(&[]);
        assert_eq!(classify("Address", &d), FieldKind::Scalar("address".into()));

        d.ensure("Address");
        assert_eq!(classify("Address", &d), FieldKind::Reference("Address".into()));
    }

    #[test]
    fn test_nests() {
        assert!(FieldKind::Object.nests());
        assert!(FieldKind::ArrayOfObject.nests());
        assert!(!FieldKind::Reference("A".into()).nests());
        assert!(!FieldKind::Scalar("string".into()).nests());
    }
}

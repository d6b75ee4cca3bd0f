//! Schema synthesis for one schema-bearing location.

use std::borrow::Cow;

use apidoc_swagger_core::AnnotatedField;

use crate::classify::{FieldKind, classify};
use crate::context::SchemaContext;
use crate::tree::{build_tree, register_group};
use crate::types::{Definitions, Schema};

/// Which side of the exchange a field list describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Request body: structure is inferred from the first field's type.
    Request,
    /// Response payload: always folded into a definition, since responses
    /// rarely declare an explicit container type.
    Response,
}

/// Produce the schema for a request body or response payload.
///
/// Object-shaped lists (first type contains `object` or is `array`, or any
/// response) are folded into definitions and referenced; `name` names the
/// definition if one has to be created. Anything else is an inline schema.
pub fn synthesize(
    ctx: &mut SchemaContext,
    fields: &[AnnotatedField],
    name: &str,
    payload: Payload,
) -> Schema {
    let Some(first) = fields.first() else {
        return Schema::default();
    };
    let raw = first.raw_type();
    let lower = raw.to_lowercase();

    if lower.contains("object") || lower == "array" || payload == Payload::Response {
        // `Object[]` roots go through the same branch as `Array` roots
        let fields: Cow<'_, [AnnotatedField]> = if lower == "object[]" {
            let mut normalized = fields.to_vec();
            normalized[0].field_type = Some("Array".to_string());
            Cow::Owned(normalized)
        } else {
            Cow::Borrowed(fields)
        };

        let root = build_tree(ctx, &fields, name, name);
        return if root.is_array() {
            Schema::array(Schema::ref_to(&root.top_level_ref))
        } else {
            Schema::ref_to(&root.top_level_ref)
        };
    }

    inline_schema(raw, ctx.definitions())
}

/// Register a reusable parameter group and return a reference to it.
pub fn synthesize_group(ctx: &mut SchemaContext, group: &str, fields: &[AnnotatedField]) -> Schema {
    register_group(ctx, group, fields);
    Schema::ref_to(group)
}

/// Inline schema for a scalar or scalar-array type.
pub fn inline_schema(raw: &str, definitions: &Definitions) -> Schema {
    match classify(raw, definitions) {
        FieldKind::Scalar(ty) => Schema::typed(ty),
        FieldKind::ArrayOfScalar(item) => Schema::array(Schema::typed(item)),
        FieldKind::Reference(name) => Schema::ref_to(&name),
        FieldKind::ArrayOfReference(name) => Schema::array(Schema::ref_to(&name)),
        FieldKind::Object => Schema::typed("object"),
        FieldKind::ArrayOfObject => Schema::array(Schema::typed("object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(path: &str, ty: &str) -> AnnotatedField {
        AnnotatedField::new(path, ty)
    }

    #[test]
    fn test_scalar_body_is_inline() {
        let mut ctx = SchemaContext::new();
        let schema = synthesize(&mut ctx, &[field("count", "Number")], "X", Payload::Request);

        assert_eq!(schema, Schema::typed("number"));
        assert!(ctx.definitions().is_empty());
    }

    #[test]
    fn test_scalar_array_body() {
        let mut ctx = SchemaContext::new();
        let schema = synthesize(&mut ctx, &[field("ids", "Number[]")], "X", Payload::Request);
        assert_eq!(schema, Schema::array(Schema::typed("number")));
    }

    #[test]
    fn test_reference_body() {
        let mut ctx = SchemaContext::new();
        ctx.definitions_mut().ensure("Foo");

        let schema = synthesize(&mut ctx, &[field("foo", "Foo")], "X", Payload::Request);
        assert_eq!(schema, Schema::ref_to("Foo"));

        let schema = synthesize(&mut ctx, &[field("foos", "Foo[]")], "X", Payload::Request);
        assert_eq!(schema, Schema::array(Schema::ref_to("Foo")));
    }

    #[test]
    fn test_unknown_array_item_is_inline() {
        let mut ctx = SchemaContext::new();
        let schema = synthesize(&mut ctx, &[field("foos", "Foo[]")], "X", Payload::Request);
        assert_eq!(schema, Schema::array(Schema::typed("foo")));
    }

    #[test]
    fn test_object_body_is_ref() {
        let mut ctx = SchemaContext::new();
        let fields = vec![field("user", "Object"), field("user.name", "String")];

        let schema = synthesize(&mut ctx, &fields, "X", Payload::Request);

        assert_eq!(schema, Schema::ref_to("user"));
        assert!(ctx.definitions().contains("user"));
    }

    #[test]
    fn test_object_array_root_normalized() {
        let mut ctx = SchemaContext::new();
        let fields = vec![field("items", "Object[]"), field("items.price", "Number")];

        let schema = synthesize(&mut ctx, &fields, "X", Payload::Request);

        assert_eq!(schema, Schema::array(Schema::ref_to("items")));
        assert!(ctx.definitions().get("items").unwrap().properties.contains_key("price"));
        // the caller's list is left untouched
        assert_eq!(fields[0].raw_type(), "Object[]");
    }

    #[test]
    fn test_array_root() {
        let mut ctx = SchemaContext::new();
        let fields = vec![field("list", "array"), field("list.id", "Number")];

        let schema = synthesize(&mut ctx, &fields, "X", Payload::Request);

        // lower-case "array" is not the structural `Array`: the default object is the
        // root, but the wrapper still follows the first field's type
        assert_eq!(schema, Schema::array(Schema::ref_to("X")));
        assert_eq!(
            ctx.definitions().get("X").unwrap().properties["list"],
            Schema::typed("array")
        );
    }

    #[test]
    fn test_response_is_always_structural() {
        let mut ctx = SchemaContext::new();
        let fields = vec![field("id", "Number"), field("name", "String")];

        let schema = synthesize(&mut ctx, &fields, "GetUserSuccess200", Payload::Response);

        assert_eq!(schema, Schema::ref_to("GetUserSuccess200"));
        let def = ctx.definitions().get("GetUserSuccess200").unwrap();
        assert_eq!(def.properties.len(), 2);
    }

    #[test]
    fn test_response_array_root() {
        let mut ctx = SchemaContext::new();
        let fields = vec![field("users", "Object[]"), field("users.id", "Number")];

        let schema = synthesize(&mut ctx, &fields, "ListUsersSuccess200", Payload::Response);

        assert_eq!(schema, Schema::array(Schema::ref_to("users")));
    }

    #[test]
    fn test_empty_fields() {
        let mut ctx = SchemaContext::new();
        assert_eq!(synthesize(&mut ctx, &[], "X", Payload::Response), Schema::default());
    }

    #[test]
    fn test_synthesize_group() {
        let mut ctx = SchemaContext::new();
        let schema = synthesize_group(&mut ctx, "Pagination", &[field("page", "Number")]);

        assert_eq!(schema, Schema::ref_to("Pagination"));
        assert!(ctx.definitions().get("Pagination").unwrap().is_required("page"));
    }

    #[test]
    fn test_missing_type_passes_through() {
        let mut ctx = SchemaContext::new();
        let schema = synthesize(&mut ctx, &[AnnotatedField::untyped("x")], "X", Payload::Request);
        assert_eq!(schema, Schema::typed(""));
    }
}

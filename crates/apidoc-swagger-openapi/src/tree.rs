//! Definition tree builder.
//!
//! Folds an ordered list of dotted-path fields into named object definitions.
//! Every prefix that owns a leaf becomes a definition; object and array leaves
//! point at the definition named after their own path, which later rows
//! sharing that prefix populate.

use apidoc_swagger_core::AnnotatedField;
use apidoc_swagger_core::text::strip_tags_opt;
use tracing::{debug, trace};

use crate::classify::{FieldKind, classify};
use crate::context::SchemaContext;
use crate::nested_name::{NestedName, split_field_path};
use crate::types::Schema;

/// The definition elected as root of a folded field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRoot {
    /// Definition name of the root.
    pub top_level_ref: String,
    /// `"array"` for an `Array` root, otherwise the raw type of the first field.
    /// `None` when the field list was empty.
    pub top_level_ref_type: Option<String>,
}

impl TreeRoot {
    /// Whether the root should be wrapped as an array of references.
    pub fn is_array(&self) -> bool {
        self.top_level_ref_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("array"))
    }
}

/// Fold `fields` into the context's definitions.
///
/// Fields without a dot belong to `default_object`. The first field elects the
/// root: an `Object` or `Array` first field names the root after its property
/// name (the last path segment) and contributes no property; otherwise the
/// first field's owner is the root.
/// `top_level_ref` is returned unchanged for an empty list.
pub fn build_tree(
    ctx: &mut SchemaContext,
    fields: &[AnnotatedField],
    top_level_ref: &str,
    default_object: &str,
) -> TreeRoot {
    let mut root = TreeRoot {
        top_level_ref: top_level_ref.to_string(),
        top_level_ref_type: None,
    };

    for (idx, field) in fields.iter().enumerate() {
        let nested = split_field_path(&field.field);
        let mut owner = nested.object_name.unwrap_or(default_object);
        let mut property = Some(nested.property_name);

        if idx == 0 {
            let raw = field.raw_type();
            root.top_level_ref_type = Some(raw.to_string());
            match raw {
                "Object" => {
                    owner = nested.property_name;
                    property = None;
                }
                "Array" => {
                    owner = nested.property_name;
                    property = None;
                    root.top_level_ref_type = Some("array".to_string());
                }
                _ => {}
            }
            root.top_level_ref = owner.to_string();
        }

        fold_field(ctx, field, &field.field, owner, property);
    }

    root
}

/// Register a reusable parameter group as a definition named after the group.
///
/// Each field path is prefixed with `<group>.`, so `name` lands in `group` and
/// `address.city` lands in `group.address`. No root election takes place.
pub fn register_group(ctx: &mut SchemaContext, group: &str, fields: &[AnnotatedField]) {
    debug!(group, fields = fields.len(), "registering shared group");
    ensure_owner(ctx, group);

    for field in fields {
        let path = format!("{group}.{}", field.field);
        let nested = split_field_path(&path);
        let owner = nested.object_name.unwrap_or(group);
        fold_field(ctx, field, &path, owner, Some(nested.property_name));
    }
}

fn fold_field(
    ctx: &mut SchemaContext,
    field: &AnnotatedField,
    path: &str,
    owner: &str,
    property: Option<&str>,
) {
    ensure_owner(ctx, owner);

    // Pure prefix rows and paths ending in a dot carry no property
    let Some(property) = property.filter(|p| !p.is_empty()) else {
        return;
    };

    let raw = field.raw_type();
    let kind = classify(raw, ctx.definitions());
    trace!(path, owner, property, ?kind, "folding field");

    if kind.nests() && ctx.definitions_mut().ensure(path) {
        debug!(definition = path, "created nested definition");
    }

    let schema = property_schema(&kind, raw, path)
        .with_description(strip_tags_opt(field.description.as_deref()));

    let policy = ctx.policy();
    let definition = ctx.definitions_mut().entry_mut(owner);
    policy.add_property(definition, property, schema);
    if !field.optional {
        policy.add_required(definition, property);
    }
}

/// Ensure the owning definition exists.
///
/// A newly created dotted owner is linked from its nearest existing ancestor,
/// creating and linking every missing level in between, so bodies declared
/// only through dotted leaves stay reachable from their root. Owners with no
/// existing ancestor are left unlinked.
fn ensure_owner(ctx: &mut SchemaContext, owner: &str) {
    if !ctx.definitions_mut().ensure(owner) {
        return;
    }
    debug!(definition = owner, "created definition");

    // Missing levels from `owner` upwards, ending below the first existing ancestor
    let mut missing = vec![owner];
    let mut current = owner;
    loop {
        let NestedName {
            object_name: Some(parent),
            property_name,
        } = split_field_path(current)
        else {
            return;
        };
        if property_name.is_empty() {
            return;
        }
        if ctx.definitions().contains(parent) {
            break;
        }
        missing.push(parent);
        current = parent;
    }

    let policy = ctx.policy();
    for child in missing.into_iter().rev() {
        let NestedName {
            object_name: Some(parent),
            property_name,
        } = split_field_path(child)
        else {
            continue;
        };
        if ctx.definitions_mut().ensure(child) {
            debug!(definition = child, "created intermediate definition");
        }
        let parent_def = ctx.definitions_mut().entry_mut(parent);
        policy.add_property(parent_def, property_name, Schema::object_ref(child));
    }
}

fn property_schema(kind: &FieldKind, raw: &str, path: &str) -> Schema {
    match kind {
        FieldKind::Scalar(ty) => Schema::typed(ty.clone()),
        FieldKind::ArrayOfScalar(item) => Schema::array(Schema::typed(item.clone())),
        FieldKind::Object => Schema::object_ref(path),
        FieldKind::ArrayOfObject => Schema::array(Schema::ref_to(path)),
        FieldKind::Reference(name) => Schema {
            schema_type: Some(raw.to_lowercase()),
            ..Schema::ref_to(name)
        },
        FieldKind::ArrayOfReference(name) => Schema::array(Schema::ref_to(name)),
    }
}

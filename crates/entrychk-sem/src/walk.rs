//! The semantic tree walker.
//!
//! Depth-first over the members of an object, pre-order for counting and
//! type checks, with cross-sibling constraints expressed inside the field
//! predicates (which see the fully built tree, so textual order of the
//! siblings does not matter). Predicates never abort the walk; every
//! problem is accumulated so the user sees as many as possible in one
//! pass.

use entrychk_json::{NodeId, NodeKind, Tree};
use entrychk_types::{codes, ValidationError};

use crate::ignore::{self, IgnoreSet};
use crate::schema::Schema;
use crate::sink::ErrorSink;

/// Separate depth bound for the walk. Parse already bounds the tree; this
/// guards against walking a tree built with a larger parse bound.
pub const WALK_MAX_DEPTH: u32 = 1_000_000;

/// Validate a parse tree against a schema, suppressing codes in the
/// process-wide ignore registry. The verdict is `errors.is_empty()`.
pub fn validate(tree: &Tree, schema: &Schema) -> Vec<ValidationError> {
    let ignores = ignore::registry_snapshot();
    validate_with(tree, schema, &ignores)
}

/// Validate with an explicit ignore set; the library-call escape hatch
/// from the process-wide registry.
pub fn validate_with(tree: &Tree, schema: &Schema, ignores: &IgnoreSet) -> Vec<ValidationError> {
    let mut sink = ErrorSink::new(Some(ignores));
    let root = tree.root();
    if !matches!(tree.node(root).kind, NodeKind::Object(_)) {
        sink.report(
            codes::ROOT_NOT_OBJECT,
            root.index(),
            0,
            "validate",
            format!(
                "top-level value is {}, must be an object",
                tree.node(root).kind.type_name()
            ),
        );
        return sink.into_errors();
    }
    walk_object(tree, root, schema, &mut sink);
    sink.into_errors()
}

/// Walk one object node against a schema table. Also used by the author
/// array predicate to validate each element against the sub-schema.
pub(crate) fn walk_object(
    tree: &Tree,
    object: NodeId,
    schema: &Schema,
    sink: &mut ErrorSink<'_>,
) {
    let object_depth = tree.node(object).depth;
    if object_depth > WALK_MAX_DEPTH {
        sink.report(
            codes::INTERNAL_DEPTH_EXCEEDED,
            object.index(),
            object_depth,
            "walk_object",
            format!("walk depth {object_depth} exceeds bound {WALK_MAX_DEPTH}"),
        );
        return;
    }

    let mut counts = vec![0usize; schema.len()];

    for &member in tree.members(object) {
        let depth = tree.node(member).depth;
        let Some(name) = tree.member_name(member) else {
            sink.report(
                codes::NODE_NOT_CONVERTED,
                member.index(),
                depth,
                "walk_object",
                "member name did not decode",
            );
            continue;
        };
        let Some((index, field)) = schema
            .fields()
            .enumerate()
            .find(|(_, f)| f.name == name)
        else {
            sink.report(
                codes::UNKNOWN_MEMBER,
                member.index(),
                depth,
                "walk_object",
                format!("unknown member {name:?}"),
            );
            continue;
        };
        counts[index] += 1;

        let Some(value) = tree.member_value(member) else {
            sink.report(
                codes::INTERNAL_BAD_NODE,
                member.index(),
                depth,
                "walk_object",
                format!("member {name:?} has no value node"),
            );
            continue;
        };
        let value_node = tree.node(value);

        if !field.json_type.matches(&value_node.kind) {
            sink.report(
                codes::TYPE_MISMATCH,
                member.index(),
                depth,
                "walk_object",
                format!(
                    "member {name:?} is {}, expected {}",
                    value_node.kind.type_name(),
                    field.json_type.name()
                ),
            );
            continue;
        }
        if !tree.node(member).converted || !value_node.converted {
            sink.report(
                codes::NODE_NOT_CONVERTED,
                member.index(),
                depth,
                "walk_object",
                format!("member {name:?} failed conversion"),
            );
            continue;
        }
        if let NodeKind::String(record) = &value_node.kind {
            if record.decoded.is_empty() && !field.can_be_empty {
                sink.report(
                    codes::EMPTY_VALUE,
                    member.index(),
                    depth,
                    "walk_object",
                    format!("member {name:?} may not be empty"),
                );
                continue;
            }
        }
        if let Some(check) = field.check {
            check(tree, member, depth, field, sink);
        }
    }

    for (index, field) in schema.fields().enumerate() {
        if field.required && counts[index] == 0 {
            sink.report(
                codes::MISSING_REQUIRED,
                object.index(),
                object_depth,
                "walk_object",
                format!("required member {:?} not found", field.name),
            );
        }
        if field.max_count > 0 && counts[index] > field.max_count {
            sink.report(
                codes::DUPLICATE_MEMBER,
                object.index(),
                object_depth,
                "walk_object",
                format!(
                    "member {:?} occurs {} times, at most {} allowed",
                    field.name, counts[index], field.max_count
                ),
            );
        }
    }
}

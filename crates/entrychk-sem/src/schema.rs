//! Declarative schema tables.
//!
//! A schema is an ordered table of field descriptors: member name, JSON
//! type, occurrence bounds, emptiness policy and an optional field-level
//! predicate. Three document schemas are defined (info, author, and the
//! per-author element sub-schema), each split into the members common to
//! both file kinds and the kind-specific members.

use entrychk_json::{NodeId, NodeKind, Tree};

use crate::checks;
use crate::sink::ErrorSink;

/// JSON type a schema field requires of its member's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Number,
    Integer,
    Bool,
    Null,
    Object,
    Array,
    /// A value that may be a string or `null` (optional string members).
    MemberOfStringOrNull,
}

impl JsonType {
    /// Does a parse node's kind satisfy this type?
    pub fn matches(self, kind: &NodeKind) -> bool {
        match self {
            JsonType::String => matches!(kind, NodeKind::String(_)),
            JsonType::Number => matches!(kind, NodeKind::Number(_)),
            JsonType::Integer => match kind {
                NodeKind::Number(record) => !record.is_floating && !record.is_e_notation,
                _ => false,
            },
            JsonType::Bool => matches!(kind, NodeKind::Bool(_)),
            JsonType::Null => matches!(kind, NodeKind::Null),
            JsonType::Object => matches!(kind, NodeKind::Object(_)),
            JsonType::Array => matches!(kind, NodeKind::Array(_)),
            JsonType::MemberOfStringOrNull => {
                matches!(kind, NodeKind::String(_) | NodeKind::Null)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Bool => "bool",
            JsonType::Null => "null",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::MemberOfStringOrNull => "string or null",
        }
    }
}

/// Uniform signature of every field-level predicate: the member node, its
/// depth, the triggering field descriptor, and the error sink. Returns
/// false when the predicate reported at least one error.
pub type CheckFn = fn(&Tree, NodeId, u32, &SchemaField, &mut ErrorSink) -> bool;

/// One expected member of a JSON document.
#[derive(Clone, Copy)]
pub struct SchemaField {
    /// Member name, unique within its schema.
    pub name: &'static str,
    pub json_type: JsonType,
    pub required: bool,
    /// Maximum permitted occurrences; 0 means unlimited.
    pub max_count: usize,
    /// Whether an empty string value is acceptable.
    pub can_be_empty: bool,
    pub check: Option<CheckFn>,
}

impl std::fmt::Debug for SchemaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaField")
            .field("name", &self.name)
            .field("json_type", &self.json_type)
            .field("required", &self.required)
            .field("max_count", &self.max_count)
            .field("can_be_empty", &self.can_be_empty)
            .field("check", &self.check.map(|_| "fn"))
            .finish()
    }
}

/// Which document a schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Info,
    Author,
    AuthorElement,
}

/// An ordered schema: the common member table plus the kind-specific one.
/// Lookup is exact-string; name order is fixed so cross-sibling lookups
/// stay stable.
#[derive(Debug)]
pub struct Schema {
    pub kind: DocumentKind,
    pub common: &'static [SchemaField],
    pub specific: &'static [SchemaField],
}

impl Schema {
    pub fn find(&self, name: &str) -> Option<&SchemaField> {
        self.common
            .iter()
            .chain(self.specific.iter())
            .find(|f| f.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.common.iter().chain(self.specific.iter())
    }

    pub fn len(&self) -> usize {
        self.common.len() + self.specific.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const fn field(
    name: &'static str,
    json_type: JsonType,
    check: Option<CheckFn>,
) -> SchemaField {
    SchemaField {
        name,
        json_type,
        required: true,
        max_count: 1,
        can_be_empty: false,
        check,
    }
}

const fn optional_string(name: &'static str, check: Option<CheckFn>) -> SchemaField {
    SchemaField {
        name,
        json_type: JsonType::MemberOfStringOrNull,
        required: true,
        max_count: 1,
        can_be_empty: true,
        check,
    }
}

/// Override/warning flags: type-checked when present, but a minimal
/// document may omit them.
const fn optional_bool(name: &'static str) -> SchemaField {
    SchemaField {
        name,
        json_type: JsonType::Bool,
        required: false,
        max_count: 1,
        can_be_empty: false,
        check: None,
    }
}

/// Members required in both document kinds.
pub static COMMON_FIELDS: &[SchemaField] = &[
    field("no_comment", JsonType::String, Some(checks::chk_no_comment)),
    field(
        "IOCCC_contest_id",
        JsonType::String,
        Some(checks::chk_contest_id),
    ),
    field("year", JsonType::Integer, Some(checks::chk_year)),
    field(
        "mkiocccentry_version",
        JsonType::String,
        Some(checks::chk_tool_version),
    ),
    field(
        "chkentry_version",
        JsonType::String,
        Some(checks::chk_tool_version),
    ),
    field(
        "fnamchk_version",
        JsonType::String,
        Some(checks::chk_tool_version),
    ),
    field(
        "txzchk_version",
        JsonType::String,
        Some(checks::chk_tool_version),
    ),
    field("entry_num", JsonType::Integer, Some(checks::chk_entry_num)),
    field("tarball", JsonType::String, Some(checks::chk_tarball)),
    field("test_mode", JsonType::Bool, None),
    field(
        "formed_timestamp",
        JsonType::Integer,
        Some(checks::chk_formed_timestamp),
    ),
    field(
        "formed_timestamp_usec",
        JsonType::Integer,
        Some(checks::chk_usec),
    ),
    field(
        "timestamp_epoch",
        JsonType::String,
        Some(checks::chk_timestamp_epoch),
    ),
    field(
        "min_timestamp",
        JsonType::Integer,
        Some(checks::chk_min_timestamp),
    ),
    field("formed_UTC", JsonType::String, Some(checks::chk_formed_utc)),
];

/// Members specific to the info document.
pub static INFO_FIELDS: &[SchemaField] = &[
    field(
        "IOCCC_info_version",
        JsonType::String,
        Some(checks::chk_info_version),
    ),
    field(
        "iocccsize_version",
        JsonType::String,
        Some(checks::chk_tool_version),
    ),
    field("title", JsonType::String, Some(checks::chk_title)),
    field("abstract", JsonType::String, Some(checks::chk_abstract)),
    field(
        "rule_2a_size",
        JsonType::Integer,
        Some(checks::chk_rule_size),
    ),
    field(
        "rule_2b_size",
        JsonType::Integer,
        Some(checks::chk_rule_size),
    ),
    optional_bool("empty_override"),
    optional_bool("rule_2a_override"),
    optional_bool("rule_2a_mismatch"),
    optional_bool("rule_2b_override"),
    optional_bool("highbit_warning"),
    optional_bool("nul_warning"),
    optional_bool("trigraph_warning"),
    optional_bool("wordbuf_warning"),
    optional_bool("ungetc_warning"),
    optional_bool("Makefile_override"),
    optional_bool("first_rule_is_all"),
    optional_bool("found_all_rule"),
    optional_bool("found_clean_rule"),
    optional_bool("found_clobber_rule"),
    optional_bool("found_try_rule"),
    field("manifest", JsonType::Array, Some(checks::chk_manifest)),
];

/// Members specific to the author document.
pub static AUTHOR_FIELDS: &[SchemaField] = &[
    field(
        "IOCCC_author_version",
        JsonType::String,
        Some(checks::chk_author_version),
    ),
    field(
        "author_count",
        JsonType::Integer,
        Some(checks::chk_author_count),
    ),
    field("authors", JsonType::Array, Some(checks::chk_authors)),
];

/// Sub-schema every element of the authors array must satisfy.
pub static AUTHOR_ELEMENT_FIELDS: &[SchemaField] = &[
    field("name", JsonType::String, Some(checks::chk_author_name)),
    field(
        "location_code",
        JsonType::String,
        Some(checks::chk_location_code),
    ),
    optional_string("email", Some(checks::chk_email)),
    optional_string("url", Some(checks::chk_url)),
    optional_string("twitter", Some(checks::chk_twitter)),
    optional_string("github", Some(checks::chk_github)),
    optional_string("affiliation", Some(checks::chk_affiliation)),
    field("past_winner", JsonType::Bool, None),
    field("default_handle", JsonType::Bool, None),
    optional_string("author_handle", Some(checks::chk_author_handle)),
    field(
        "author_number",
        JsonType::Integer,
        Some(checks::chk_author_number),
    ),
];

pub static INFO_SCHEMA: Schema = Schema {
    kind: DocumentKind::Info,
    common: COMMON_FIELDS,
    specific: INFO_FIELDS,
};

pub static AUTHOR_SCHEMA: Schema = Schema {
    kind: DocumentKind::Author,
    common: COMMON_FIELDS,
    specific: AUTHOR_FIELDS,
};

pub static AUTHOR_ELEMENT_SCHEMA: Schema = Schema {
    kind: DocumentKind::AuthorElement,
    common: &[],
    specific: AUTHOR_ELEMENT_FIELDS,
};

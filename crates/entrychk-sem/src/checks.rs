//! Field-level checkers.
//!
//! Every predicate has the uniform [`CheckFn`] signature and is pure over
//! its node and sibling subtree. A predicate never aborts the walk: it
//! reports through the sink and returns. The pure `test_*` helpers carry
//! the actual value policies so they can be exercised without a tree.

use entrychk_json::{NodeId, NodeKind, Tree};
use entrychk_types::{codes, version, StringRecord};
use time::macros::format_description;
use time::{PrimitiveDateTime, Weekday};

use crate::schema::{SchemaField, AUTHOR_ELEMENT_SCHEMA};
use crate::sink::ErrorSink;
use crate::walk;

pub const UUID_LEN: usize = 36;
pub const MAX_TITLE_LEN: usize = 32;
pub const MAX_ABSTRACT_LEN: usize = 64;
pub const MAX_BASENAME_LEN: usize = 99;
pub const MAX_AUTHORS: i64 = 5;
pub const MAX_ENTRY_NUM: i64 = 9;
pub const MIN_YEAR: i64 = 2021;
pub const MAX_YEAR: i64 = 2099;
pub const MAX_USEC: i64 = 999_999;
pub const MAX_NAME_LEN: usize = 48;
pub const MAX_EMAIL_LEN: usize = 48;
pub const MAX_URL_LEN: usize = 64;
pub const MAX_TWITTER_LEN: usize = 18;
pub const MAX_GITHUB_LEN: usize = 16;
pub const MAX_AFFILIATION_LEN: usize = 48;
pub const MAX_HANDLE_LEN: usize = 25;

/// Member names a manifest entry may use.
pub const MANIFEST_KEYS: &[&str] = &[
    "info_JSON",
    "author_JSON",
    "c_src",
    "Makefile",
    "remarks",
    "extra_file",
];

/// Manifest keys that must occur exactly once.
pub const MANIFEST_REQUIRED_KEYS: &[&str] =
    &["info_JSON", "author_JSON", "c_src", "Makefile", "remarks"];

// ---------------------------------------------------------------------------
// pure value policies
// ---------------------------------------------------------------------------

/// Contest id: the literal `test`, or a version-4 variant-1 UUID in
/// lowercase hex with dashes at 8/13/18/23.
pub fn test_contest_id(s: &str) -> bool {
    if s == "test" {
        return true;
    }
    let b = s.as_bytes();
    if b.len() != UUID_LEN {
        return false;
    }
    for (i, &c) in b.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if c != b'-' {
                    return false;
                }
            }
            _ => {
                if !(c.is_ascii_digit() || (b'a'..=b'f').contains(&c)) {
                    return false;
                }
            }
        }
    }
    // version nibble, then variant nibble
    b[14] == b'4' && matches!(b[19], b'8' | b'9' | b'a' | b'b')
}

/// Title: non-empty, bounded, `[a-z0-9][a-z0-9_+-]*`.
pub fn test_title(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if s.len() > MAX_TITLE_LEN {
        return false;
    }
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return false;
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '+' | '-'))
}

pub fn test_abstract(s: &str) -> bool {
    !s.is_empty() && s.len() <= MAX_ABSTRACT_LEN
}

/// POSIX-portable base name plus `+`: first char alphanumeric, the rest
/// from `[A-Za-z0-9._+-]`, bounded length, no path separators.
pub fn is_portable_basename(s: &str) -> bool {
    let b = s.as_bytes();
    if b.is_empty() || b.len() > MAX_BASENAME_LEN {
        return false;
    }
    if !b[0].is_ascii_alphanumeric() {
        return false;
    }
    b.iter()
        .all(|&c| c.is_ascii_alphanumeric() || matches!(c, b'.' | b'_' | b'+' | b'-'))
}

/// Tarball filename: portable base name shaped `entry.*.txz`.
pub fn test_tarball(s: &str) -> bool {
    is_portable_basename(s) && s.starts_with("entry.") && s.ends_with(".txz")
}

fn weekday_abbrev(w: Weekday) -> &'static str {
    match w {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// `formed_UTC` shape: `%a %b %d %H:%M:%S %Y UTC`, interpreted as UTC
/// regardless of the process environment, with the weekday consistent
/// with the date. Runs of spaces collapse, so asctime day padding is
/// accepted.
pub fn test_formed_utc(s: &str) -> bool {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != 6 || tokens[5] != "UTC" {
        return false;
    }
    let rebuilt = format!("{} {} {} {}", tokens[1], tokens[2], tokens[3], tokens[4]);
    let format = format_description!(
        "[month repr:short] [day padding:none] [hour]:[minute]:[second] [year]"
    );
    let Ok(parsed) = PrimitiveDateTime::parse(&rebuilt, &format) else {
        return false;
    };
    weekday_abbrev(parsed.date().weekday()) == tokens[0]
}

pub fn test_location_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

pub fn test_email(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() > MAX_EMAIL_LEN {
        return false;
    }
    let ats = s.bytes().filter(|&b| b == b'@').count();
    ats == 1 && !s.starts_with('@') && !s.ends_with('@')
}

pub fn test_url(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    s.len() <= MAX_URL_LEN && (s.starts_with("http://") || s.starts_with("https://"))
}

pub fn test_twitter(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() > MAX_TWITTER_LEN || !s.starts_with('@') || s.len() == 1 {
        return false;
    }
    s[1..]
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

pub fn test_github(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() > MAX_GITHUB_LEN || !s.starts_with('@') || s.len() == 1 {
        return false;
    }
    s[1..].bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub fn test_affiliation(s: &str) -> bool {
    s.len() <= MAX_AFFILIATION_LEN
}

/// Author handle: empty, or `[A-Za-z0-9_][A-Za-z0-9_.-]*` bounded.
pub fn test_author_handle(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() > MAX_HANDLE_LEN {
        return false;
    }
    let b = s.as_bytes();
    if !(b[0].is_ascii_alphanumeric() || b[0] == b'_') {
        return false;
    }
    b.iter()
        .all(|&c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'-'))
}

// ---------------------------------------------------------------------------
// tree access helpers
// ---------------------------------------------------------------------------

fn value_node(tree: &Tree, member: NodeId) -> Option<NodeId> {
    tree.member_value(member)
}

fn value_string_record(tree: &Tree, member: NodeId) -> Option<&StringRecord> {
    let value = value_node(tree, member)?;
    match &tree.get(value)?.kind {
        NodeKind::String(record) => Some(record),
        _ => None,
    }
}

fn value_str(tree: &Tree, member: NodeId) -> Option<&str> {
    value_string_record(tree, member)?.decoded_str()
}

/// Value of an integer member, when it fits a 64-bit signed width.
fn value_int(tree: &Tree, member: NodeId) -> Option<i64> {
    let value = value_node(tree, member)?;
    match &tree.get(value)?.kind {
        NodeKind::Number(record) if record.int64.fits => Some(record.int64.value),
        _ => None,
    }
}

fn value_is_null(tree: &Tree, member: NodeId) -> bool {
    value_node(tree, member)
        .and_then(|v| tree.get(v))
        .map(|n| matches!(n.kind, NodeKind::Null))
        .unwrap_or(false)
}

/// Shared shape of the simple string checks: extract the decoded string
/// (null counts as empty for string-or-null members) and apply a policy.
fn check_str(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    sink: &mut ErrorSink<'_>,
    code: i32,
    function_name: &'static str,
    policy: fn(&str) -> bool,
) -> bool {
    if value_is_null(tree, member) {
        return true;
    }
    let Some(s) = value_str(tree, member) else {
        sink.report(
            code,
            member.index(),
            depth,
            function_name,
            "value is not a usable string",
        );
        return false;
    };
    if policy(s) {
        true
    } else {
        sink.report(
            code,
            member.index(),
            depth,
            function_name,
            format!("invalid value {s:?}"),
        );
        false
    }
}

fn check_int_range(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    sink: &mut ErrorSink<'_>,
    code: i32,
    function_name: &'static str,
    min: i64,
    max: i64,
) -> bool {
    match value_int(tree, member) {
        Some(v) if (min..=max).contains(&v) => true,
        Some(v) => {
            sink.report(
                code,
                member.index(),
                depth,
                function_name,
                format!("{v} out of range [{min}, {max}]"),
            );
            false
        }
        None => {
            sink.report(
                code,
                member.index(),
                depth,
                function_name,
                "value is not a usable integer",
            );
            false
        }
    }
}

// ---------------------------------------------------------------------------
// predicates with the uniform signature
// ---------------------------------------------------------------------------

pub fn chk_no_comment(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(tree, member, depth, sink, codes::BAD_NO_COMMENT, "chk_no_comment", |s| {
        s == version::NO_COMMENT
    })
}

pub fn chk_contest_id(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_CONTEST_ID,
        "chk_contest_id",
        test_contest_id,
    )
}

pub fn chk_info_version(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_INFO_VERSION,
        "chk_info_version",
        |s| s == version::INFO_VERSION,
    )
}

pub fn chk_author_version(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_AUTHOR_VERSION,
        "chk_author_version",
        |s| s == version::AUTHOR_VERSION,
    )
}

fn expected_tool_version(member_name: &str) -> Option<&'static str> {
    match member_name {
        "mkiocccentry_version" => Some(version::MKIOCCCENTRY_VERSION),
        "chkentry_version" => Some(version::ENTRYCHK_VERSION),
        "fnamchk_version" => Some(version::FNAMCHK_VERSION),
        "txzchk_version" => Some(version::TXZCHK_VERSION),
        "iocccsize_version" => Some(version::IOCCCSIZE_VERSION),
        _ => None,
    }
}

/// One predicate for every `*_version` tool member; the field name picks
/// the compiled-in constant.
pub fn chk_tool_version(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    let Some(expected) = expected_tool_version(field.name) else {
        sink.report(
            codes::INTERNAL_BAD_SCHEMA,
            member.index(),
            depth,
            "chk_tool_version",
            format!("no compiled-in version for member {}", field.name),
        );
        return false;
    };
    match value_str(tree, member) {
        Some(s) if s == expected => true,
        Some(s) => {
            sink.report(
                codes::BAD_TOOL_VERSION,
                member.index(),
                depth,
                "chk_tool_version",
                format!("{}: {s:?} != {expected:?}", field.name),
            );
            false
        }
        None => {
            sink.report(
                codes::BAD_TOOL_VERSION,
                member.index(),
                depth,
                "chk_tool_version",
                "value is not a usable string",
            );
            false
        }
    }
}

pub fn chk_year(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_YEAR,
        "chk_year",
        MIN_YEAR,
        MAX_YEAR,
    )
}

pub fn chk_entry_num(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_ENTRY_NUM,
        "chk_entry_num",
        0,
        MAX_ENTRY_NUM,
    )
}

pub fn chk_tarball(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_TARBALL,
        "chk_tarball",
        test_tarball,
    )
}

/// `formed_timestamp` must be at or after its sibling `min_timestamp`
/// (the compiled-in floor when the sibling is absent).
pub fn chk_formed_timestamp(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    let Some(formed) = value_int(tree, member) else {
        sink.report(
            codes::TIMESTAMP_TOO_OLD,
            member.index(),
            depth,
            "chk_formed_timestamp",
            "value is not a usable integer",
        );
        return false;
    };
    let floor = tree
        .parent(member)
        .and_then(|parent| tree.find_member(parent, "min_timestamp"))
        .and_then(|sibling| value_int(tree, sibling))
        .unwrap_or(version::MIN_TIMESTAMP);
    if formed < floor {
        sink.report(
            codes::TIMESTAMP_TOO_OLD,
            member.index(),
            depth,
            "chk_formed_timestamp",
            format!("formed_timestamp {formed} < min_timestamp {floor}"),
        );
        return false;
    }
    true
}

pub fn chk_usec(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_USEC,
        "chk_usec",
        0,
        MAX_USEC,
    )
}

pub fn chk_timestamp_epoch(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_EPOCH,
        "chk_timestamp_epoch",
        |s| s == version::TIMESTAMP_EPOCH,
    )
}

pub fn chk_min_timestamp(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_MIN_TIMESTAMP,
        "chk_min_timestamp",
        version::MIN_TIMESTAMP,
        version::MIN_TIMESTAMP,
    )
}

pub fn chk_formed_utc(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_FORMED_UTC,
        "chk_formed_utc",
        test_formed_utc,
    )
}

pub fn chk_title(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_TITLE,
        "chk_title",
        test_title,
    )
}

pub fn chk_abstract(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_ABSTRACT,
        "chk_abstract",
        test_abstract,
    )
}

pub fn chk_rule_size(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_RULE_SIZE,
        "chk_rule_size",
        0,
        i64::MAX,
    )
}

/// Manifest: every element is a single-member object keyed from the fixed
/// set; the five required keys occur exactly once, `extra_file` freely;
/// all filenames pass the base-name policy and are unique across the
/// whole manifest.
pub fn chk_manifest(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    let before = sink.len();
    let Some(array) = value_node(tree, member) else {
        sink.report(
            codes::INTERNAL_BAD_NODE,
            member.index(),
            depth,
            "chk_manifest",
            "manifest member has no value",
        );
        return false;
    };

    let mut key_counts = vec![0usize; MANIFEST_KEYS.len()];
    let mut filenames: Vec<Vec<u8>> = Vec::new();

    for &item in tree.items(array) {
        let item_depth = depth + 2;
        let members = match &tree.node(item).kind {
            NodeKind::Object(members) => members,
            other => {
                sink.report(
                    codes::MANIFEST_SHAPE,
                    item.index(),
                    item_depth,
                    "chk_manifest",
                    format!("manifest entry is {}, not an object", other.type_name()),
                );
                continue;
            }
        };
        if members.len() != 1 {
            sink.report(
                codes::MANIFEST_SHAPE,
                item.index(),
                item_depth,
                "chk_manifest",
                format!("manifest entry has {} members, expected 1", members.len()),
            );
            continue;
        }
        let entry = members[0];
        let Some(key) = tree.member_name(entry) else {
            sink.report(
                codes::MANIFEST_UNKNOWN_KEY,
                entry.index(),
                item_depth,
                "chk_manifest",
                "manifest key is not a usable string",
            );
            continue;
        };
        let Some(slot) = MANIFEST_KEYS.iter().position(|&k| k == key) else {
            sink.report(
                codes::MANIFEST_UNKNOWN_KEY,
                entry.index(),
                item_depth,
                "chk_manifest",
                format!("unknown manifest key {key:?}"),
            );
            continue;
        };
        key_counts[slot] += 1;

        match value_string_record(tree, entry) {
            Some(record) => {
                match record.decoded_str() {
                    Some(name) if is_portable_basename(name) => {}
                    _ => {
                        sink.report(
                            codes::BAD_FILENAME,
                            entry.index(),
                            item_depth,
                            "chk_manifest",
                            format!("filename {:?} violates the base-name policy", record.as_str),
                        );
                    }
                }
                if filenames.contains(&record.decoded) {
                    sink.report(
                        codes::MANIFEST_DUP_FILENAME,
                        entry.index(),
                        item_depth,
                        "chk_manifest",
                        format!("duplicate filename {:?} in manifest", record.as_str),
                    );
                } else {
                    filenames.push(record.decoded.clone());
                }
            }
            None => {
                sink.report(
                    codes::TYPE_MISMATCH,
                    entry.index(),
                    item_depth,
                    "chk_manifest",
                    format!("manifest value for {key:?} is not a string"),
                );
            }
        }
    }

    for (slot, &key) in MANIFEST_KEYS.iter().enumerate() {
        if !MANIFEST_REQUIRED_KEYS.contains(&key) {
            continue;
        }
        match key_counts[slot] {
            0 => sink.report(
                codes::MANIFEST_MISSING_KEY,
                member.index(),
                depth,
                "chk_manifest",
                format!("manifest is missing required key {key:?}"),
            ),
            1 => {}
            n => sink.report(
                codes::MANIFEST_DUP_KEY,
                member.index(),
                depth,
                "chk_manifest",
                format!("manifest key {key:?} occurs {n} times, expected 1"),
            ),
        }
    }
    sink.len() == before
}

pub fn chk_author_count(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::AUTHOR_COUNT_RANGE,
        "chk_author_count",
        1,
        MAX_AUTHORS,
    )
}

/// The authors array: length equals the sibling `author_count`, each
/// element validates against the author sub-schema, names are unique and
/// author numbers form a repeat-free subset of `[0, count-1]`.
pub fn chk_authors(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    let before = sink.len();
    let Some(array) = value_node(tree, member) else {
        sink.report(
            codes::INTERNAL_BAD_NODE,
            member.index(),
            depth,
            "chk_authors",
            "authors member has no value",
        );
        return false;
    };
    let items = tree.items(array);

    let count = tree
        .parent(member)
        .and_then(|parent| tree.find_member(parent, "author_count"))
        .and_then(|sibling| value_int(tree, sibling));
    match count {
        Some(count) if count as usize != items.len() => {
            sink.report(
                codes::AUTHOR_COUNT_MISMATCH,
                member.index(),
                depth,
                "chk_authors",
                format!("author count {count} != array length {}", items.len()),
            );
        }
        Some(_) => {}
        None => {
            sink.report(
                codes::AUTHOR_COUNT_MISMATCH,
                member.index(),
                depth,
                "chk_authors",
                "author_count sibling not found",
            );
        }
    }

    let mut names: Vec<&[u8]> = Vec::new();
    let mut numbers: Vec<i64> = Vec::new();
    for &item in items {
        let item_depth = depth + 2;
        if !matches!(tree.node(item).kind, NodeKind::Object(_)) {
            sink.report(
                codes::TYPE_MISMATCH,
                item.index(),
                item_depth,
                "chk_authors",
                format!(
                    "author entry is {}, not an object",
                    tree.node(item).kind.type_name()
                ),
            );
            continue;
        }
        walk::walk_object(tree, item, &AUTHOR_ELEMENT_SCHEMA, sink);

        if let Some(name_member) = tree.find_member(item, "name") {
            if let Some(record) = value_string_record(tree, name_member) {
                if names.contains(&record.decoded.as_slice()) {
                    sink.report(
                        codes::AUTHOR_SET_INVALID,
                        name_member.index(),
                        item_depth,
                        "chk_authors",
                        format!("duplicate author name {:?}", record.as_str),
                    );
                } else {
                    names.push(&record.decoded);
                }
            }
        }
        if let Some(number_member) = tree.find_member(item, "author_number") {
            if let Some(number) = value_int(tree, number_member) {
                if numbers.contains(&number) {
                    sink.report(
                        codes::BAD_AUTHOR_NUMBER,
                        number_member.index(),
                        item_depth,
                        "chk_authors",
                        format!("author number {number} repeats"),
                    );
                } else {
                    if number < 0 || number >= items.len() as i64 {
                        sink.report(
                            codes::BAD_AUTHOR_NUMBER,
                            number_member.index(),
                            item_depth,
                            "chk_authors",
                            format!(
                                "author number {number} out of range [0, {}]",
                                items.len() as i64 - 1
                            ),
                        );
                    }
                    numbers.push(number);
                }
            }
        }
    }
    sink.len() == before
}

pub fn chk_author_name(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_AUTHOR_NAME,
        "chk_author_name",
        |s| !s.is_empty() && s.len() <= MAX_NAME_LEN,
    )
}

pub fn chk_location_code(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_LOCATION_CODE,
        "chk_location_code",
        test_location_code,
    )
}

pub fn chk_email(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(tree, member, depth, sink, codes::BAD_EMAIL, "chk_email", test_email)
}

pub fn chk_url(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(tree, member, depth, sink, codes::BAD_URL, "chk_url", test_url)
}

pub fn chk_twitter(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_TWITTER,
        "chk_twitter",
        test_twitter,
    )
}

pub fn chk_github(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_GITHUB,
        "chk_github",
        test_github,
    )
}

pub fn chk_affiliation(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_AFFILIATION,
        "chk_affiliation",
        test_affiliation,
    )
}

pub fn chk_author_handle(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_str(
        tree,
        member,
        depth,
        sink,
        codes::BAD_AUTHOR_HANDLE,
        "chk_author_handle",
        test_author_handle,
    )
}

/// Non-negative; the upper bound needs the author count and lives in
/// [`chk_authors`].
pub fn chk_author_number(
    tree: &Tree,
    member: NodeId,
    depth: u32,
    _field: &SchemaField,
    sink: &mut ErrorSink<'_>,
) -> bool {
    check_int_range(
        tree,
        member,
        depth,
        sink,
        codes::BAD_AUTHOR_NUMBER,
        "chk_author_number",
        0,
        i64::MAX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contest_id_accepts_test_and_valid_uuid() {
        assert!(test_contest_id("test"));
        assert!(test_contest_id("12345678-1234-4321-abcd-1234567890ab"));
    }

    #[test]
    fn contest_id_rejects_wrong_version_nibble() {
        assert!(!test_contest_id("12345678-1234-3321-abcd-1234567890ab"));
    }

    #[test]
    fn contest_id_rejects_wrong_variant_nibble() {
        assert!(!test_contest_id("12345678-1234-4321-7bcd-1234567890ab"));
        assert!(test_contest_id("12345678-1234-4321-9bcd-1234567890ab"));
    }

    #[test]
    fn contest_id_rejects_uppercase_and_bad_shape() {
        assert!(!test_contest_id("12345678-1234-4321-ABCD-1234567890AB"));
        assert!(!test_contest_id("12345678123443217bcd1234567890ab"));
        assert!(!test_contest_id("Test"));
    }

    #[test]
    fn title_policy() {
        assert!(test_title("t"));
        assert!(test_title("prog_2+fun-1"));
        assert!(!test_title(""));
        assert!(!test_title("Capital"));
        assert!(!test_title("_leading"));
        assert!(!test_title(&"x".repeat(MAX_TITLE_LEN + 1)));
        assert!(test_title(&"x".repeat(MAX_TITLE_LEN)));
    }

    #[test]
    fn basename_policy() {
        assert!(is_portable_basename("prog.c"));
        assert!(is_portable_basename("Makefile"));
        assert!(is_portable_basename("a+b_c-d.e"));
        assert!(!is_portable_basename(".hidden"));
        assert!(!is_portable_basename("-dash"));
        assert!(!is_portable_basename("+plus"));
        assert!(!is_portable_basename("dir/file"));
        assert!(!is_portable_basename(""));
        assert!(!is_portable_basename(&"x".repeat(MAX_BASENAME_LEN + 1)));
    }

    #[test]
    fn tarball_policy() {
        assert!(test_tarball("entry.test-0.1652598487.txz"));
        assert!(!test_tarball("entry.test-0.1652598487.tgz"));
        assert!(!test_tarball("other.txz"));
    }

    #[test]
    fn formed_utc_accepts_asctime_utc() {
        assert!(test_formed_utc("Thu Jan 1 00:00:00 1970 UTC"));
        assert!(test_formed_utc("Thu Jan  1 00:00:00 1970 UTC"));
        assert!(test_formed_utc("Thu Jan 01 00:00:00 1970 UTC"));
        assert!(test_formed_utc("Sun May 15 06:28:07 2022 UTC"));
    }

    #[test]
    fn formed_utc_rejects_wrong_weekday_or_shape() {
        assert!(!test_formed_utc("Fri Jan 1 00:00:00 1970 UTC"));
        assert!(!test_formed_utc("Thu Jan 1 00:00:00 1970"));
        assert!(!test_formed_utc("Thu Jan 1 00:00:00 1970 GMT"));
        assert!(!test_formed_utc("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn contact_policies() {
        assert!(test_email(""));
        assert!(test_email("a@b.c"));
        assert!(!test_email("a@b@c"));
        assert!(!test_email("@b"));
        assert!(test_url("https://example.com/x"));
        assert!(!test_url("ftp://example.com"));
        assert!(test_twitter("@handle_1"));
        assert!(!test_twitter("handle"));
        assert!(!test_twitter("@"));
        assert!(test_github("@octo-cat"));
        assert!(!test_github("@under_score"));
        assert!(test_author_handle("xexyl"));
        assert!(!test_author_handle(".dot"));
    }

    #[test]
    fn location_code_policy() {
        assert!(test_location_code("US"));
        assert!(!test_location_code("us"));
        assert!(!test_location_code("USA"));
    }
}

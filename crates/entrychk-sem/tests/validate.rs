//! End-to-end validation scenarios against complete documents.

use entrychk_json::parse_json;
use entrychk_sem::{validate_with, IgnoreSet, AUTHOR_SCHEMA, INFO_SCHEMA};
use entrychk_types::{codes, version};
use serde_json::{json, Value};

fn common_members() -> Value {
    json!({
        "no_comment": version::NO_COMMENT,
        "IOCCC_contest_id": "test",
        "year": 2022,
        "mkiocccentry_version": version::MKIOCCCENTRY_VERSION,
        "chkentry_version": version::ENTRYCHK_VERSION,
        "fnamchk_version": version::FNAMCHK_VERSION,
        "txzchk_version": version::TXZCHK_VERSION,
        "entry_num": 0,
        "tarball": "entry.test-0.1652598487.txz",
        "test_mode": true,
        "formed_timestamp": version::MIN_TIMESTAMP,
        "formed_timestamp_usec": 12345,
        "timestamp_epoch": version::TIMESTAMP_EPOCH,
        "min_timestamp": version::MIN_TIMESTAMP,
        "formed_UTC": "Sun May 15 07:08:07 2022 UTC",
    })
}

fn info_doc() -> Value {
    let mut doc = common_members();
    let map = doc.as_object_mut().unwrap();
    map.insert("IOCCC_info_version".into(), json!(version::INFO_VERSION));
    map.insert(
        "iocccsize_version".into(),
        json!(version::IOCCCSIZE_VERSION),
    );
    map.insert("title".into(), json!("t"));
    map.insert("abstract".into(), json!("a"));
    map.insert("rule_2a_size".into(), json!(2));
    map.insert("rule_2b_size".into(), json!(2));
    map.insert(
        "manifest".into(),
        json!([
            {"info_JSON": "info.json"},
            {"author_JSON": "author.json"},
            {"c_src": "prog.c"},
            {"Makefile": "Makefile"},
            {"remarks": "remarks.md"},
        ]),
    );
    doc
}

fn author(name: &str, number: i64) -> Value {
    json!({
        "name": name,
        "location_code": "US",
        "email": "",
        "url": "",
        "twitter": "",
        "github": "",
        "affiliation": "",
        "past_winner": false,
        "default_handle": true,
        "author_handle": name,
        "author_number": number,
    })
}

fn author_doc() -> Value {
    let mut doc = common_members();
    let map = doc.as_object_mut().unwrap();
    map.insert(
        "IOCCC_author_version".into(),
        json!(version::AUTHOR_VERSION),
    );
    map.insert("author_count".into(), json!(2));
    map.insert("authors".into(), json!([author("alice", 0), author("bob", 1)]));
    doc
}

fn validate_info(doc: &Value) -> Vec<entrychk_types::ValidationError> {
    let tree = parse_json(doc.to_string().as_bytes()).expect("fixture parses");
    validate_with(&tree, &INFO_SCHEMA, &IgnoreSet::new())
}

fn validate_author(doc: &Value) -> Vec<entrychk_types::ValidationError> {
    let tree = parse_json(doc.to_string().as_bytes()).expect("fixture parses");
    validate_with(&tree, &AUTHOR_SCHEMA, &IgnoreSet::new())
}

#[test]
fn minimal_info_document_validates_clean() {
    let errors = validate_info(&info_doc());
    assert!(errors.is_empty(), "unexpected: {errors:?}");
}

#[test]
fn minimal_author_document_validates_clean() {
    let errors = validate_author(&author_doc());
    assert!(errors.is_empty(), "unexpected: {errors:?}");
}

#[test]
fn uuid_contest_id_accepts_then_rejects_mutated_version_nibble() {
    let mut doc = info_doc();
    doc["IOCCC_contest_id"] = json!("12345678-1234-4321-abcd-1234567890ab");
    assert!(validate_info(&doc).is_empty());

    // version nibble 4 -> 3 must reject with the UUID code
    doc["IOCCC_contest_id"] = json!("12345678-1234-3321-abcd-1234567890ab");
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::BAD_CONTEST_ID);
}

#[test]
fn author_count_mismatch_is_one_error() {
    let mut doc = author_doc();
    doc["authors"] = json!([author("a", 0), author("b", 1), author("c", 2)]);
    let errors = validate_author(&doc);
    assert_eq!(errors.len(), 1, "got: {errors:?}");
    assert_eq!(errors[0].code, codes::AUTHOR_COUNT_MISMATCH);
    assert!(errors[0].message.contains("author count 2 != array length 3"));
}

#[test]
fn duplicate_author_names_are_rejected() {
    let mut doc = author_doc();
    doc["authors"] = json!([author("same", 0), author("same", 1)]);
    let errors = validate_author(&doc);
    assert!(errors.iter().any(|e| e.code == codes::AUTHOR_SET_INVALID));
}

#[test]
fn repeated_author_numbers_are_rejected() {
    let mut doc = author_doc();
    doc["authors"] = json!([author("a", 1), author("b", 1)]);
    let errors = validate_author(&doc);
    assert!(errors.iter().any(|e| e.code == codes::BAD_AUTHOR_NUMBER));
}

#[test]
fn manifest_duplicate_makefile_errors_duplicate_extra_file_does_not() {
    let mut doc = info_doc();
    doc["manifest"] = json!([
        {"info_JSON": "info.json"},
        {"author_JSON": "author.json"},
        {"c_src": "prog.c"},
        {"Makefile": "Makefile"},
        {"Makefile": "Makefile2"},
        {"remarks": "remarks.md"},
    ]);
    let errors = validate_info(&doc);
    assert!(errors.iter().any(|e| e.code == codes::MANIFEST_DUP_KEY));

    doc["manifest"] = json!([
        {"info_JSON": "info.json"},
        {"author_JSON": "author.json"},
        {"c_src": "prog.c"},
        {"Makefile": "Makefile"},
        {"remarks": "remarks.md"},
        {"extra_file": "bonus.txt"},
        {"extra_file": "more.txt"},
    ]);
    let errors = validate_info(&doc);
    assert!(errors.is_empty(), "unexpected: {errors:?}");
}

#[test]
fn manifest_duplicate_filename_is_rejected() {
    let mut doc = info_doc();
    doc["manifest"] = json!([
        {"info_JSON": "info.json"},
        {"author_JSON": "author.json"},
        {"c_src": "prog.c"},
        {"Makefile": "Makefile"},
        {"remarks": "remarks.md"},
        {"extra_file": "prog.c"},
    ]);
    let errors = validate_info(&doc);
    assert!(errors.iter().any(|e| e.code == codes::MANIFEST_DUP_FILENAME));
}

#[test]
fn manifest_filename_policy_is_enforced() {
    let mut doc = info_doc();
    doc["manifest"] = json!([
        {"info_JSON": "info.json"},
        {"author_JSON": "author.json"},
        {"c_src": "prog.c"},
        {"Makefile": "Makefile"},
        {"remarks": "remarks.md"},
        {"extra_file": ".hidden"},
    ]);
    let errors = validate_info(&doc);
    assert!(errors.iter().any(|e| e.code == codes::BAD_FILENAME));
}

#[test]
fn unknown_member_is_reported() {
    let mut doc = info_doc();
    doc["bogus_member"] = json!(1);
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::UNKNOWN_MEMBER);
}

#[test]
fn missing_required_member_is_reported() {
    let mut doc = info_doc();
    doc.as_object_mut().unwrap().remove("title");
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::MISSING_REQUIRED);
    assert!(errors[0].message.contains("title"));
}

#[test]
fn type_mismatch_is_reported() {
    let mut doc = info_doc();
    doc["title"] = json!(42);
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::TYPE_MISMATCH);
}

#[test]
fn wrong_version_string_is_reported() {
    let mut doc = info_doc();
    doc["IOCCC_info_version"] = json!("0.0 1999-01-01");
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::BAD_INFO_VERSION);
}

#[test]
fn stale_formed_timestamp_is_reported() {
    let mut doc = info_doc();
    doc["formed_timestamp"] = json!(version::MIN_TIMESTAMP - 1);
    let errors = validate_info(&doc);
    assert!(errors.iter().any(|e| e.code == codes::TIMESTAMP_TOO_OLD));
}

#[test]
fn bad_formed_utc_is_reported() {
    let mut doc = info_doc();
    doc["formed_UTC"] = json!("Mon May 15 07:08:07 2022 UTC");
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::BAD_FORMED_UTC);
}

#[test]
fn validator_is_idempotent() {
    let mut doc = info_doc();
    doc["title"] = json!("UPPER");
    doc["abstract"] = json!("");
    let first = validate_info(&doc);
    let second = validate_info(&doc);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn ignored_codes_vanish_from_output() {
    let mut doc = info_doc();
    doc["title"] = json!("UPPER");
    let tree = parse_json(doc.to_string().as_bytes()).unwrap();

    let errors = validate_with(&tree, &INFO_SCHEMA, &IgnoreSet::new());
    assert!(errors.iter().any(|e| e.code == codes::BAD_TITLE));

    let mut ignores = IgnoreSet::new();
    ignores.ignore(codes::BAD_TITLE);
    let errors = validate_with(&tree, &INFO_SCHEMA, &ignores);
    assert!(errors.iter().all(|e| e.code != codes::BAD_TITLE));
}

#[test]
fn non_object_root_is_rejected() {
    let tree = parse_json(b"[1,2,3]").unwrap();
    let errors = validate_with(&tree, &INFO_SCHEMA, &IgnoreSet::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::ROOT_NOT_OBJECT);
}

#[test]
fn empty_title_is_rejected_before_the_predicate() {
    let mut doc = info_doc();
    doc["title"] = json!("");
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::EMPTY_VALUE);
}

#[test]
fn duplicate_member_beyond_max_count_is_reported() {
    // serde_json collapses duplicate keys, so build the text by hand.
    let doc = info_doc();
    let text = doc.to_string();
    let with_dup = text.replacen(
        "\"title\":\"t\"",
        "\"title\":\"t\",\"title\":\"t\"",
        1,
    );
    let tree = parse_json(with_dup.as_bytes()).unwrap();
    let errors = validate_with(&tree, &INFO_SCHEMA, &IgnoreSet::new());
    assert!(errors.iter().any(|e| e.code == codes::DUPLICATE_MEMBER));
}

#[test]
fn float_rule_size_is_a_type_mismatch() {
    let mut doc = info_doc();
    doc["rule_2a_size"] = json!(2.5);
    let errors = validate_info(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, codes::TYPE_MISMATCH);
}

#[test]
fn author_element_policies_reject_bad_values() {
    let mut doc = author_doc();
    let mut bad = author("alice", 0);
    bad["location_code"] = json!("usa");
    bad["email"] = json!("not-an-email");
    bad["url"] = json!("gopher://old.net");
    doc["authors"] = json!([bad, author("bob", 1)]);
    let errors = validate_author(&doc);
    let codes_seen: Vec<i32> = errors.iter().map(|e| e.code).collect();
    assert!(codes_seen.contains(&codes::BAD_LOCATION_CODE));
    assert!(codes_seen.contains(&codes::BAD_EMAIL));
    assert!(codes_seen.contains(&codes::BAD_URL));
}

#[test]
fn null_optional_strings_are_accepted() {
    let mut doc = author_doc();
    let mut a = author("alice", 0);
    a["email"] = json!(null);
    a["url"] = json!(null);
    a["affiliation"] = json!(null);
    doc["authors"] = json!([a, author("bob", 1)]);
    let errors = validate_author(&doc);
    assert!(errors.is_empty(), "unexpected: {errors:?}");
}

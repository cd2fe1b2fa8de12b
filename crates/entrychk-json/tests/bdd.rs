//! Behavior tests for the JSON engine, given/when/then style.

use entrychk_json::{parse_json, NodeKind};

#[test]
fn given_info_like_document_when_parsed_then_members_keep_textual_order() {
    // Given: a document with members in a deliberate order
    let src = br#"{"no_comment":"x","year":2024,"title":"prog"}"#;

    // When: parsed
    let tree = parse_json(src).unwrap();

    // Then: member order is textual, not sorted
    let names: Vec<_> = tree
        .members(tree.root())
        .iter()
        .map(|&m| tree.member_name(m).unwrap().to_string())
        .collect();
    assert_eq!(names, ["no_comment", "year", "title"]);
}

#[test]
fn given_number_member_when_parsed_then_width_probing_is_attached() {
    // Given: a negative 32-bit boundary literal
    let tree = parse_json(br#"{"n":-2147483648}"#).unwrap();

    // When: the number node is located
    let member = tree.members(tree.root())[0];
    let value = tree.member_value(member).unwrap();

    // Then: the numeric record carries the width probe results
    let NodeKind::Number(record) = &tree.node(value).kind else {
        panic!("expected a number node");
    };
    assert!(record.int32.fits);
    assert_eq!(record.int32.value, i32::MIN);
    assert!(!record.uint32.fits);
    assert!(tree.node(value).converted);
}

#[test]
fn given_lone_surrogate_when_parsed_then_node_is_marked_unconverted() {
    // Given: a string with a lone high surrogate (escape syntax is valid)
    let tree = parse_json(br#"{"s":"\ud800"}"#).unwrap();

    // When: the string node is located
    let member = tree.members(tree.root())[0];
    let value = tree.member_value(member).unwrap();

    // Then: parsing succeeded but the node failed conversion
    assert!(!tree.node(value).converted);
}

#[test]
fn given_tree_when_serialized_then_output_is_stable() {
    let tree = parse_json(br#"{ "a" : [ 1 , true , null ] , "s" : "x<y" }"#).unwrap();
    // '<' is emitted through the embedding-safe escape table.
    insta::assert_snapshot!(
        tree.to_json_string(),
        @r#"{"a":[1,true,null],"s":"x\u003cy"}"#
    );
}

#[test]
fn given_sibling_members_when_looked_up_then_first_textual_match_wins() {
    let tree = parse_json(br#"{"author_count":2,"authors":[]}"#).unwrap();
    let root = tree.root();
    let found = tree.find_member(root, "author_count").unwrap();
    assert_eq!(tree.member_name(found), Some("author_count"));
    assert!(tree.find_member(root, "missing").is_none());
}

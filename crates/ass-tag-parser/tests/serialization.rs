//! JSON representation of parsed items
#![cfg(feature = "serde")]

use ass_tag_parser::{compose, parse, Item};
use pretty_assertions::assert_eq;

#[test]
fn items_survive_json() {
    let line = r"{\an5\1c&H0000FF&\t(0,500,\fscx120)\clip(1,m 0 0 l 5 5)}Hi{\p1}m 0 0 b 1 1 2 2 3 3{\p0}";
    let items = parse(line).unwrap();
    let json = serde_json::to_string(&items).unwrap();
    let back: Vec<Item> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, items);
    assert_eq!(compose(&back), line);
}

#[test]
fn text_items_serialize_as_tagged_strings() {
    let json = serde_json::to_value(parse("plain").unwrap()).unwrap();
    assert_eq!(json, serde_json::json!([{ "Text": "plain" }]));
}

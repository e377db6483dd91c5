#![cfg(feature = "serde")]

// Element trees can be loaded from JSON fixtures.

use assert_element::{Element, PropValue, expect};

#[test]
fn deserializes_a_descriptor_tree() {
    let view: Element = serde_json::from_str(
        r#"{
            "kind": "div",
            "props": {
                "className": "header",
                "children": [
                    { "kind": "span", "props": { "children": "hi" } },
                    "tail"
                ]
            }
        }"#,
    )
    .unwrap();

    expect(&view).prop_value("className", "header");
    expect(&view).containing().element_of_type("span");
    expect(&view).containing().text("hi");
    expect(&view).text("tail");
}

#[test]
fn null_means_an_undefined_value() {
    let view: Element =
        serde_json::from_str(r#"{ "kind": "input", "props": { "value": null } }"#).unwrap();

    expect(&view).prop_value("value", PropValue::Undefined);
}

#[test]
fn legacy_store_fixtures_deserialize() {
    let view: Element = serde_json::from_str(
        r#"{ "kind": "a", "store": { "props": { "href": "/legacy" } } }"#,
    )
    .unwrap();

    expect(&view).prop_value("href", "/legacy");
}

#[test]
fn serializes_back_to_the_same_shape() {
    let view = Element::new("td").prop("colspan", 2).child("cell");

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "td",
            "props": { "colspan": 2.0, "children": "cell" }
        })
    );

    let back: Element = serde_json::from_value(value).unwrap();
    assert_eq!(back, view);
}

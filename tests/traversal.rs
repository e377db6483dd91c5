use assert_element::{Element, PropValue, Subject};
use assert_element::walk::candidates;

fn kinds(subject: &Subject<'_>, deep: bool) -> Vec<String> {
    candidates(subject, deep)
        .iter()
        .map(|element| element.kind.clone())
        .collect()
}

#[test]
fn shallow_coercion_to_a_list() {
    let single = Element::new("div");
    assert_eq!(kinds(&Subject::from(&single), false), ["div"]);

    let list = vec![Element::new("a"), Element::new("b")];
    assert_eq!(kinds(&Subject::from(&list), false), ["a", "b"]);

    assert!(candidates(&Subject::Undefined, false).is_empty());
    assert!(candidates(&Subject::Undefined, true).is_empty());
}

#[test]
fn nested_lists_flatten_in_order() {
    // children: [A, [B, C]] must produce root, A, B, C in that order.
    let root = Element::new("root")
        .child(Element::new("A"))
        .child(PropValue::from(vec![Element::new("B"), Element::new("C")]));

    assert_eq!(
        kinds(&Subject::from(&root), true),
        ["root", "A", "B", "C"]
    );
}

#[test]
fn parent_precedes_children_at_every_depth() {
    let root = Element::new("a").child(
        Element::new("b").child(Element::new("c").child(Element::new("d"))),
    );

    assert_eq!(kinds(&Subject::from(&root), true), ["a", "b", "c", "d"]);
}

#[test]
fn each_node_is_visited_exactly_once_for_list_subjects() {
    let list = vec![
        Element::new("x").child(Element::new("x1")),
        Element::new("y"),
    ];

    assert_eq!(kinds(&Subject::from(&list), true), ["x", "x1", "y"]);
}

#[test]
fn strings_and_undefined_entries_are_passed_over() {
    let root = Element::new("p")
        .child("text")
        .child(PropValue::Undefined)
        .child(Element::new("em"));

    assert_eq!(kinds(&Subject::from(&root), true), ["p", "em"]);
}

#[test]
fn a_node_without_props_terminates_its_branch() {
    let root = Element::new("div")
        .child(Element::new("hr"))
        .child(Element::new("span").child("tail"));

    assert_eq!(kinds(&Subject::from(&root), true), ["div", "hr", "span"]);
}

#[test]
fn traversal_is_stable_across_calls() {
    let root = Element::new("root")
        .child(Element::new("a"))
        .child(Element::new("b").child(Element::new("c")));
    let subject = Subject::from(&root);

    assert_eq!(kinds(&subject, true), kinds(&subject, true));
    assert_eq!(kinds(&subject, false), kinds(&subject, false));
}

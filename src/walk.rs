//! Flattening a subject into the ordered candidate set.
//!
//! Every matcher evaluates its condition over a linearized view of the
//! subject. Without the deep flag that view is just the subject coerced to a
//! list; with it, a full depth-first traversal of the tree through the
//! `children` property.

use crate::assert::Subject;
use crate::element::{Element, PropValue};

/// Produces the candidate set for one matcher invocation.
///
/// Shallow (`deep == false`): the subject coerced to a list; a single node
/// becomes a one-element list, a list is used as-is, an undefined subject
/// becomes an empty list. Non-element list members contribute nothing.
///
/// Deep: a depth-first traversal visiting every node reachable through the
/// primary `props.children` property, parent before children, preserving the
/// order children appear in their lists. Strings are not expanded; undefined
/// entries are skipped; a node without `props` (or whose `props` lacks
/// `children`) is a leaf.
pub fn candidates<'a>(subject: &Subject<'a>, deep: bool) -> Vec<&'a Element> {
    let mut out = Vec::new();
    match subject {
        Subject::Undefined => {}
        Subject::Node(element) => visit_element(element, deep, &mut out),
        Subject::Nodes(elements) => {
            for element in elements {
                visit_element(element, deep, &mut out);
            }
        }
        Subject::Value(value) => visit_value(value, deep, &mut out),
    }
    out
}

fn visit_value<'a>(value: &'a PropValue, deep: bool, out: &mut Vec<&'a Element>) {
    match value {
        PropValue::Node(element) => visit_element(element, deep, out),
        PropValue::List(items) => {
            for item in items {
                // Top-level list members are candidates; below the top
                // level this only happens in deep mode, where nested lists
                // flatten into the same ordering.
                visit_value(item, deep, out);
            }
        }
        // Strings and other scalars are never candidates.
        _ => {}
    }
}

fn visit_element<'a>(element: &'a Element, deep: bool, out: &mut Vec<&'a Element>) {
    out.push(element);
    if !deep {
        return;
    }
    if let Some(children) = element.children() {
        visit_value(children, true, out);
    }
}

//! Rendering subjects back into source-like text for failure messages.
//!
//! A failure message quotes the subject under test. How an element is turned
//! into text is a pluggable concern ([`Decompile`] is the seam) with a
//! JSX-style default. Pretty-printing has no control-flow role: it runs only
//! when a message is being built, and a panicking decompiler propagates.

use crate::assert::Subject;
use crate::element::{CHILDREN, Element, PropValue, resolve_props};

/// Turns one element into a source-like string for failure messages.
pub trait Decompile: Send + Sync {
    fn decompile(&self, element: &Element) -> String;
}

/// The default decompiler: JSX-style markup.
///
/// String attributes render quoted, everything else in braces; children
/// render between open and close tags, strings bare. An element without
/// children self-closes.
///
/// ```
/// use assert_element::{Element, JsxDecompiler, Decompile};
///
/// let element = Element::new("div")
///     .prop("className", "header")
///     .child(Element::new("span").child("hi"));
/// assert_eq!(
///     JsxDecompiler.decompile(&element),
///     r#"<div className="header"><span>hi</span></div>"#
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct JsxDecompiler;

impl Decompile for JsxDecompiler {
    fn decompile(&self, element: &Element) -> String {
        jsx(element)
    }
}

/// JSX-style rendering of a single element.
pub fn jsx(element: &Element) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&element.kind);

    let props = resolve_props(element);
    if let Some(props) = props {
        for (name, value) in props {
            if name == CHILDREN {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push('=');
            match value {
                PropValue::Text(s) => {
                    out.push('"');
                    out.push_str(s);
                    out.push('"');
                }
                other => {
                    out.push('{');
                    out.push_str(&other.to_string());
                    out.push('}');
                }
            }
        }
    }

    match props.and_then(|props| props.get(CHILDREN)) {
        None | Some(PropValue::Undefined) => out.push_str(" />"),
        Some(children) => {
            out.push('>');
            render_children(children, &mut out);
            out.push_str("</");
            out.push_str(&element.kind);
            out.push('>');
        }
    }
    out
}

fn render_children(value: &PropValue, out: &mut String) {
    match value {
        PropValue::Undefined => {}
        PropValue::Node(element) => out.push_str(&jsx(element)),
        PropValue::List(items) => {
            for item in items {
                render_children(item, out);
            }
        }
        PropValue::Text(s) => out.push_str(s),
        other => out.push_str(&other.to_string()),
    }
}

/// Renders an assertion subject for a failure message: each top-level member
/// decompiled, joined with `", "`. An undefined subject reads `undefined`.
pub fn pretty_print(subject: &Subject<'_>, decompiler: &dyn Decompile) -> String {
    match subject {
        Subject::Undefined => "undefined".to_string(),
        Subject::Node(element) => decompiler.decompile(element),
        Subject::Nodes(elements) => elements
            .iter()
            .map(|element| decompiler.decompile(element))
            .collect::<Vec<_>>()
            .join(", "),
        Subject::Value(value) => pretty_value(value, decompiler),
    }
}

fn pretty_value(value: &PropValue, decompiler: &dyn Decompile) -> String {
    match value {
        PropValue::Node(element) => decompiler.decompile(element),
        PropValue::List(items) => items
            .iter()
            .map(|item| pretty_value(item, decompiler))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

//! The element data model read by the matchers.
//!
//! An [`Element`] is one node of a UI description tree: a type tag (`kind`)
//! plus a properties map. The reserved `children` property holds nested
//! content: a node, a string, or a mixed list of both. Elements are normally
//! produced by whatever layer renders your UI into a descriptor tree; the
//! builder methods here exist so tests can construct fixtures directly.
//!
//! Older descriptor formats nest the properties map one level deeper, under a
//! `store` field. Property lookup probes both locations; see
//! [`resolve_props`].

use std::fmt;

use indexmap::IndexMap;

/// The reserved property under which an element stores its nested content.
pub const CHILDREN: &str = "children";

/// An insertion-ordered property map.
pub type Props = IndexMap<String, PropValue>;

/// One node of a UI description tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// The element's type tag, e.g. `"div"` or a component name.
    pub kind: String,
    /// The primary property location.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub props: Option<Props>,
    /// The legacy property location (`store.props`).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub store: Option<Store>,
}

/// The legacy nesting level: properties stored under a `store` field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    pub props: Props,
}

/// A dynamically-typed property value.
///
/// Covers the value universe element descriptors actually carry: scalars,
/// nested elements, and mixed lists. Equality is structural, which gives the
/// strict-equality semantics the `prop` matcher needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropValue {
    /// An absent value. Distinct from the property not existing at all:
    /// a property can be present with an undefined value.
    Undefined,
    Bool(bool),
    Number(f64),
    Text(String),
    Node(Box<Element>),
    List(Vec<PropValue>),
}

impl Element {
    /// Creates an element with the given type tag and no properties.
    pub fn new(kind: impl Into<String>) -> Self {
        Element {
            kind: kind.into(),
            props: None,
            store: None,
        }
    }

    /// Sets a property in the primary location.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(name.into(), value.into());
        self
    }

    /// Sets a property in the legacy `store.props` location.
    pub fn store_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.store
            .get_or_insert_with(|| Store {
                props: Props::new(),
            })
            .props
            .insert(name.into(), value.into());
        self
    }

    /// Appends nested content to the `children` property.
    ///
    /// A first child is stored bare; a second promotes the value to a list,
    /// matching how descriptor trees are written by hand.
    pub fn child(mut self, child: impl Into<PropValue>) -> Self {
        let props = self.props.get_or_insert_with(Props::new);
        let child = child.into();
        match props.shift_remove(CHILDREN) {
            None => {
                props.insert(CHILDREN.to_string(), child);
            }
            Some(PropValue::List(mut items)) => {
                items.push(child);
                props.insert(CHILDREN.to_string(), PropValue::List(items));
            }
            Some(existing) => {
                props.insert(CHILDREN.to_string(), PropValue::List(vec![existing, child]));
            }
        }
        self
    }

    /// The `children` value from the primary property location, if any.
    pub fn children(&self) -> Option<&PropValue> {
        self.props.as_ref()?.get(CHILDREN)
    }
}

/// One strategy for locating an element's property map.
type PropSource = for<'a> fn(&'a Element) -> Option<&'a Props>;

fn primary(element: &Element) -> Option<&Props> {
    element.props.as_ref()
}

fn legacy_store(element: &Element) -> Option<&Props> {
    element.store.as_ref().map(|store| &store.props)
}

/// Probed in order; the first location that exists wins. An existing primary
/// map shadows the legacy one even for names it does not contain.
const PROP_SOURCES: [PropSource; 2] = [primary, legacy_store];

/// Resolves the property map of an element, probing the primary location
/// first and the legacy `store.props` location second.
pub fn resolve_props(element: &Element) -> Option<&Props> {
    PROP_SOURCES.iter().find_map(|source| source(element))
}

/// Whether the element has a property named `name` in its resolved map.
pub fn has_prop(element: &Element, name: &str) -> bool {
    resolve_props(element).is_some_and(|props| props.contains_key(name))
}

/// The value of the property named `name`, if the element has one.
pub fn prop_value<'a>(element: &'a Element, name: &str) -> Option<&'a PropValue> {
    resolve_props(element)?.get(name)
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<Element> for PropValue {
    fn from(value: Element) -> Self {
        PropValue::Node(Box::new(value))
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for PropValue {
    /// Renders the value the way it reads in a failure message: strings bare,
    /// numbers without a trailing `.0`, elements in their decompiled form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Undefined => write!(f, "undefined"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Number(n) => write!(f, "{n}"),
            PropValue::Text(s) => write!(f, "{s}"),
            PropValue::Node(element) => write!(f, "{}", crate::decompile::jsx(element)),
            PropValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

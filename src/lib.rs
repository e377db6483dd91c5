//! # assert-element: Fluent Assertions for Element Trees
//!
//! `assert-element` adds assertion matchers for tree-structured UI element
//! descriptors (virtual-DOM-like nodes) to your tests. It lets you assert
//! that a tree contains an element of a given type, an element carrying a
//! given property (optionally with a specific value), or an element whose
//! rendered text equals a given string, with optional recursive descent into
//! children. Failures report a pretty-printed, JSX-style rendering of the
//! subject.
//!
//! # Table of Contents
//!
//! - [Quick Start](#quick-start)
//! - [Elements](#elements)
//! - [Matchers](#matchers)
//!   - [`element_of_type`](#element_of_type)
//!   - [`prop`](#prop)
//!   - [`text`](#text)
//! - [Deep Traversal](#deep-traversal)
//! - [Negation](#negation)
//! - [Chaining](#chaining)
//! - [Hosting the Matchers](#hosting-the-matchers)
//!
//! # Quick Start
//!
//! ```rust
//! use assert_element::{expect, Element};
//!
//! let view = Element::new("div")
//!     .prop("className", "greeting")
//!     .child(Element::new("span").child("hello"));
//!
//! expect(&view).prop_value("className", "greeting");
//! expect(&view).containing().element_of_type("span");
//! expect(&view).containing().text("hello");
//! ```
//!
//! # Elements
//!
//! An [`Element`] is one node of a description tree: a type tag (`kind`) and
//! a property map. The reserved `children` property holds nested content: a
//! node, a string, or a mixed list. The builder API constructs fixtures:
//!
//! ```rust
//! use assert_element::Element;
//!
//! let menu = Element::new("ul")
//!     .prop("id", "menu")
//!     .child(Element::new("li").child("home"))
//!     .child(Element::new("li").child("about"));
//! ```
//!
//! Property values are dynamically typed ([`PropValue`]): strings, numbers,
//! booleans, nested elements, lists, and an explicit `Undefined`. Older
//! descriptor formats that nest the property map under a `store` field are
//! read transparently: lookup probes the primary location first and the
//! legacy one second.
//!
//! With the `serde` feature (on by default) elements round-trip through
//! serde, so fixtures can live in JSON files.
//!
//! # Matchers
//!
//! ## `element_of_type`
//!
//! Passes when some candidate's type tag equals the argument exactly:
//!
//! ```rust
//! # use assert_element::{expect, Element};
//! let view = Element::new("div").child("hi");
//! expect(&view).element_of_type("div");
//! ```
//!
//! ## `prop`
//!
//! Passes when some candidate has the named property, in either property
//! location. [`Expect::prop_value`] additionally requires some holder to
//! carry exactly the given value. Asking for an `Undefined` value is
//! still asking for a value:
//!
//! ```rust
//! # use assert_element::{expect, Element, PropValue};
//! let link = Element::new("a").prop("href", "/home").prop("target", PropValue::Undefined);
//! expect(&link).prop("href");
//! expect(&link).prop_value("href", "/home");
//! expect(&link).prop_value("target", PropValue::Undefined);
//! ```
//!
//! ## `text`
//!
//! Passes when some candidate's `children` equals the argument, or is a list
//! containing it as a member (equality, not substring):
//!
//! ```rust
//! # use assert_element::{expect, Element};
//! let para = Element::new("p").child("one").child("two");
//! expect(&para).text("two");
//! ```
//!
//! A malformed candidate (one with no property map at all) simply does not match;
//! no matcher ever errors on one.
//!
//! # Deep Traversal
//!
//! By default a matcher looks only at the top-level subject (a node, or the
//! members of a list). [`Expect::containing`] switches to a depth-first
//! flattening of the whole tree, parent before children, preserving child
//! order:
//!
//! ```rust
//! # use assert_element::{expect, Element};
//! let view = Element::new("div")
//!     .child(Element::new("ul").child(Element::new("li").child("deep")));
//!
//! expect(&view).containing().element_of_type("li");
//! expect(&view).containing().text("deep");
//! ```
//!
//! # Negation
//!
//! [`Expect::not`] inverts the outcome and reports the negated message:
//!
//! ```rust
//! # use assert_element::{expect, Element};
//! let view = Element::new("div").child("hi");
//! expect(&view).not().element_of_type("span");
//! ```
//!
//! ```rust,should_panic
//! # use assert_element::{expect, Element};
//! let view = Element::new("div").child("hi");
//! // panics: expected <div>hi</div> not to have an element of type 'div'
//! expect(&view).not().element_of_type("div");
//! ```
//!
//! # Chaining
//!
//! `prop` and `element_of_type` chain over the candidates that satisfied
//! them, so follow-up assertions narrow in:
//!
//! ```rust
//! # use assert_element::{expect, Element};
//! let view = Element::new("form")
//!     .child(Element::new("input").prop("name", "email"))
//!     .child(Element::new("input").prop("name", "password"));
//!
//! expect(&view)
//!     .containing()
//!     .element_of_type("input")
//!     .prop_value("name", "email");
//! ```
//!
//! `text` is terminal and produces no chain.
//!
//! # Hosting the Matchers
//!
//! [`expect`] runs against a process-default matcher table. A host embedding
//! these matchers next to its own assertion behavior owns a [`Registry`]
//! instead: [`register`] installs the tree matchers, wrapping whatever was
//! registered before, and returns a [`Registration`] that can restore it.
//! Per call, a [`SubjectPredicate`] decides whether the tree matchers apply;
//! unrecognized subjects are forwarded to the prior implementation with
//! arguments unchanged.
//!
//! ```rust
//! use std::sync::Arc;
//! use assert_element::{
//!     expect_in, register, Element, ElementMatchers, Registry, TreeSubjects,
//! };
//!
//! let mut registry = Registry::new();
//! let registration = register(
//!     &mut registry,
//!     Arc::new(ElementMatchers::default()),
//!     Arc::new(TreeSubjects),
//! );
//!
//! let view = Element::new("div").child("hi");
//! expect_in(&registry, &view).text("hi");
//!
//! registration.restore(&mut registry);
//! ```
//!
//! Failure messages quote the subject through a [`Decompile`] implementation;
//! [`JsxDecompiler`] is the default, and `ElementMatchers::new` accepts a
//! custom one.

pub mod assert;
pub mod decompile;
pub mod element;
pub mod error;
pub mod matchers;
pub mod registry;
pub mod walk;

mod expect;

pub use assert::{Assertion, Subject};
pub use decompile::{Decompile, JsxDecompiler};
pub use element::{CHILDREN, Element, PropValue, Props, Store};
pub use error::AssertionError;
pub use expect::{Expect, expect, expect_in};
pub use matchers::{Dispatch, ElementMatchers, MatcherSet, SubjectPredicate, TreeSubjects};
pub use registry::{MatcherName, Registration, Registry, register};

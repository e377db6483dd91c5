//! The fluent front end.
//!
//! `expect` wraps a subject in an [`Expect`] that runs matchers from a
//! registry: the process-default one, or a host-owned registry via
//! [`expect_in`]. Matcher methods panic with the failure message, the way
//! test assertions do; `try_` variants return the error instead.

use std::fmt;
use std::sync::OnceLock;

use crate::assert::{Assertion, Subject};
use crate::element::PropValue;
use crate::error::AssertionError;
use crate::registry::{MatcherName, Registry};

fn standard_registry() -> &'static Registry {
    static STANDARD: OnceLock<Registry> = OnceLock::new();
    STANDARD.get_or_init(Registry::standard)
}

/// Starts an assertion over `subject` using the default registry.
///
/// ```
/// use assert_element::{expect, Element};
///
/// let tree = Element::new("div").child(Element::new("span").child("hi"));
/// expect(&tree).containing().element_of_type("span");
/// expect(&tree).not().element_of_type("ul");
/// ```
pub fn expect<'a>(subject: impl Into<Subject<'a>>) -> Expect<'a> {
    expect_in(standard_registry(), subject)
}

/// Starts an assertion over `subject` against a host-owned registry.
pub fn expect_in<'a>(registry: &Registry, subject: impl Into<Subject<'a>>) -> Expect<'a> {
    Expect {
        registry: registry.clone(),
        assertion: Assertion::new(subject),
    }
}

/// A fluent assertion in progress.
pub struct Expect<'a> {
    registry: Registry,
    assertion: Assertion<'a>,
}

impl fmt::Debug for Expect<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expect")
            .field("assertion", &self.assertion)
            .finish_non_exhaustive()
    }
}

impl<'a> Expect<'a> {
    /// Inverts the assertion outcome.
    pub fn not(mut self) -> Self {
        self.assertion.negate = true;
        self
    }

    /// Switches on deep traversal: matchers search the whole tree instead
    /// of only the top-level subject.
    pub fn containing(mut self) -> Self {
        self.assertion.contains = true;
        self
    }

    /// The subject this assertion is currently over.
    pub fn subject(&self) -> &Subject<'a> {
        &self.assertion.subject
    }

    /// Asserts that some candidate has a property named `name`; panics with
    /// the failure message otherwise. Chains over the property holders.
    #[track_caller]
    pub fn prop(self, name: &str) -> Expect<'a> {
        unwrap(self.try_prop(name))
    }

    /// Like [`Expect::prop`], additionally requiring some holder to carry
    /// exactly `value`. Passing [`PropValue::Undefined`] still counts as
    /// requesting a value check.
    #[track_caller]
    pub fn prop_value(self, name: &str, value: impl Into<PropValue>) -> Expect<'a> {
        unwrap(self.try_prop_value(name, value))
    }

    /// Asserts that some candidate's rendered text equals `text`; panics
    /// with the failure message otherwise. Terminal.
    #[track_caller]
    pub fn text(self, text: &str) {
        unwrap(self.try_text(text))
    }

    /// Asserts that some candidate's type tag equals `kind`; panics with
    /// the failure message otherwise. Chains over the matching candidates.
    #[track_caller]
    pub fn element_of_type(self, kind: &str) -> Expect<'a> {
        unwrap(self.try_element_of_type(kind))
    }

    pub fn try_prop(self, name: &str) -> Result<Expect<'a>, AssertionError> {
        let chained = self
            .registry
            .get(MatcherName::Prop)
            .prop(&self.assertion, name, None)?;
        Ok(self.chained(chained))
    }

    pub fn try_prop_value(
        self,
        name: &str,
        value: impl Into<PropValue>,
    ) -> Result<Expect<'a>, AssertionError> {
        let value = value.into();
        let chained = self
            .registry
            .get(MatcherName::Prop)
            .prop(&self.assertion, name, Some(&value))?;
        Ok(self.chained(chained))
    }

    pub fn try_text(self, text: &str) -> Result<(), AssertionError> {
        self.registry
            .get(MatcherName::Text)
            .text(&self.assertion, text)
    }

    pub fn try_element_of_type(self, kind: &str) -> Result<Expect<'a>, AssertionError> {
        let chained = self
            .registry
            .get(MatcherName::ElementOfType)
            .element_of_type(&self.assertion, kind)?;
        Ok(self.chained(chained))
    }

    fn chained(self, assertion: Assertion<'a>) -> Expect<'a> {
        Expect {
            registry: self.registry,
            assertion,
        }
    }
}

#[track_caller]
fn unwrap<T>(result: Result<T, AssertionError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

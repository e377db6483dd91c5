//! The matcher set: the three tree matchers, the subject predicate, and the
//! dispatch decorator that lets them coexist with prior matcher behavior.
//!
//! [`MatcherSet`] has one method per matcher name, [`ElementMatchers`] is
//! the tree-aware implementation, and [`Dispatch`] picks between it and the
//! previously registered implementation per call, based on a
//! [`SubjectPredicate`]. No shared table is patched at call time; selection
//! is plain polymorphism.

use std::sync::Arc;

use crate::assert::{Assertion, Subject};
use crate::decompile::{Decompile, JsxDecompiler, pretty_print};
use crate::element::{CHILDREN, Element, PropValue, has_prop, prop_value};
use crate::error::AssertionError;
use crate::registry::MatcherName;
use crate::walk::candidates;

/// One method per matcher name. Implementations either evaluate a condition
/// over the subject or stand in for whatever the host had registered before.
pub trait MatcherSet: Send + Sync {
    /// Asserts that some candidate has a property named `name`; when
    /// `expected` is supplied, additionally that some property-holding
    /// candidate carries exactly that value. Chains over the candidates
    /// that have the property.
    fn prop<'a>(
        &self,
        cx: &Assertion<'a>,
        name: &str,
        expected: Option<&PropValue>,
    ) -> Result<Assertion<'a>, AssertionError>;

    /// Asserts that some candidate's `children` equals `text`, or is a list
    /// containing `text`. Terminal: produces no chain.
    fn text(&self, cx: &Assertion<'_>, text: &str) -> Result<(), AssertionError>;

    /// Asserts that some candidate's type tag equals `kind`. Chains over
    /// the matching candidates.
    fn element_of_type<'a>(
        &self,
        cx: &Assertion<'a>,
        kind: &str,
    ) -> Result<Assertion<'a>, AssertionError>;
}

/// Decides whether the tree matchers apply to a subject at all.
///
/// The recognition rule is a collaborator concern: hosts embedding the
/// matchers next to other assertion behavior supply their own.
pub trait SubjectPredicate: Send + Sync {
    fn recognizes(&self, subject: &Subject<'_>) -> bool;
}

/// The default predicate: an element, a list of elements, or an undefined
/// subject is recognized; anything else falls through to the prior matcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSubjects;

impl SubjectPredicate for TreeSubjects {
    fn recognizes(&self, subject: &Subject<'_>) -> bool {
        match subject {
            Subject::Undefined | Subject::Node(_) | Subject::Nodes(_) => true,
            Subject::Value(value) => match value {
                PropValue::Node(_) => true,
                PropValue::List(items) => {
                    items.iter().all(|item| matches!(item, PropValue::Node(_)))
                }
                _ => false,
            },
        }
    }
}

/// The tree-aware matcher set.
pub struct ElementMatchers {
    decompiler: Box<dyn Decompile>,
}

impl ElementMatchers {
    pub fn new(decompiler: impl Decompile + 'static) -> Self {
        ElementMatchers {
            decompiler: Box::new(decompiler),
        }
    }

    fn subject_text(&self, cx: &Assertion<'_>) -> String {
        pretty_print(&cx.subject, self.decompiler.as_ref())
    }
}

impl Default for ElementMatchers {
    fn default() -> Self {
        ElementMatchers::new(JsxDecompiler)
    }
}

impl MatcherSet for ElementMatchers {
    fn prop<'a>(
        &self,
        cx: &Assertion<'a>,
        name: &str,
        expected: Option<&PropValue>,
    ) -> Result<Assertion<'a>, AssertionError> {
        let holders: Vec<&Element> = candidates(&cx.subject, cx.contains)
            .into_iter()
            .filter(|element| has_prop(element, name))
            .collect();

        let passed = !holders.is_empty()
            && expected.is_none_or(|want| {
                holders
                    .iter()
                    .any(|element| prop_value(element, name) == Some(want))
            });

        let subject = self.subject_text(cx);
        let value_clause = expected
            .map(|value| format!(" and value {value}"))
            .unwrap_or_default();
        cx.check(
            MatcherName::Prop,
            passed,
            format!("expected {subject} to contain a prop with name '{name}'{value_clause}"),
            format!("expected {subject} not to contain a prop with name '{name}'{value_clause}"),
        )?;

        // The chain is filtered by presence only, even when a value was
        // requested.
        Ok(Assertion::chain(holders))
    }

    fn text(&self, cx: &Assertion<'_>, text: &str) -> Result<(), AssertionError> {
        // Only the primary props location can hold rendered text.
        let hit = candidates(&cx.subject, cx.contains)
            .iter()
            .any(
                |element| match element.props.as_ref().and_then(|props| props.get(CHILDREN)) {
                    Some(PropValue::Text(s)) => s == text,
                    Some(PropValue::List(items)) => items
                        .iter()
                        .any(|item| matches!(item, PropValue::Text(s) if s == text)),
                    _ => false,
                },
            );

        let subject = self.subject_text(cx);
        cx.check(
            MatcherName::Text,
            hit,
            format!("expected {subject} to have text '{text}'"),
            format!("expected {subject} not to have text '{text}'"),
        )
    }

    fn element_of_type<'a>(
        &self,
        cx: &Assertion<'a>,
        kind: &str,
    ) -> Result<Assertion<'a>, AssertionError> {
        let hits: Vec<&Element> = candidates(&cx.subject, cx.contains)
            .into_iter()
            .filter(|element| element.kind == kind)
            .collect();

        let subject = self.subject_text(cx);
        cx.check(
            MatcherName::ElementOfType,
            !hits.is_empty(),
            format!("expected {subject} to have an element of type '{kind}'"),
            format!("expected {subject} not to have an element of type '{kind}'"),
        )?;

        Ok(Assertion::chain(hits))
    }
}

/// Per-call selection between the tree matchers and the prior registration.
///
/// Arguments and flags reach the prior implementation unchanged, so an
/// unrecognized subject behaves exactly as if the tree matchers had never
/// been registered.
pub struct Dispatch {
    predicate: Arc<dyn SubjectPredicate>,
    custom: Arc<dyn MatcherSet>,
    prior: Arc<dyn MatcherSet>,
}

impl Dispatch {
    pub fn new(
        predicate: Arc<dyn SubjectPredicate>,
        custom: Arc<dyn MatcherSet>,
        prior: Arc<dyn MatcherSet>,
    ) -> Self {
        Dispatch {
            predicate,
            custom,
            prior,
        }
    }

    fn select(&self, subject: &Subject<'_>) -> &dyn MatcherSet {
        if self.predicate.recognizes(subject) {
            self.custom.as_ref()
        } else {
            self.prior.as_ref()
        }
    }
}

impl MatcherSet for Dispatch {
    fn prop<'a>(
        &self,
        cx: &Assertion<'a>,
        name: &str,
        expected: Option<&PropValue>,
    ) -> Result<Assertion<'a>, AssertionError> {
        self.select(&cx.subject).prop(cx, name, expected)
    }

    fn text(&self, cx: &Assertion<'_>, text: &str) -> Result<(), AssertionError> {
        self.select(&cx.subject).text(cx, text)
    }

    fn element_of_type<'a>(
        &self,
        cx: &Assertion<'a>,
        kind: &str,
    ) -> Result<Assertion<'a>, AssertionError> {
        self.select(&cx.subject).element_of_type(cx, kind)
    }
}

//! The matcher table and explicit registration.
//!
//! The table is a value the host owns, not process-wide state mutated as a
//! load-time side effect: [`register`] is called once by host setup code and
//! hands back a [`Registration`] that can restore the prior entries if
//! teardown is ever needed.

use std::fmt;
use std::sync::Arc;

use crate::assert::Assertion;
use crate::element::PropValue;
use crate::error::AssertionError;
use crate::matchers::{Dispatch, ElementMatchers, MatcherSet, SubjectPredicate, TreeSubjects};

/// The three matcher names this crate registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherName {
    Prop,
    Text,
    ElementOfType,
}

impl MatcherName {
    pub const ALL: [MatcherName; 3] = [
        MatcherName::Prop,
        MatcherName::Text,
        MatcherName::ElementOfType,
    ];
}

impl fmt::Display for MatcherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherName::Prop => write!(f, "prop"),
            MatcherName::Text => write!(f, "text"),
            MatcherName::ElementOfType => write!(f, "element_of_type"),
        }
    }
}

/// The matcher table: one [`MatcherSet`] entry per name.
///
/// A fresh registry holds [`Unregistered`] entries that fail every call,
/// mirroring a host with no such methods. Cloning is cheap; entries are
/// shared.
#[derive(Clone)]
pub struct Registry {
    prop: Arc<dyn MatcherSet>,
    text: Arc<dyn MatcherSet>,
    element_of_type: Arc<dyn MatcherSet>,
}

impl Registry {
    pub fn new() -> Self {
        let none: Arc<dyn MatcherSet> = Arc::new(Unregistered);
        Registry {
            prop: none.clone(),
            text: none.clone(),
            element_of_type: none,
        }
    }

    /// A registry with the tree matchers already registered under the
    /// default predicate and decompiler.
    pub fn standard() -> Self {
        let mut registry = Registry::new();
        let _ = register(
            &mut registry,
            Arc::new(ElementMatchers::default()),
            Arc::new(TreeSubjects),
        );
        registry
    }

    /// The current entry for `name`.
    pub fn get(&self, name: MatcherName) -> &Arc<dyn MatcherSet> {
        match name {
            MatcherName::Prop => &self.prop,
            MatcherName::Text => &self.text,
            MatcherName::ElementOfType => &self.element_of_type,
        }
    }

    /// Replaces the entry for `name` with whatever `factory` builds from the
    /// prior entry. The prior is handed over so the new entry can delegate
    /// to it.
    pub fn overwrite(
        &mut self,
        name: MatcherName,
        factory: impl FnOnce(Arc<dyn MatcherSet>) -> Arc<dyn MatcherSet>,
    ) {
        let slot = match name {
            MatcherName::Prop => &mut self.prop,
            MatcherName::Text => &mut self.text,
            MatcherName::ElementOfType => &mut self.element_of_type,
        };
        *slot = factory(slot.clone());
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

/// Installs the tree matchers into `registry`, wrapping each prior entry in
/// a [`Dispatch`] gated by `predicate`. Returns a handle that can restore
/// the priors.
pub fn register(
    registry: &mut Registry,
    custom: Arc<dyn MatcherSet>,
    predicate: Arc<dyn SubjectPredicate>,
) -> Registration {
    let mut priors = Vec::with_capacity(MatcherName::ALL.len());
    for name in MatcherName::ALL {
        registry.overwrite(name, |prior| {
            priors.push((name, prior.clone()));
            Arc::new(Dispatch::new(predicate.clone(), custom.clone(), prior))
        });
    }
    Registration { priors }
}

/// Disposer for one [`register`] call: puts the prior entries back.
#[must_use = "dropping a Registration leaves the matchers installed"]
pub struct Registration {
    priors: Vec<(MatcherName, Arc<dyn MatcherSet>)>,
}

impl Registration {
    pub fn restore(self, registry: &mut Registry) {
        for (name, prior) in self.priors {
            registry.overwrite(name, |_| prior);
        }
    }
}

/// The table entry before anything is registered: every call fails with
/// [`AssertionError::Unregistered`].
pub struct Unregistered;

impl MatcherSet for Unregistered {
    fn prop<'a>(
        &self,
        _cx: &Assertion<'a>,
        _name: &str,
        _expected: Option<&PropValue>,
    ) -> Result<Assertion<'a>, AssertionError> {
        Err(AssertionError::Unregistered(MatcherName::Prop))
    }

    fn text(&self, _cx: &Assertion<'_>, _text: &str) -> Result<(), AssertionError> {
        Err(AssertionError::Unregistered(MatcherName::Text))
    }

    fn element_of_type<'a>(
        &self,
        _cx: &Assertion<'a>,
        _kind: &str,
    ) -> Result<Assertion<'a>, AssertionError> {
        Err(AssertionError::Unregistered(MatcherName::ElementOfType))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn fresh_registry_rejects_every_call() {
        let registry = Registry::new();
        let element = Element::new("div");
        let cx = Assertion::new(&element);

        let err = registry.get(MatcherName::Text).text(&cx, "hi").unwrap_err();
        assert!(matches!(err, AssertionError::Unregistered(MatcherName::Text)));
    }

    #[test]
    fn restore_puts_priors_back() {
        let mut registry = Registry::new();
        let registration = register(
            &mut registry,
            Arc::new(ElementMatchers::default()),
            Arc::new(TreeSubjects),
        );

        let element = Element::new("div").child("hi");
        let cx = Assertion::new(&element);
        assert!(registry.get(MatcherName::Text).text(&cx, "hi").is_ok());

        registration.restore(&mut registry);
        let err = registry.get(MatcherName::Text).text(&cx, "hi").unwrap_err();
        assert!(matches!(err, AssertionError::Unregistered(MatcherName::Text)));
    }
}

//! The assertion context: subject plus evaluation flags.
//!
//! The flags are explicit struct fields rather than a string-keyed flag
//! store. The `contains` flag selects deep traversal, the `negate` flag
//! inverts the outcome and swaps the failure message.

use crate::element::{Element, PropValue};
use crate::error::AssertionError;
use crate::registry::MatcherName;

/// What an assertion is about.
///
/// A subject is either something the test author handed to `expect` (a
/// single element, a list of elements, an arbitrary value, or nothing at
/// all) or the filtered node set a previous matcher chained into.
#[derive(Debug, Clone)]
pub enum Subject<'a> {
    /// No subject (`expect` on a value that turned out to be absent).
    Undefined,
    /// A single element node.
    Node(&'a Element),
    /// An explicit list of element nodes. Also the shape produced by a
    /// chaining matcher.
    Nodes(Vec<&'a Element>),
    /// An arbitrary property value; may or may not describe a tree.
    Value(&'a PropValue),
}

impl<'a> From<&'a Element> for Subject<'a> {
    fn from(element: &'a Element) -> Self {
        Subject::Node(element)
    }
}

impl<'a> From<&'a PropValue> for Subject<'a> {
    fn from(value: &'a PropValue) -> Self {
        Subject::Value(value)
    }
}

impl<'a> From<&'a [Element]> for Subject<'a> {
    fn from(elements: &'a [Element]) -> Self {
        Subject::Nodes(elements.iter().collect())
    }
}

impl<'a> From<&'a Vec<Element>> for Subject<'a> {
    fn from(elements: &'a Vec<Element>) -> Self {
        Subject::Nodes(elements.iter().collect())
    }
}

impl<'a, const N: usize> From<&'a [Element; N]> for Subject<'a> {
    fn from(elements: &'a [Element; N]) -> Self {
        Subject::Nodes(elements.iter().collect())
    }
}

/// One assertion invocation: the subject under test and the flags that
/// shape evaluation. Built fresh per call; nothing outlives it.
#[derive(Debug, Clone)]
pub struct Assertion<'a> {
    pub subject: Subject<'a>,
    /// Deep-search flag: flatten the whole tree instead of only the
    /// top-level subject.
    pub contains: bool,
    /// Negation flag: invert the outcome, report the negated message.
    pub negate: bool,
}

impl<'a> Assertion<'a> {
    pub fn new(subject: impl Into<Subject<'a>>) -> Self {
        Assertion {
            subject: subject.into(),
            contains: false,
            negate: false,
        }
    }

    /// Turns a matcher condition into a pass or a failure, honoring the
    /// negation flag. On failure the message matching the effective
    /// polarity is reported.
    pub fn check(
        &self,
        matcher: MatcherName,
        condition: bool,
        message: String,
        negated_message: String,
    ) -> Result<(), AssertionError> {
        let (passed, reported) = if self.negate {
            (!condition, negated_message)
        } else {
            (condition, message)
        };
        if passed {
            Ok(())
        } else {
            Err(AssertionError::failed(matcher, reported))
        }
    }

    /// A fresh assertion chaining over a filtered node set. Flags do not
    /// carry across the chain.
    pub fn chain(nodes: Vec<&'a Element>) -> Self {
        Assertion::new(Subject::Nodes(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_swaps_outcome_and_message() {
        let element = Element::new("div");
        let mut assertion = Assertion::new(&element);

        assert!(
            assertion
                .check(MatcherName::Text, true, "pos".into(), "neg".into())
                .is_ok()
        );

        assertion.negate = true;
        let err = assertion
            .check(MatcherName::Text, true, "pos".into(), "neg".into())
            .unwrap_err();
        assert_eq!(err.to_string(), "neg");

        assert!(
            assertion
                .check(MatcherName::Text, false, "pos".into(), "neg".into())
                .is_ok()
        );
    }
}

// Test failure messages with exact format checking

use assert_element::{Element, JsxDecompiler, Decompile, expect};

mod util;

#[test]
fn prop_message_quotes_the_decompiled_subject() {
    let view = Element::new("div")
        .prop("className", "header")
        .child(Element::new("span").child("hi"));

    let message = util::capture_panic_message(|| {
        expect(&view).prop("missing");
    });
    assert_eq!(
        message,
        r#"expected <div className="header"><span>hi</span></div> to contain a prop with name 'missing'"#
    );
}

#[test]
fn prop_message_includes_the_requested_value() {
    let view = Element::new("a").prop("href", "/home");

    let message = util::capture_panic_message(|| {
        expect(&view).prop_value("href", "/away");
    });
    assert_eq!(
        message,
        r#"expected <a href="/home" /> to contain a prop with name 'href' and value /away"#
    );
}

#[test]
fn negated_prop_message_reports_both_conditions() {
    let view = Element::new("a").prop("href", "/home");

    let message = util::capture_panic_message(|| {
        expect(&view).not().prop_value("href", "/home");
    });
    assert_eq!(
        message,
        r#"expected <a href="/home" /> not to contain a prop with name 'href' and value /home"#
    );
}

#[test]
fn list_subjects_are_joined_with_commas() {
    let views = vec![Element::new("a"), Element::new("b")];

    let message = util::capture_panic_message(|| {
        expect(&views).element_of_type("c");
    });
    assert_eq!(
        message,
        "expected <a />, <b /> to have an element of type 'c'"
    );
}

#[test]
fn non_string_attrs_render_in_braces() {
    let view = Element::new("td").prop("colspan", 2).prop("wide", true);

    let message = util::capture_panic_message(|| {
        expect(&view).text("x");
    });
    assert_eq!(
        message,
        "expected <td colspan={2} wide={true} /> to have text 'x'"
    );
}

#[test]
fn a_custom_decompiler_shapes_the_message() {
    use std::sync::Arc;
    use assert_element::{ElementMatchers, Registry, TreeSubjects, expect_in, register};

    struct KindOnly;
    impl Decompile for KindOnly {
        fn decompile(&self, element: &Element) -> String {
            format!("[{}]", element.kind)
        }
    }

    let mut registry = Registry::new();
    let _ = register(
        &mut registry,
        Arc::new(ElementMatchers::new(KindOnly)),
        Arc::new(TreeSubjects),
    );

    let view = Element::new("div");
    let message = util::capture_panic_message(std::panic::AssertUnwindSafe(move || {
        expect_in(&registry, &view).text("x");
    }));
    assert_eq!(message, "expected [div] to have text 'x'");
}

#[test]
fn default_decompiler_is_the_jsx_renderer() {
    let view = Element::new("img").prop("src", "cat.png");
    assert_eq!(JsxDecompiler.decompile(&view), r#"<img src="cat.png" />"#);
}

//! Honeypot bot filter.
//!
//! A form opts in by wrapping a text input in an element carrying the
//! honeypot class and hiding it with CSS. People never see the field; naive
//! form fillers put something in it.

use crate::dom::Dom;

/// The first `input[type="text"]` of `form` that sits inside an element with
/// the honeypot class, like `form.querySelector(".jar input[type=text]")`.
///
/// The container may be the form itself or one of its ancestors.
pub fn find_honeypot<D: Dom>(dom: &D, form: D::Node, container_class: &str) -> Option<D::Node> {
    dom.elements_by_tag(form, "input").into_iter().find(|&input| {
        dom.attribute(input, "type")
            .is_some_and(|t| t.eq_ignore_ascii_case("text"))
            && std::iter::successors(dom.parent(input), |&node| dom.parent(node))
                .any(|ancestor| dom.has_class(ancestor, container_class))
    })
}

/// True when the form has a honeypot field and something filled it in.
/// Forms without one are never rejected.
pub fn is_bot_submission<D: Dom>(dom: &D, form: D::Node, container_class: &str) -> bool {
    find_honeypot(dom, form, container_class).is_some_and(|field| !dom.value(field).is_empty())
}

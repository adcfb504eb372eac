use formdom::{Document, DomError, Element};

fn sample() -> Document {
    Document::new(
        Element::new("body").child(
            Element::form()
                .id("signup")
                .child(Element::input("text").id("first").name("first-name"))
                .child(Element::input("email").id("email").name("email"))
                .child(Element::div().id("errors").class("error-box"))
                .child(Element::button("Send").id("send")),
        ),
    )
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_get_element_by_id() {
    let doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    assert_eq!(doc.tag_name(form), Some("form"));
    assert_eq!(doc.get_element_by_id("missing"), None);
    assert_eq!(doc.get_element_by_id(""), None);
}

#[test]
fn test_elements_by_tag_and_class() {
    let doc = sample();
    let root = doc.root();
    assert_eq!(doc.elements_by_tag(root, "input").len(), 2);
    assert_eq!(doc.elements_by_tag(root, "INPUT").len(), 2);
    let boxes = doc.elements_by_class(root, "error-box");
    assert_eq!(boxes, vec![doc.get_element_by_id("errors").unwrap()]);
}

#[test]
fn test_form_controls_in_declaration_order() {
    let doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    let ids: Vec<_> = doc
        .form_controls(form)
        .into_iter()
        .filter_map(|c| doc.attribute(c, "id"))
        .collect();
    assert_eq!(ids, vec!["first", "email", "send"]);
}

#[test]
fn test_form_owner() {
    let doc = sample();
    let email = doc.get_element_by_id("email").unwrap();
    assert_eq!(doc.form_owner(email), doc.get_element_by_id("signup"));
    assert_eq!(doc.form_owner(doc.root()), None);
}

// ============================================================================
// Attributes and classes
// ============================================================================

#[test]
fn test_set_attribute_replaces_value() {
    let mut doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    doc.set_attribute(form, "novalidate", "").unwrap();
    assert!(doc.has_attribute(form, "novalidate"));
    doc.set_attribute(form, "ID", "renamed").unwrap();
    assert_eq!(doc.attribute(form, "id"), Some("renamed"));
}

#[test]
fn test_class_list_has_no_duplicates() {
    let mut doc = sample();
    let first = doc.get_element_by_id("first").unwrap();
    doc.add_class(first, "input-error").unwrap();
    doc.add_class(first, "input-error").unwrap();
    assert_eq!(doc.classes(first), vec!["input-error"]);
    doc.remove_class(first, "input-error").unwrap();
    assert!(!doc.has_class(first, "input-error"));
}

#[test]
fn test_class_attribute_is_the_class_list() {
    let mut doc = Document::new(
        Element::div()
            .child(Element::div().id("plain").attr("class", "jar  hidden"))
            .child(Element::div().id("built").class("jar").class("hidden")),
    );
    let plain = doc.get_element_by_id("plain").unwrap();
    let built = doc.get_element_by_id("built").unwrap();
    assert_eq!(doc.classes(plain), vec!["jar", "hidden"]);
    assert_eq!(doc.attribute(built, "class"), Some("jar hidden"));
    assert_eq!(doc.elements_by_class(doc.root(), "jar"), vec![plain, built]);

    doc.set_attribute(plain, "class", "trap").unwrap();
    assert!(doc.has_class(plain, "trap"));
    assert!(!doc.has_class(plain, "jar"));

    doc.add_class(plain, "input-error").unwrap();
    assert_eq!(doc.attribute(plain, "class"), Some("trap input-error"));
    doc.remove_class(plain, "trap").unwrap();
    assert_eq!(doc.attribute(plain, "class"), Some("input-error"));
}

#[test]
fn test_text_node_is_not_an_element() {
    let mut doc = sample();
    let text = doc.create_text("hello");
    assert_eq!(doc.add_class(text, "x"), Err(DomError::NotAnElement(text)));
    assert_eq!(doc.text_content(text), "hello");
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_insert_before_and_after_field() {
    let mut doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    let email = doc.get_element_by_id("email").unwrap();

    let before = doc.create_element("div");
    doc.insert_before(form, before, Some(email)).unwrap();
    assert_eq!(doc.previous_sibling(email), Some(before));

    let after = doc.create_element("div");
    let next = doc.next_sibling(email);
    doc.insert_before(form, after, next).unwrap();
    assert_eq!(doc.next_sibling(email), Some(after));
}

#[test]
fn test_insert_before_rejects_foreign_reference() {
    let mut doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    let node = doc.create_element("div");
    assert_eq!(
        doc.insert_before(form, node, Some(doc.root())),
        Err(DomError::NotAChild {
            parent: form,
            child: doc.root()
        })
    );
}

#[test]
fn test_append_moves_existing_node() {
    let mut doc = sample();
    let errors = doc.get_element_by_id("errors").unwrap();
    let first = doc.get_element_by_id("first").unwrap();
    doc.append_child(errors, first).unwrap();
    assert_eq!(doc.parent(first), Some(errors));
    assert_eq!(doc.children(errors), [first]);
}

#[test]
fn test_remove_detaches_subtree() {
    let mut doc = sample();
    let form = doc.get_element_by_id("signup").unwrap();
    let email = doc.get_element_by_id("email").unwrap();
    doc.remove(form).unwrap();
    assert!(!doc.is_connected(email));
    assert_eq!(doc.get_element_by_id("email"), None);
    assert_eq!(doc.form_owner(email), Some(form));
}

#[test]
fn test_discard_frees_subtree_slots() {
    let mut doc = sample();
    let errors = doc.get_element_by_id("errors").unwrap();
    let live = doc.node_count();
    let slots = doc.slot_count();

    let message = doc.create_element("div");
    doc.append_child(errors, message).unwrap();
    doc.set_text_content(message, "Please fill out this field.").unwrap();
    assert_eq!(doc.node_count(), live + 2);

    doc.discard(message).unwrap();
    assert_eq!(doc.node_count(), live);
    assert!(!doc.contains(message));
    assert!(doc.children(errors).is_empty());
    assert_eq!(doc.add_class(message, "x"), Err(DomError::NodeNotFound(message)));

    let reused = doc.create_element("div");
    assert_ne!(reused, message);
    assert!(!doc.contains(message));
    assert_eq!(doc.slot_count(), slots + 2);
}

#[test]
fn test_discard_root_fails() {
    let mut doc = sample();
    let root = doc.root();
    assert_eq!(doc.discard(root), Err(DomError::DiscardRoot(root)));
}

#[test]
fn test_set_text_content() {
    let mut doc = sample();
    let errors = doc.get_element_by_id("errors").unwrap();
    doc.set_text_content(errors, "First").unwrap();
    doc.set_text_content(errors, "Second").unwrap();
    assert_eq!(doc.text_content(errors), "Second");
    assert_eq!(doc.children(errors).len(), 1);
    assert_eq!(doc.slot_count(), doc.node_count());
}

// ============================================================================
// Control state
// ============================================================================

#[test]
fn test_radio_group_is_exclusive() {
    let mut doc = Document::new(
        Element::form()
            .child(Element::input("radio").id("a").name("size"))
            .child(Element::input("radio").id("b").name("size").checked(true)),
    );
    let a = doc.get_element_by_id("a").unwrap();
    let b = doc.get_element_by_id("b").unwrap();
    doc.set_checked(a, true).unwrap();
    assert!(doc.checked(a));
    assert!(!doc.checked(b));
}

#[test]
fn test_select_value_follows_selection() {
    let mut doc = Document::new(
        Element::form().child(
            Element::select()
                .id("color")
                .child(Element::option("", "Choose"))
                .child(Element::option("red", "Red"))
                .child(Element::option("blue", "Blue").selected()),
        ),
    );
    let select = doc.get_element_by_id("color").unwrap();
    assert_eq!(doc.value(select), "blue");
    doc.set_value(select, "red").unwrap();
    assert_eq!(doc.value(select), "red");
    doc.set_value(select, "nope").unwrap();
    assert_eq!(doc.value(select), "");
}

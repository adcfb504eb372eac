//! The document seam.
//!
//! The controller never touches a concrete document type. Everything it needs
//! from the host (tree queries, attribute and class access, constraint
//! validation and node insertion) goes through [`Dom`], so a browser binding
//! and the in-memory [`formdom::Document`] are interchangeable.

use std::fmt::Debug;
use std::hash::Hash;

use formdom::{Document, DomError, NodeId};

/// Operations the validator needs from a document.
pub trait Dom {
    /// Handle to a node.
    type Node: Copy + Eq + Hash + Debug;

    /// Error raised by mutating operations.
    type Error: std::error::Error + 'static;

    /// The document element.
    fn root(&self) -> Self::Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Lower-case tag name, or `None` for non-elements.
    fn tag_name(&self, node: Self::Node) -> Option<String>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Descendant elements of `scope` with the tag, in document order.
    fn elements_by_tag(&self, scope: Self::Node, tag: &str) -> Vec<Self::Node>;

    /// Descendant elements of `scope` with the class, in document order.
    fn elements_by_class(&self, scope: Self::Node, class: &str) -> Vec<Self::Node>;

    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: Self::Node, class: &str) -> Result<(), Self::Error>;

    fn remove_class(&mut self, node: Self::Node, class: &str) -> Result<(), Self::Error>;

    /// Current value of a form control.
    fn value(&self, node: Self::Node) -> String;

    /// The form's controls in declaration order (`form.elements`).
    fn form_controls(&self, form: Self::Node) -> Vec<Self::Node>;

    fn will_validate(&self, node: Self::Node) -> bool;

    /// Whether the control currently satisfies its constraints.
    fn is_valid(&self, node: Self::Node) -> bool;

    fn validation_message(&self, node: Self::Node) -> String;

    /// `form.checkValidity()`.
    fn check_validity(&self, form: Self::Node) -> bool;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn set_text_content(&mut self, node: Self::Node, text: &str) -> Result<(), Self::Error>;

    /// Insert `node` as the sibling immediately before `reference`.
    fn insert_before(&mut self, node: Self::Node, reference: Self::Node) -> Result<(), Self::Error>;

    /// Insert `node` as the sibling immediately after `reference`.
    fn insert_after(&mut self, node: Self::Node, reference: Self::Node) -> Result<(), Self::Error>;

    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), Self::Error>;

    /// Take `node` out of the tree and release it. The handle is not used
    /// again afterwards.
    fn remove(&mut self, node: Self::Node) -> Result<(), Self::Error>;
}

impl Dom for Document {
    type Node = NodeId;
    type Error = DomError;

    fn root(&self) -> NodeId {
        Document::root(self)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        Document::tag_name(self, node).map(str::to_string)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        Document::attribute(self, node, name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        Document::set_attribute(self, node, name, value)
    }

    fn elements_by_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        Document::elements_by_tag(self, scope, tag)
    }

    fn elements_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        Document::elements_by_class(self, scope, class)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        Document::add_class(self, node, class)
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        Document::remove_class(self, node, class)
    }

    fn value(&self, node: NodeId) -> String {
        Document::value(self, node)
    }

    fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        Document::form_controls(self, form)
    }

    fn will_validate(&self, node: NodeId) -> bool {
        Document::will_validate(self, node)
    }

    fn is_valid(&self, node: NodeId) -> bool {
        Document::is_valid(self, node)
    }

    fn validation_message(&self, node: NodeId) -> String {
        Document::validation_message(self, node)
    }

    fn check_validity(&self, form: NodeId) -> bool {
        Document::check_validity(self, form)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        Document::create_element(self, tag)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        Document::set_text_content(self, node, text)
    }

    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(DomError::Detached(reference))?;
        Document::insert_before(self, parent, node, Some(reference))
    }

    fn insert_after(&mut self, node: NodeId, reference: NodeId) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(DomError::Detached(reference))?;
        let next = self.next_sibling(reference);
        Document::insert_before(self, parent, node, next)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        Document::append_child(self, parent, child)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.discard(node)
    }
}

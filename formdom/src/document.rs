use std::cell::RefCell;
use std::collections::HashMap;

use regex::Regex;

use crate::element::{Content, Element};
use crate::error::DomError;

/// Handle to a node in a [`Document`].
///
/// Ids stay valid until the node is discarded. Slots of discarded nodes are
/// reused, and the generation keeps a stale id from resolving to the new
/// occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) value: String,
    /// Checkedness for checkboxes and radios, selectedness for options.
    pub(crate) checked: bool,
    pub(crate) custom_validity: String,
}

impl ElementData {
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        match self
            .attributes
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_ascii_lowercase(), value)),
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class").unwrap_or_default().split_ascii_whitespace()
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// An in-memory document tree.
///
/// Nodes live in an arena indexed by [`NodeId`]. The API mirrors the subset of
/// the browser DOM that form handling needs: id lookup, descendant queries,
/// attribute and class manipulation, and child insertion/removal.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    /// Compiled `pattern` attributes; `None` for patterns that fail to compile.
    pub(crate) patterns: RefCell<HashMap<String, Option<Regex>>>,
}

impl Document {
    /// Build a document from an element tree.
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            patterns: RefCell::default(),
        };
        doc.root = doc.build(root, None);
        doc
    }

    fn build(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let Element {
            tag,
            attributes,
            content,
            value,
            checked,
        } = element;

        let checked = checked || (tag == "option" && attributes.iter().any(|(n, _)| n == "selected"));
        let id = self.push(
            NodeData::Element(ElementData {
                tag,
                attributes,
                value: String::new(),
                checked,
                custom_validity: String::new(),
            }),
            parent,
        );

        let children = match content {
            Content::None => Vec::new(),
            Content::Text(text) => vec![self.push(NodeData::Text(text), Some(id))],
            Content::Children(children) => children
                .into_iter()
                .map(|child| self.build(child, Some(id)))
                .collect(),
        };
        if let Some(node) = self.get_mut(id) {
            node.children = children;
        }

        let initial = value.unwrap_or_else(|| self.default_value(id));
        if let Some(node) = self.get_mut(id) {
            if let NodeData::Element(data) = &mut node.data {
                data.value = initial;
            }
        }
        id
    }

    fn default_value(&self, id: NodeId) -> String {
        let Some(data) = self.element(id) else {
            return String::new();
        };
        match data.tag.as_str() {
            "textarea" => self.text_content(id),
            "input" => match data.attribute("value") {
                Some(value) => value.to_string(),
                None => match data.attribute("type").map(str::to_ascii_lowercase).as_deref() {
                    Some("checkbox") | Some("radio") => "on".to_string(),
                    _ => String::new(),
                },
            },
            _ => String::new(),
        }
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let node = Node {
            parent,
            children: Vec::new(),
            data,
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .node
            .as_ref()
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .node
            .as_mut()
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.get(id)?.data {
            NodeData::Element(data) => Some(data),
            NodeData::Text(_) => None,
        }
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.get_mut(id).ok_or(DomError::NodeNotFound(id))?.data {
            NodeData::Element(data) => Ok(data),
            NodeData::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of arena slots, including free ones awaiting reuse.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // Tree navigation

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        siblings.get(index + 1).copied()
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// Ancestors of `id`, nearest first, not including `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// Whether the node is reachable from the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == self.root || self.ancestors(id).any(|a| a == self.root)
    }

    /// All nodes below `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    // Queries

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    /// Descendant elements of `scope` with the given tag name.
    pub fn elements_by_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| self.tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Descendant elements of `scope` carrying the given class.
    pub fn elements_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    /// Nearest ancestor `form` element.
    pub fn form_owner(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.tag_name(a) == Some("form"))
    }

    // Element data

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|data| data.tag.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute. Setting `class` replaces the class list.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_mut(id)?.set_attribute(name, value.into());
        Ok(())
    }

    /// The class list, parsed from the `class` attribute.
    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.element(id)
            .map(|data| data.classes().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|data| data.classes().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let data = self.element_mut(id)?;
        if class.is_empty() || data.classes().any(|c| c == class) {
            return Ok(());
        }
        let mut classes: Vec<&str> = data.classes().collect();
        classes.push(class);
        let joined = classes.join(" ");
        data.set_attribute("class", joined);
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let data = self.element_mut(id)?;
        if !data.classes().any(|c| c == class) {
            return Ok(());
        }
        let joined = data
            .classes()
            .filter(|&c| c != class)
            .collect::<Vec<_>>()
            .join(" ");
        data.set_attribute("class", joined);
        Ok(())
    }

    /// Concatenated text of all text descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(Node {
            data: NodeData::Text(text),
            ..
        }) = self.get(id)
        {
            return text.clone();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|node| match &self.get(node)?.data {
                NodeData::Text(text) => Some(text.as_str()),
                NodeData::Element(_) => None,
            })
            .collect()
    }

    /// Replace all children of an element with a single text node. The
    /// previous children are discarded.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?;
        for child in self.children(id).to_vec() {
            self.discard(child)?;
        }
        let text = self.push(NodeData::Text(text.into()), Some(id));
        self.get_mut(id)
            .ok_or(DomError::NodeNotFound(id))?
            .children
            .push(text);
        Ok(())
    }

    // Control state

    /// Current value of a form control. For `select` this is the value of the
    /// selected option.
    pub fn value(&self, id: NodeId) -> String {
        match self.tag_name(id) {
            Some("select") => self
                .selected_option(id)
                .map(|option| self.option_value(option))
                .unwrap_or_default(),
            Some(_) => self.element(id).map(|d| d.value.clone()).unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Set a control's value, as if the user typed it. For `select` this
    /// selects the first option with a matching value.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) -> Result<(), DomError> {
        let value = value.into();
        if self.tag_name(id) == Some("select") {
            let options = self.elements_by_tag(id, "option");
            let target = options.iter().copied().find(|&o| self.option_value(o) == value);
            for option in options {
                self.element_mut(option)?.checked = Some(option) == target;
            }
            return Ok(());
        }
        self.element_mut(id)?.value = value;
        Ok(())
    }

    pub fn checked(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|data| data.checked)
    }

    /// Set checkedness. Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> Result<(), DomError> {
        if checked && self.input_type_attr(id).as_deref() == Some("radio") {
            for other in self.radio_group(id) {
                self.element_mut(other)?.checked = false;
            }
        }
        self.element_mut(id)?.checked = checked;
        Ok(())
    }

    pub(crate) fn input_type_attr(&self, id: NodeId) -> Option<String> {
        self.attribute(id, "type").map(str::to_ascii_lowercase)
    }

    /// Radios sharing `id`'s name within the same form owner (or the whole
    /// document for unowned radios), including `id` itself.
    pub(crate) fn radio_group(&self, id: NodeId) -> Vec<NodeId> {
        let Some(name) = self.attribute(id, "name").filter(|n| !n.is_empty()) else {
            return vec![id];
        };
        let owner = self.form_owner(id);
        let scope = owner.unwrap_or(self.root);
        self.elements_by_tag(scope, "input")
            .into_iter()
            .filter(|&other| {
                self.input_type_attr(other).as_deref() == Some("radio")
                    && self.attribute(other, "name") == Some(name)
                    && self.form_owner(other) == owner
            })
            .collect()
    }

    pub(crate) fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.elements_by_tag(select, "option");
        if let Some(selected) = options.iter().copied().find(|&o| self.checked(o)) {
            return Some(selected);
        }
        if self.has_attribute(select, "multiple") {
            return None;
        }
        options
            .into_iter()
            .find(|&o| !self.has_attribute(o, "disabled"))
    }

    fn option_value(&self, option: NodeId) -> String {
        match self.attribute(option, "value") {
            Some(value) => value.to_string(),
            None => self.text_content(option).trim().to_string(),
        }
    }

    // Mutation

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(
            NodeData::Element(ElementData {
                tag: tag.to_ascii_lowercase(),
                attributes: Vec::new(),
                value: String::new(),
                checked: false,
                custom_validity: String::new(),
            }),
            None,
        )
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()), None)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference`, or at the end when
    /// `reference` is `None`. A child that already has a parent is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.node(child)?;
        self.element_mut(parent)
            .map_err(|_| DomError::HierarchyRequest { parent, child })?;
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild {
                    parent,
                    child: reference,
                });
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child);
        let siblings = &mut self
            .get_mut(parent)
            .ok_or(DomError::NodeNotFound(parent))?
            .children;
        let index = reference
            .and_then(|r| siblings.iter().position(|&c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(index, child);
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        Ok(())
    }

    /// Detach a node (and its subtree) from its parent. The ids stay valid,
    /// so the subtree can be inserted again.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.node(id)?;
        self.detach(id);
        Ok(())
    }

    /// Detach a node and free it together with its subtree. Their ids stop
    /// resolving and the slots are reused by later insertions.
    pub fn discard(&mut self, id: NodeId) -> Result<(), DomError> {
        self.node(id)?;
        if id == self.root {
            return Err(DomError::DiscardRoot(id));
        }
        self.detach(id);
        let subtree: Vec<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for node in subtree {
            if let Some(slot) = self.slots.get_mut(node.index) {
                slot.node = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(node.index);
            }
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.get_mut(id).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.children.retain(|&c| c != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_document_order() {
        let doc = Document::new(
            Element::div()
                .id("root")
                .child(Element::div().id("a").child(Element::div().id("a1")))
                .child(Element::div().id("b")),
        );
        let ids: Vec<_> = doc
            .descendants(doc.root())
            .into_iter()
            .filter_map(|n| doc.attribute(n, "id"))
            .collect();
        assert_eq!(ids, vec!["a", "a1", "b"]);
    }

    #[test]
    fn test_insert_ancestor_into_descendant_fails() {
        let mut doc = Document::new(Element::div().child(Element::div().id("inner")));
        let inner = doc.get_element_by_id("inner").unwrap();
        let root = doc.root();
        assert_eq!(
            doc.append_child(inner, root),
            Err(DomError::HierarchyRequest {
                parent: inner,
                child: root
            })
        );
    }

    #[test]
    fn test_textarea_default_value_is_text() {
        let doc = Document::new(Element::form().child(Element::textarea().id("t").text("hello")));
        let t = doc.get_element_by_id("t").unwrap();
        assert_eq!(doc.value(t), "hello");
    }
}

//! Live document model.
//!
//! The document is an arena tree (`ego_tree`). Detaching a node keeps it alive
//! in the arena, so a detached child sequence can be stored by id and put back
//! later without copying. Raw markup is parsed with `scraper` and converted once.

use ego_tree::{NodeId, NodeRef, Tree};
use scraper::{Html, Node};

use crate::serialize;

/// Elements whose text never renders and so never counts as readable text.
pub(crate) const UNRENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Document,
    Doctype(String),
    Element(ElementData),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    name: String,
    attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_ascii_lowercase(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self
            .attrs
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(index).1)
    }

    pub(crate) fn is_unrendered(&self) -> bool {
        UNRENDERED_TAGS.contains(&self.name.as_str())
    }
}

/// A mutable document tree rooted at a `DomNode::Document`.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<DomNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document with no children.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(DomNode::Document),
        }
    }

    /// Parse a full HTML document. Missing `html`/`head`/`body` are synthesized.
    pub fn parse(html: &str) -> Self {
        let source = Html::parse_document(html);
        let mut tree = Tree::new(DomNode::Document);
        let mut pending = vec![(source.tree.root(), tree.root().id())];

        while let Some((src, dst)) = pending.pop() {
            for child in src.children() {
                let value = match child.value() {
                    Node::Doctype(doctype) => DomNode::Doctype(doctype.name().to_string()),
                    Node::Comment(comment) => DomNode::Comment(comment.to_string()),
                    Node::Text(text) => DomNode::Text(text.to_string()),
                    Node::Element(element) => {
                        let mut data = ElementData::new(element.name());
                        for (name, value) in element.attrs() {
                            data.set_attr(name, value);
                        }
                        DomNode::Element(data)
                    }
                    Node::Document | Node::Fragment | Node::ProcessingInstruction(_) => continue,
                };
                let Some(mut parent) = tree.get_mut(dst) else {
                    continue;
                };
                let id = parent.append(value).id();
                if child.has_children() {
                    pending.push((child, id));
                }
            }
        }

        Self { tree }
    }

    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, DomNode>> {
        self.tree.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.tree.get(id)?.value() {
            DomNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::name)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    /// The top-level element (normally `html`).
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree
            .root()
            .children()
            .find(|child| matches!(child.value(), DomNode::Element(_)))
            .map(|child| child.id())
    }

    /// The first attached `body` element in document order.
    pub fn body(&self) -> Option<NodeId> {
        self.elements().into_iter().find(|id| self.tag_name(*id) == Some("body"))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|parent| parent.id())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    /// Every attached element, in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        self.descendant_elements(self.root())
    }

    /// Element descendants of `id` in document order, excluding `id` itself.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.tree.get(id) else {
            return Vec::new();
        };
        node.descendants()
            .skip(1)
            .filter(|d| matches!(d.value(), DomNode::Element(_)))
            .map(|d| d.id())
            .collect()
    }

    /// `id` followed by its ancestors, innermost first.
    pub fn ancestors_inclusive(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.tree.get(id) else {
            return Vec::new();
        };
        std::iter::once(id)
            .chain(node.ancestors().map(|a| a.id()))
            .collect()
    }

    /// Whether `id` is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors_inclusive(id).last() == Some(&self.root())
    }

    /// Concatenated text of every rendered text node under `id`.
    pub fn rendered_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let Some(node) = self.tree.get(id) else {
            return out;
        };
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            match node.value() {
                DomNode::Text(text) => out.push_str(text),
                DomNode::Element(element) if element.is_unrendered() => {}
                _ => stack.extend(node.children().rev()),
            }
        }
        out
    }

    /// Creates a detached element; attach it with [`Document::append_child`].
    pub fn create_element(&mut self, element: ElementData) -> NodeId {
        self.tree.orphan(DomNode::Element(element)).id()
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.tree.orphan(DomNode::Text(text.into())).id()
    }

    /// Moves `child` (detaching it first if needed) to the end of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child {
            return;
        }
        if let Some(mut node) = self.tree.get_mut(parent) {
            node.append_id(child);
        }
    }

    pub fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Detaches and returns the whole child sequence of `id`, in order.
    pub fn detach_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = self.children(id);
        for child in &children {
            self.detach(*child);
        }
        children
    }

    /// Replaces the children of `id` with a single text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.detach_children(id);
        let text = self.create_text(text);
        self.append_child(id, text);
    }

    pub fn with_element_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut ElementData) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        match node.value() {
            DomNode::Element(element) => Some(f(element)),
            _ => None,
        }
    }

    /// Serializes the attached document.
    pub fn to_html(&self) -> String {
        serialize::children_html(self.tree.root())
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        self.tree
            .get(id)
            .map(serialize::children_html)
            .unwrap_or_default()
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        self.tree
            .get(id)
            .map(serialize::node_html)
            .unwrap_or_default()
    }
}

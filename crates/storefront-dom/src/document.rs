use std::fmt;
use std::rc::Rc;

use crate::error::DomError;

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An HTML attribute applied when an element is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementAttribute {
    pub name: String,
    pub value: String,
}

impl ElementAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Click handler. Receives the document so it can patch other elements.
pub type Listener = Rc<dyn Fn(&mut Document) -> Result<(), DomError>>;

struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<Listener>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: None,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

/// A tree of elements rooted at `<body>`.
///
/// Elements are never freed; a detached element simply stops being
/// reachable from the body.
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Create an element with optional classes and attributes and append it
    /// to `hook`.
    pub fn create_root_element(
        &mut self,
        hook: NodeId,
        tag: &str,
        css_classes: Option<&str>,
        attributes: &[ElementAttribute],
    ) -> Result<NodeId, DomError> {
        self.element(hook)?;
        let el = self.create_element(tag);
        if let Some(classes) = css_classes {
            self.set_attribute(el, "class", classes)?;
        }
        for attr in attributes {
            self.set_attribute(el, &attr.name, &attr.value)?;
        }
        self.append(hook, el)?;
        Ok(el)
    }

    /// Create an element holding `text` and append it to `parent`.
    pub fn append_text_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        text: &str,
    ) -> Result<NodeId, DomError> {
        let el = self.create_root_element(parent, tag, None, &[])?;
        self.set_text(el, text)?;
        Ok(el)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.element(child)?;
        // Walk up from the parent; meeting the child means a cycle.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DomError::Cycle { parent, child });
            }
            cursor = self.element(id)?.parent;
        }

        if let Some(old) = self.element(child)?.parent {
            self.element_mut(old)?.children.retain(|c| *c != child);
        }
        self.element_mut(parent)?.children.push(child);
        self.element_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let el = self.element_mut(node)?;
        match el.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => el.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        Ok(self.element(node)?.attribute(name))
    }

    /// Replace the element's content with plain text. Existing children are
    /// detached.
    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let children = std::mem::take(&mut self.element_mut(node)?.children);
        for child in children {
            self.element_mut(child)?.parent = None;
        }
        self.element_mut(node)?.text = Some(text.to_string());
        Ok(())
    }

    /// Concatenated text of the element and all of its descendants.
    pub fn text_content(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.collect_text(node, &mut out)?;
        Ok(out)
    }

    fn collect_text(&self, node: NodeId, out: &mut String) -> Result<(), DomError> {
        let el = self.element(node)?;
        if let Some(text) = &el.text {
            out.push_str(text);
        }
        for child in &el.children {
            self.collect_text(*child, out)?;
        }
        Ok(())
    }

    pub fn tag(&self, node: NodeId) -> Result<&str, DomError> {
        Ok(&self.element(node)?.tag)
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.element(node)?.children)
    }

    pub(crate) fn own_text(&self, node: NodeId) -> Result<Option<&str>, DomError> {
        Ok(self.element(node)?.text.as_deref())
    }

    pub(crate) fn attributes(&self, node: NodeId) -> Result<&[(String, String)], DomError> {
        Ok(&self.element(node)?.attributes)
    }

    /// Find an attached element by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|n| self.nodes[n.0].attribute("id") == Some(id))
    }

    /// Attached elements carrying `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|n| self.nodes[n.0].has_class(class))
            .collect()
    }

    /// First descendant of `root` (excluding `root`) with the given tag.
    pub fn query_tag(&self, root: NodeId, tag: &str) -> Result<Option<NodeId>, DomError> {
        self.element(root)?;
        Ok(self
            .descendants(root)
            .into_iter()
            .skip(1)
            .find(|n| self.nodes[n.0].tag.eq_ignore_ascii_case(tag)))
    }

    /// `root` followed by all its descendants, depth first.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.nodes.get(id.0) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn add_click_listener(&mut self, node: NodeId, listener: Listener) -> Result<(), DomError> {
        self.element_mut(node)?.listeners.push(listener);
        Ok(())
    }

    /// Run every click listener on `node` in registration order.
    ///
    /// Returns the number of listeners run. Stops at the first listener error.
    pub fn click(&mut self, node: NodeId) -> Result<usize, DomError> {
        let listeners = self.element(node)?.listeners.clone();
        tracing::debug!(node = %node, listeners = listeners.len(), "Dispatching click");
        for listener in &listeners {
            listener(self)?;
        }
        Ok(listeners.len())
    }

    fn element(&self, node: NodeId) -> Result<&Element, DomError> {
        self.nodes.get(node.0).ok_or(DomError::UnknownNode(node))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DomError> {
        self.nodes.get_mut(node.0).ok_or(DomError::UnknownNode(node))
    }
}

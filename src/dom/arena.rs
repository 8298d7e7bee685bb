//! Arena-based DOM for the interaction engine.
//!
//! html5ever parses the page into a contiguous arena; parent/child/sibling
//! links are indices into it. Unlike a read-only document model, this arena
//! supports the mutations the controllers perform: attribute writes, class
//! list edits, and inline style property overrides. The `id` and `class`
//! caches used for selector matching stay coherent across those writes.

use std::collections::HashMap;

use html5ever::{LocalName, Namespace, QualName};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Pre-extracted id for fast matching.
        id: Option<String>,
        /// Pre-extracted classes for fast matching.
        classes: Vec<String>,
    },
    /// Text content.
    Text(String),
    /// Comment (ignored but needed for parsing).
    Comment(String),
    /// Document type declaration.
    Doctype { name: String },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena DOM.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// The live document tree.
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
    /// Map from id attribute to node ID for identifier lookup.
    id_map: HashMap<String, NodeId>,
}

impl Dom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
            id_map: HashMap::new(),
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let mut id = None;
        let mut classes = Vec::new();

        for attr in &attrs {
            if attr.name.local.as_ref() == "id" {
                id = Some(attr.value.clone());
            } else if attr.name.local.as_ref() == "class" {
                classes = attr
                    .value
                    .split_whitespace()
                    .map(|s| s.to_string())
                    .collect();
            }
        }

        let node_id = self.alloc(Node::new(NodeData::Element {
            name,
            attrs,
            id: id.clone(),
            classes,
        }));

        if let Some(id_str) = id {
            self.id_map.entry(id_str).or_insert(node_id);
        }

        node_id
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(&mut self, name: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype { name }))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if last_child.is_some() {
            if let Some(last_node) = self.get_mut(last_child) {
                last_node.next_sibling = child;
            }
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let parent = self.get(sibling).map(|n| n.parent).unwrap_or(NodeId::NONE);
        let prev = self
            .get(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(NodeId::NONE);

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Append text to an existing text node, or create new if last child isn't text.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child) {
            if let NodeData::Text(ref mut existing) = last.data {
                existing.push_str(text);
                return;
            }
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Remove a node from its parent, fixing sibling links.
    pub fn remove_from_parent(&mut self, target: NodeId) {
        let (parent, prev, next) = {
            let node = match self.get(target) {
                Some(n) => n,
                None => return,
            };
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if parent.is_some() {
            if let Some(p) = self.get_mut(parent) {
                p.first_child = next;
            }
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if parent.is_some() {
            if let Some(p) = self.get_mut(parent) {
                p.last_child = prev;
            }
        }

        if let Some(target_node) = self.get_mut(target) {
            target_node.parent = NodeId::NONE;
            target_node.prev_sibling = NodeId::NONE;
            target_node.next_sibling = NodeId::NONE;
        }
    }

    /// Look up an element by its id attribute.
    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map.get(id).copied()
    }

    /// Get the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM is empty (only has document root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children {
            dom: self,
            current: first,
        }
    }

    /// Iterate over ancestors of a node, nearest first, ending at the
    /// document root.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        let parent = self.get(node).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Ancestors {
            dom: self,
            current: parent,
        }
    }

    /// Iterate over descendants of a node in document order, excluding the
    /// node itself.
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(scope).collect();
        stack.reverse();
        Descendants { dom: self, stack }
    }

    /// True if `node` is `ancestor` itself or lies anywhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if ancestor == node {
            return true;
        }
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Find the first element matching a predicate (document order).
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                if predicate(node) {
                    return Some(id);
                }
                let mut children: Vec<_> = self.children(id).collect();
                children.reverse();
                stack.extend(children);
            }
        }
        None
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| {
            if let NodeData::Element { name, .. } = &node.data {
                name.local.as_ref() == tag
            } else {
                false
            }
        })
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.dom.get(id).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Iterator over ancestors of a node.
pub struct Ancestors<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.dom.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Pre-order iterator over descendants of a scope node.
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let mut children: Vec<_> = self.dom.children(id).collect();
        children.reverse();
        self.stack.extend(children);
        Some(id)
    }
}

/// Read accessors for element nodes.
impl Dom {
    /// Get element's local name (tag).
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Get element's namespace.
    pub fn element_namespace(&self, id: NodeId) -> Option<&Namespace> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        })
    }

    /// Get an attribute value.
    pub fn attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Get element's id attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    /// Get element's classes.
    pub fn element_classes(&self, id: NodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Check if node is a text node.
    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Check whether an element carries a class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element_classes(id).iter().any(|c| c == class)
    }
}

/// Mutation API. Every write keeps the pre-extracted id/class caches and the
/// identifier map in sync with the attribute list.
impl Dom {
    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, id: NodeId, attr_name: &str, value: &str) {
        let qual = QualName::new(None, html5ever::ns!(), LocalName::from(attr_name));
        let mut old_id = None;
        let mut wrote_id = false;

        if let Some(node) = self.get_mut(id) {
            if let NodeData::Element {
                attrs,
                id: cached_id,
                classes,
                ..
            } = &mut node.data
            {
                match attrs.iter().position(|a| a.name.local.as_ref() == attr_name) {
                    Some(i) => attrs[i].value = value.to_string(),
                    None => attrs.push(Attribute {
                        name: qual,
                        value: value.to_string(),
                    }),
                }
                if attr_name == "id" {
                    old_id = cached_id.take();
                    *cached_id = Some(value.to_string());
                    wrote_id = true;
                } else if attr_name == "class" {
                    *classes = value.split_whitespace().map(|s| s.to_string()).collect();
                }
            }
        }

        if wrote_id {
            if let Some(old) = old_id {
                if self.id_map.get(&old) == Some(&id) {
                    self.id_map.remove(&old);
                }
            }
            self.id_map.entry(value.to_string()).or_insert(id);
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, id: NodeId, attr_name: &str) {
        let mut old_id = None;

        if let Some(node) = self.get_mut(id) {
            if let NodeData::Element {
                attrs,
                id: cached_id,
                classes,
                ..
            } = &mut node.data
            {
                attrs.retain(|a| a.name.local.as_ref() != attr_name);
                if attr_name == "id" {
                    old_id = cached_id.take();
                } else if attr_name == "class" {
                    classes.clear();
                }
            }
        }

        if let Some(old) = old_id {
            if self.id_map.get(&old) == Some(&id) {
                self.id_map.remove(&old);
            }
        }
    }

    /// Add a class if absent.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let mut classes = self.element_classes(id).to_vec();
        classes.push(class.to_string());
        let value = classes.join(" ");
        self.set_attr(id, "class", &value);
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let classes: Vec<_> = self
            .element_classes(id)
            .iter()
            .filter(|c| c.as_str() != class)
            .cloned()
            .collect();
        let value = classes.join(" ");
        self.set_attr(id, "class", &value);
    }

    /// Toggle a class; returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    /// Force a class on or off, mirroring `classList.toggle(name, force)`.
    pub fn set_class(&mut self, id: NodeId, class: &str, present: bool) {
        if present {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// Read one property from the inline style attribute.
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        let style = self.attr(id, "style")?;
        parse_inline_style(style)
            .into_iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    /// Write one property into the inline style attribute, preserving the
    /// other declarations.
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
        let mut declarations = self
            .attr(id, "style")
            .map(parse_inline_style)
            .unwrap_or_default();
        match declarations.iter().position(|(p, _)| p == property) {
            Some(i) => declarations[i].1 = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }
        let serialized = declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attr(id, "style", &serialized);
    }
}

/// Split an inline style attribute into (property, value) declarations.
///
/// Values may contain commas and whitespace (`translateY(16px)`,
/// `opacity .5s ease-out, transform .5s ease-out`); only the first colon
/// separates property from value. Declarations without a colon are dropped.
fn parse_inline_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                return None;
            }
            Some((prop.to_string(), value.to_string()))
        })
        .collect()
}

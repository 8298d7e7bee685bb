//! selectors crate Element implementation for [`Dom`].
//!
//! This enables CSS selector matching against the arena DOM, which is what
//! the selection utilities and the delegation predicates are built on.

use std::fmt;

use html5ever::{LocalName, Namespace};
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::context::MatchingContext;
use selectors::matching::ElementSelectorFlags;
use selectors::parser::SelectorParseErrorKind;
use selectors::{OpaqueElement, SelectorImpl};

use super::arena::{Dom, NodeData, NodeId};

/// Our selector implementation for the selectors crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors;

/// Identifier string type used for ids, classes and attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Ident(pub String);

impl precomputed_hash::PrecomputedHash for Ident {
    fn precomputed_hash(&self) -> u32 {
        let mut h: u32 = 0;
        for byte in self.0.bytes() {
            h = h.wrapping_mul(31).wrapping_add(byte as u32);
        }
        h
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'a> From<&'a str> for Ident {
    fn from(s: &'a str) -> Self {
        Self(s.to_string())
    }
}

impl cssparser::ToCss for Ident {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(&self.0)
    }
}

/// Wrapper type for LocalName that implements ToCss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssLocalName(pub LocalName);

impl precomputed_hash::PrecomputedHash for CssLocalName {
    fn precomputed_hash(&self) -> u32 {
        self.0.precomputed_hash()
    }
}

impl cssparser::ToCss for CssLocalName {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(self.0.as_ref())
    }
}

impl From<String> for CssLocalName {
    fn from(s: String) -> Self {
        Self(LocalName::from(s))
    }
}

impl<'a> From<&'a str> for CssLocalName {
    fn from(s: &'a str) -> Self {
        Self(LocalName::from(s))
    }
}

impl AsRef<str> for CssLocalName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

/// Wrapper type for Namespace that implements ToCss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CssNamespace(pub Namespace);

impl precomputed_hash::PrecomputedHash for CssNamespace {
    fn precomputed_hash(&self) -> u32 {
        self.0.precomputed_hash()
    }
}

impl cssparser::ToCss for CssNamespace {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(self.0.as_ref())
    }
}

impl From<String> for CssNamespace {
    fn from(s: String) -> Self {
        Self(Namespace::from(s))
    }
}

impl<'a> From<&'a str> for CssNamespace {
    fn from(s: &'a str) -> Self {
        Self(Namespace::from(s))
    }
}

impl<'i> selectors::parser::Parser<'i> for PageSelectors {
    type Impl = PageSelectors;
    type Error = SelectorParseErrorKind<'i>;
}

/// Pseudo-element type (not used but required by the trait).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoElement {}

impl cssparser::ToCss for PseudoElement {
    fn to_css<W: fmt::Write>(&self, _dest: &mut W) -> fmt::Result {
        match *self {}
    }
}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = PageSelectors;

    fn accepts_state_pseudo_classes(&self) -> bool {
        false
    }

    fn valid_after_slotted(&self) -> bool {
        false
    }
}

/// Non-TS pseudo-class type. Only `:link` is meaningful in a static
/// document; user-action states never match here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NonTSPseudoClass {
    Link,
}

impl selectors::parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = PageSelectors;

    fn is_active_or_hover(&self) -> bool {
        false
    }

    fn is_user_action_state(&self) -> bool {
        false
    }
}

impl cssparser::ToCss for NonTSPseudoClass {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Self::Link => dest.write_str(":link"),
        }
    }
}

impl SelectorImpl for PageSelectors {
    type ExtraMatchingData<'a> = ();
    type AttrValue = Ident;
    type Identifier = Ident;
    type LocalName = CssLocalName;
    type NamespaceUrl = CssNamespace;
    type NamespacePrefix = Ident;
    type BorrowedLocalName = CssLocalName;
    type BorrowedNamespaceUrl = CssNamespace;
    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

/// Reference to an element in the [`Dom`] for selector matching.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    pub dom: &'a Dom,
    pub id: NodeId,
}

impl<'a> ElementRef<'a> {
    pub fn new(dom: &'a Dom, id: NodeId) -> Self {
        Self { dom, id }
    }

    fn is_link_element(&self) -> bool {
        let is_anchor = self
            .dom
            .element_name(self.id)
            .is_some_and(|n| n.as_ref() == "a");
        is_anchor && self.dom.attr(self.id, "href").is_some()
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("name", &self.dom.element_name(self.id))
            .finish()
    }
}

impl<'a> selectors::Element for ElementRef<'a> {
    type Impl = PageSelectors;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(self)
    }

    fn parent_element(&self) -> Option<Self> {
        let node = self.dom.get(self.id)?;
        if node.parent.is_none() {
            return None;
        }
        if self.dom.is_element(node.parent) {
            Some(Self::new(self.dom, node.parent))
        } else {
            None
        }
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        let node = self.dom.get(self.id)?;
        let mut current = node.prev_sibling;
        while current.is_some() {
            if self.dom.is_element(current) {
                return Some(Self::new(self.dom, current));
            }
            current = self.dom.get(current)?.prev_sibling;
        }
        None
    }

    fn next_sibling_element(&self) -> Option<Self> {
        let node = self.dom.get(self.id)?;
        let mut current = node.next_sibling;
        while current.is_some() {
            if self.dom.is_element(current) {
                return Some(Self::new(self.dom, current));
            }
            current = self.dom.get(current)?.next_sibling;
        }
        None
    }

    fn first_element_child(&self) -> Option<Self> {
        for child in self.dom.children(self.id) {
            if self.dom.is_element(child) {
                return Some(Self::new(self.dom, child));
            }
        }
        None
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, name: &CssLocalName) -> bool {
        self.dom
            .element_name(self.id)
            .is_some_and(|n| n == &name.0)
    }

    fn has_namespace(&self, ns: &CssNamespace) -> bool {
        self.dom
            .element_namespace(self.id)
            .is_some_and(|n| n == &ns.0)
    }

    fn is_same_type(&self, other: &Self) -> bool {
        let self_name = self.dom.element_name(self.id);
        let other_name = other.dom.element_name(other.id);
        self_name == other_name
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&CssNamespace>,
        local_name: &CssLocalName,
        operation: &AttrSelectorOperation<&Ident>,
    ) -> bool {
        let node = match self.dom.get(self.id) {
            Some(n) => n,
            None => return false,
        };

        let attrs = match &node.data {
            NodeData::Element { attrs, .. } => attrs,
            _ => return false,
        };

        for attr in attrs {
            let ns_match = match ns {
                NamespaceConstraint::Any => true,
                NamespaceConstraint::Specific(ns) => attr.name.ns == ns.0,
            };
            if !ns_match {
                continue;
            }

            if attr.name.local != local_name.0 {
                continue;
            }

            return operation.eval_str(&attr.value);
        }
        false
    }

    fn match_non_ts_pseudo_class(
        &self,
        pc: &NonTSPseudoClass,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        match pc {
            NonTSPseudoClass::Link => self.is_link_element(),
        }
    }

    fn match_pseudo_element(
        &self,
        _pe: &PseudoElement,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        false
    }

    fn is_link(&self) -> bool {
        self.is_link_element()
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &Ident, case_sensitivity: CaseSensitivity) -> bool {
        let elem_id = match self.dom.element_id(self.id) {
            Some(i) => i,
            None => return false,
        };
        case_sensitivity.eq(elem_id.as_bytes(), id.0.as_bytes())
    }

    fn has_class(&self, name: &Ident, case_sensitivity: CaseSensitivity) -> bool {
        let classes = self.dom.element_classes(self.id);
        classes
            .iter()
            .any(|c| case_sensitivity.eq(c.as_bytes(), name.0.as_bytes()))
    }

    fn imported_part(&self, _name: &Ident) -> Option<Ident> {
        None
    }

    fn is_part(&self, _name: &Ident) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        for child in self.dom.children(self.id) {
            let node = match self.dom.get(child) {
                Some(n) => n,
                None => continue,
            };
            match &node.data {
                NodeData::Element { .. } => return false,
                NodeData::Text(t) if !t.trim().is_empty() => return false,
                _ => {}
            }
        }
        true
    }

    fn is_root(&self) -> bool {
        let parent = self.dom.get(self.id).map(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(parent_node) = self.dom.get(parent) {
                return matches!(parent_node.data, NodeData::Document);
            }
        }
        false
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn add_element_unique_hashes(&self, _filter: &mut selectors::bloom::BloomFilter) -> bool {
        false
    }

    fn has_custom_state(&self, _name: &Ident) -> bool {
        false
    }
}

//! Live document model: arena tree, html5ever parsing, selector matching,
//! and the scoped selection utilities built on top.

mod arena;
mod element_ref;
mod query;
mod tree_sink;

pub use arena::{Attribute, Dom, Node, NodeData, NodeId};
pub use element_ref::{ElementRef, PageSelectors};
pub use query::{escape_identifier, Selector};
pub use tree_sink::{parse_html, DomSink};

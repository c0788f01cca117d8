//! Component model shared by the generator, renderers and editor.
//!
//! A [`Document`] is a flat, ordered list of [`Node`]s. Each node carries a
//! [`NodeKind`] tag and an insertion-ordered property bag. Order in the
//! document is render order.

mod kind;
mod node;
mod value;

pub use kind::{KindDef, NodeKind};
pub use node::{Document, Node, Properties};
pub use value::{format_number, split_list, PropValue, QaPair};
pub(crate) use value::parse_number;

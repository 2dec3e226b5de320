//! nestbox-layout: the box tree and its layout rules.
//!
//! Boxes live in a flat arena ([`BoxTree`]) and refer to each other by
//! [`BoxId`]. Attaching a child assigns its absolute anchor once and grows
//! the interior padding of every ancestor that would otherwise be overflowed.
//!
//! Layout is append-only: each new child is placed relative to the last
//! child attached before it, so children must be attached in their final
//! order, and a child's own subtree should be complete before its next
//! sibling is attached.

pub mod build;
pub mod rect;
pub mod tree;

pub use nestbox_types::Alignment;
pub use rect::Rect;
pub use tree::{BoxId, BoxTree, NestedBox};

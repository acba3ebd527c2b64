//! Document-tree filter protocol.
//!
//! [`NodeFilter`] implementations decide what happens to each node;
//! the [`Walker`] visits every Block and Inline at every depth and
//! reassembles the tree from the filter's [`FilterAction`]s.

pub mod visitor;
mod walker;

pub use visitor::{CompositeFilter, FilterAction, FilterContext, IdentityFilter, NodeFilter};
pub use walker::{walk_document, WalkStats, Walker};

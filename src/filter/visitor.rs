//! Filter protocol for rewriting document nodes.
//!
//! A filter decides, node by node, whether to keep a node or replace it.
//! The [`Walker`](super::Walker) owns the traversal: filters never recurse
//! themselves, and every node is offered to the filter regardless of what
//! happened to its parent.
//!
//! # Example
//!
//! ```
//! use panlatex::filter::{FilterAction, FilterContext, NodeFilter};
//! use panlatex::model::Inline;
//! use panlatex::Result;
//!
//! struct Shout;
//!
//! impl NodeFilter for Shout {
//!     fn filter_inline(&mut self, inline: &Inline, _ctx: &FilterContext<'_>) -> Result<FilterAction<Inline>> {
//!         match inline {
//!             Inline::Str(s) => Ok(FilterAction::ReplaceOne(Inline::Str(s.to_uppercase()))),
//!             _ => Ok(FilterAction::Keep),
//!         }
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::{Block, Inline, Meta};

/// Outcome of offering a node to a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction<T> {
    /// Keep the node; its children are still visited.
    Keep,

    /// Replace the node with a single node.
    ReplaceOne(T),

    /// Splice a sequence of nodes in place of the node, preserving order.
    /// An empty sequence deletes the node.
    ReplaceMany(Vec<T>),
}

impl<T> Default for FilterAction<T> {
    fn default() -> Self {
        FilterAction::Keep
    }
}

impl<T> FilterAction<T> {
    /// Check if this action keeps the original node.
    pub fn is_keep(&self) -> bool {
        matches!(self, FilterAction::Keep)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        !self.is_keep()
    }

    /// Get the replacement nodes, if any.
    pub fn replacements(&self) -> Option<&[T]> {
        match self {
            FilterAction::Keep => None,
            FilterAction::ReplaceOne(node) => Some(std::slice::from_ref(node)),
            FilterAction::ReplaceMany(nodes) => Some(nodes),
        }
    }
}

/// Read-only invocation context handed to filters.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// Output format requested by pandoc (e.g. `latex`, `html5`)
    pub format: &'a str,

    /// Original document metadata
    pub meta: &'a Meta,
}

impl<'a> FilterContext<'a> {
    /// Create a new context.
    pub fn new(format: &'a str, meta: &'a Meta) -> Self {
        Self { format, meta }
    }

    /// Check whether the requested format is `target`.
    pub fn is_format(&self, target: &str) -> bool {
        self.format == target
    }
}

/// Trait for filters applied by the walker.
///
/// All methods return `FilterAction::Keep` by default.
pub trait NodeFilter {
    /// Called for every block node, at every depth.
    fn filter_block(&mut self, block: &Block, ctx: &FilterContext<'_>) -> Result<FilterAction<Block>> {
        let _ = (block, ctx);
        Ok(FilterAction::Keep)
    }

    /// Called for every inline node, at every depth.
    fn filter_inline(
        &mut self,
        inline: &Inline,
        ctx: &FilterContext<'_>,
    ) -> Result<FilterAction<Inline>> {
        let _ = (inline, ctx);
        Ok(FilterAction::Keep)
    }
}

/// Filter that keeps every node.
#[derive(Debug, Clone, Default)]
pub struct IdentityFilter;

impl IdentityFilter {
    /// Create a new identity filter.
    pub fn new() -> Self {
        Self
    }
}

impl NodeFilter for IdentityFilter {}

/// Composite filter that chains multiple filters in one walk.
///
/// Filters are asked in order. The first filter that returns a
/// non-`Keep` action determines the result for that node.
pub struct CompositeFilter {
    filters: Vec<Box<dyn NodeFilter>>,
}

impl CompositeFilter {
    /// Create a new composite filter.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the chain.
    pub fn with_filter<F: NodeFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of chained filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeFilter for CompositeFilter {
    fn filter_block(&mut self, block: &Block, ctx: &FilterContext<'_>) -> Result<FilterAction<Block>> {
        for filter in &mut self.filters {
            let action = filter.filter_block(block, ctx)?;
            if action.is_replace() {
                return Ok(action);
            }
        }
        Ok(FilterAction::Keep)
    }

    fn filter_inline(
        &mut self,
        inline: &Inline,
        ctx: &FilterContext<'_>,
    ) -> Result<FilterAction<Inline>> {
        for filter in &mut self.filters {
            let action = filter.filter_inline(inline, ctx)?;
            if action.is_replace() {
                return Ok(action);
            }
        }
        Ok(FilterAction::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DropRules;

    impl NodeFilter for DropRules {
        fn filter_block(&mut self, block: &Block, _ctx: &FilterContext<'_>) -> Result<FilterAction<Block>> {
            match block {
                Block::HorizontalRule => Ok(FilterAction::ReplaceMany(Vec::new())),
                _ => Ok(FilterAction::Keep),
            }
        }
    }

    #[test]
    fn test_filter_action_default() {
        let action: FilterAction<Block> = FilterAction::default();
        assert!(action.is_keep());
        assert!(action.replacements().is_none());
    }

    #[test]
    fn test_filter_action_replacements() {
        let one = FilterAction::ReplaceOne(Inline::Space);
        assert!(one.is_replace());
        assert_eq!(one.replacements(), Some(&[Inline::Space][..]));

        let many: FilterAction<Inline> = FilterAction::ReplaceMany(Vec::new());
        assert!(many.is_replace());
        assert_eq!(many.replacements().map(<[Inline]>::len), Some(0));
    }

    #[test]
    fn test_context_format() {
        let meta = Meta::new();
        let ctx = FilterContext::new("latex", &meta);
        assert!(ctx.is_format("latex"));
        assert!(!ctx.is_format("beamer"));
    }

    #[test]
    fn test_identity_filter() {
        let meta = Meta::new();
        let ctx = FilterContext::new("latex", &meta);
        let mut filter = IdentityFilter::new();
        assert!(filter.filter_block(&Block::HorizontalRule, &ctx).unwrap().is_keep());
        assert!(filter.filter_inline(&Inline::Space, &ctx).unwrap().is_keep());
    }

    #[test]
    fn test_composite_filter() {
        let meta = Meta::new();
        let ctx = FilterContext::new("latex", &meta);
        let mut composite = CompositeFilter::new()
            .with_filter(IdentityFilter)
            .with_filter(DropRules);
        assert_eq!(composite.len(), 2);

        // Rules are dropped by the second filter
        let action = composite.filter_block(&Block::HorizontalRule, &ctx).unwrap();
        assert_eq!(action, FilterAction::ReplaceMany(Vec::new()));

        // Other elements are kept
        let action = composite.filter_block(&Block::para_text("x"), &ctx).unwrap();
        assert!(action.is_keep());
    }
}

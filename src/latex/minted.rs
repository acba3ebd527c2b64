//! Code listings rendered with the `minted` package.
//!
//! `CodeBlock` nodes become a `listing` float wrapping a `minted`
//! environment; inline `Code` becomes `\mintinline`. The first class
//! selects the language, and a `caption` attribute becomes the listing
//! caption instead of a minted option.
//!
//! # Example
//!
//! ```
//! use panlatex::latex::{MintedFilter, MintedOptions};
//! use panlatex::model::{Attr, Block, Document};
//!
//! let doc = Document::with_blocks(vec![Block::CodeBlock(
//!     Attr::new("lst:hello").with_class("python"),
//!     "print('hello')".to_string(),
//! )]);
//!
//! let mut filter = MintedFilter::new(MintedOptions::default());
//! let out = panlatex::apply_filter(doc, &mut filter, "latex")?;
//! assert!(matches!(&out.blocks[0], Block::RawBlock(format, _) if format == "latex"));
//! # Ok::<(), panlatex::Error>(())
//! ```

use super::template::Template;
use super::MintedOptions;
use crate::decompose::CodeParts;
use crate::error::Result;
use crate::filter::{FilterAction, FilterContext, NodeFilter};
use crate::model::{Block, Inline};

/// Fields available to listing templates.
pub const TEMPLATE_FIELDS: [&str; 5] = ["label", "contents", "language", "attributes", "caption"];

/// Filter rendering code nodes as minted markup.
#[derive(Debug, Clone)]
pub struct MintedFilter {
    options: MintedOptions,
    block_template: Template,
    inline_template: Template,
}

impl MintedFilter {
    /// Create a filter with the given options.
    pub fn new(options: MintedOptions) -> Self {
        let block_template = Template::new(options.block_template.as_str());
        let inline_template = Template::new(options.inline_template.as_str());
        Self {
            options,
            block_template,
            inline_template,
        }
    }

    /// Create a filter, rejecting templates that reference unknown fields.
    pub fn try_new(options: MintedOptions) -> Result<Self> {
        let filter = Self::new(options);
        filter.block_template.validate(&TEMPLATE_FIELDS)?;
        filter.inline_template.validate(&TEMPLATE_FIELDS)?;
        Ok(filter)
    }

    /// Filter options.
    pub fn options(&self) -> &MintedOptions {
        &self.options
    }

    /// Render a code block.
    pub fn render_block(&self, parts: &CodeParts<'_>) -> Result<String> {
        self.block_template.substitute(&fields(parts))
    }

    /// Render inline code.
    pub fn render_inline(&self, parts: &CodeParts<'_>) -> Result<String> {
        self.inline_template.substitute(&fields(parts))
    }
}

impl Default for MintedFilter {
    fn default() -> Self {
        Self::new(MintedOptions::default())
    }
}

impl NodeFilter for MintedFilter {
    fn filter_block(&mut self, block: &Block, ctx: &FilterContext<'_>) -> Result<FilterAction<Block>> {
        if !ctx.is_format(&self.options.target_format) {
            return Ok(FilterAction::Keep);
        }
        let Some(parts) = CodeParts::from_block(block, &self.options.default_language) else {
            return Ok(FilterAction::Keep);
        };

        log::debug!(
            "Rendering code block '{}' as minted {}",
            parts.label,
            parts.language
        );
        let markup = self.render_block(&parts)?;
        Ok(FilterAction::ReplaceOne(Block::raw(ctx.format, markup)))
    }

    fn filter_inline(
        &mut self,
        inline: &Inline,
        ctx: &FilterContext<'_>,
    ) -> Result<FilterAction<Inline>> {
        if !ctx.is_format(&self.options.target_format) {
            return Ok(FilterAction::Keep);
        }
        let Some(parts) = CodeParts::from_inline(inline, &self.options.default_language) else {
            return Ok(FilterAction::Keep);
        };

        let markup = self.render_inline(&parts)?;
        Ok(FilterAction::ReplaceOne(Inline::raw(ctx.format, markup)))
    }
}

fn fields<'a>(parts: &'a CodeParts<'_>) -> [(&'static str, &'a str); 5] {
    [
        ("label", parts.label),
        ("contents", parts.contents),
        ("language", parts.language),
        ("attributes", &parts.attributes),
        ("caption", parts.caption.unwrap_or("")),
    ]
}

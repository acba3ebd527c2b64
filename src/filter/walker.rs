//! Recursive traversal of a document tree.

use super::{FilterAction, FilterContext, NodeFilter};
use crate::error::Result;
use crate::model::{
    Block, Caption, Citation, Document, Inline, Meta, MetaValue, Row, Table, TableBody,
};

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Block nodes offered to the filter
    pub blocks_visited: usize,

    /// Inline nodes offered to the filter
    pub inlines_visited: usize,

    /// Nodes the filter replaced (single or spliced)
    pub nodes_replaced: usize,
}

/// Walks a tree by value, offering every Block and Inline to a filter and
/// rebuilding each child list from the results.
///
/// Replacement nodes are not offered to the filter again, but their
/// children are walked, so content carried over into a replacement is
/// still visited.
pub struct Walker<'a, F: NodeFilter + ?Sized> {
    filter: &'a mut F,
    ctx: FilterContext<'a>,
    stats: WalkStats,
}

impl<'a, F: NodeFilter + ?Sized> Walker<'a, F> {
    /// Create a walker for one filter invocation.
    pub fn new(filter: &'a mut F, ctx: FilterContext<'a>) -> Self {
        Self {
            filter,
            ctx,
            stats: WalkStats::default(),
        }
    }

    /// Counters collected so far.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Walk a list of blocks.
    pub fn walk_blocks(&mut self, blocks: Vec<Block>) -> Result<Vec<Block>> {
        let mut out = Vec::with_capacity(blocks.len());
        for block in blocks {
            self.stats.blocks_visited += 1;
            match self.filter.filter_block(&block, &self.ctx)? {
                FilterAction::Keep => out.push(self.walk_block(block)?),
                FilterAction::ReplaceOne(new) => {
                    self.stats.nodes_replaced += 1;
                    out.push(self.walk_block(new)?);
                }
                FilterAction::ReplaceMany(news) => {
                    self.stats.nodes_replaced += 1;
                    for new in news {
                        out.push(self.walk_block(new)?);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Walk a list of inlines.
    pub fn walk_inlines(&mut self, inlines: Vec<Inline>) -> Result<Vec<Inline>> {
        let mut out = Vec::with_capacity(inlines.len());
        for inline in inlines {
            self.stats.inlines_visited += 1;
            match self.filter.filter_inline(&inline, &self.ctx)? {
                FilterAction::Keep => out.push(self.walk_inline(inline)?),
                FilterAction::ReplaceOne(new) => {
                    self.stats.nodes_replaced += 1;
                    out.push(self.walk_inline(new)?);
                }
                FilterAction::ReplaceMany(news) => {
                    self.stats.nodes_replaced += 1;
                    for new in news {
                        out.push(self.walk_inline(new)?);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Walk every value of a metadata map.
    pub fn walk_meta(&mut self, meta: Meta) -> Result<Meta> {
        meta.into_iter()
            .map(|(key, value)| -> Result<(String, MetaValue)> {
                Ok((key, self.walk_meta_value(value)?))
            })
            .collect()
    }

    /// Walk a single metadata value.
    pub fn walk_meta_value(&mut self, value: MetaValue) -> Result<MetaValue> {
        Ok(match value {
            MetaValue::MetaMap(map) => MetaValue::MetaMap(self.walk_meta(map)?),
            MetaValue::MetaList(items) => MetaValue::MetaList(
                items
                    .into_iter()
                    .map(|v| self.walk_meta_value(v))
                    .collect::<Result<_>>()?,
            ),
            MetaValue::MetaInlines(inlines) => MetaValue::MetaInlines(self.walk_inlines(inlines)?),
            MetaValue::MetaBlocks(blocks) => MetaValue::MetaBlocks(self.walk_blocks(blocks)?),
            scalar @ (MetaValue::MetaBool(_) | MetaValue::MetaString(_)) => scalar,
        })
    }

    // Children only; the block itself has already been offered to the filter.
    fn walk_block(&mut self, block: Block) -> Result<Block> {
        Ok(match block {
            Block::Plain(inlines) => Block::Plain(self.walk_inlines(inlines)?),
            Block::Para(inlines) => Block::Para(self.walk_inlines(inlines)?),
            Block::LineBlock(lines) => Block::LineBlock(
                lines
                    .into_iter()
                    .map(|line| self.walk_inlines(line))
                    .collect::<Result<_>>()?,
            ),
            Block::BlockQuote(blocks) => Block::BlockQuote(self.walk_blocks(blocks)?),
            Block::OrderedList(attrs, items) => {
                Block::OrderedList(attrs, self.walk_block_lists(items)?)
            }
            Block::BulletList(items) => Block::BulletList(self.walk_block_lists(items)?),
            Block::DefinitionList(items) => Block::DefinitionList(
                items
                    .into_iter()
                    .map(|(term, definitions)| -> Result<(Vec<Inline>, Vec<Vec<Block>>)> {
                        Ok((self.walk_inlines(term)?, self.walk_block_lists(definitions)?))
                    })
                    .collect::<Result<_>>()?,
            ),
            Block::Header(level, attr, inlines) => {
                Block::Header(level, attr, self.walk_inlines(inlines)?)
            }
            Block::Table(table) => Block::Table(Box::new(self.walk_table(*table)?)),
            Block::Figure(attr, caption, blocks) => {
                let caption = self.walk_caption(caption)?;
                Block::Figure(attr, caption, self.walk_blocks(blocks)?)
            }
            Block::Div(attr, blocks) => Block::Div(attr, self.walk_blocks(blocks)?),
            leaf @ (Block::CodeBlock(..) | Block::RawBlock(..) | Block::HorizontalRule) => leaf,
        })
    }

    fn walk_inline(&mut self, inline: Inline) -> Result<Inline> {
        Ok(match inline {
            Inline::Emph(c) => Inline::Emph(self.walk_inlines(c)?),
            Inline::Underline(c) => Inline::Underline(self.walk_inlines(c)?),
            Inline::Strong(c) => Inline::Strong(self.walk_inlines(c)?),
            Inline::Strikeout(c) => Inline::Strikeout(self.walk_inlines(c)?),
            Inline::Superscript(c) => Inline::Superscript(self.walk_inlines(c)?),
            Inline::Subscript(c) => Inline::Subscript(self.walk_inlines(c)?),
            Inline::SmallCaps(c) => Inline::SmallCaps(self.walk_inlines(c)?),
            Inline::Quoted(quote, c) => Inline::Quoted(quote, self.walk_inlines(c)?),
            Inline::Cite(citations, c) => {
                let citations = citations
                    .into_iter()
                    .map(|citation| self.walk_citation(citation))
                    .collect::<Result<_>>()?;
                Inline::Cite(citations, self.walk_inlines(c)?)
            }
            Inline::Link(attr, c, target) => Inline::Link(attr, self.walk_inlines(c)?, target),
            Inline::Image(attr, c, target) => Inline::Image(attr, self.walk_inlines(c)?, target),
            Inline::Note(blocks) => Inline::Note(self.walk_blocks(blocks)?),
            Inline::Span(attr, c) => Inline::Span(attr, self.walk_inlines(c)?),
            leaf @ (Inline::Str(_)
            | Inline::Code(..)
            | Inline::Space
            | Inline::SoftBreak
            | Inline::LineBreak
            | Inline::Math(..)
            | Inline::RawInline(..)) => leaf,
        })
    }

    fn walk_block_lists(&mut self, lists: Vec<Vec<Block>>) -> Result<Vec<Vec<Block>>> {
        lists
            .into_iter()
            .map(|blocks| self.walk_blocks(blocks))
            .collect()
    }

    fn walk_citation(&mut self, mut citation: Citation) -> Result<Citation> {
        citation.citation_prefix = self.walk_inlines(citation.citation_prefix)?;
        citation.citation_suffix = self.walk_inlines(citation.citation_suffix)?;
        Ok(citation)
    }

    fn walk_caption(&mut self, caption: Caption) -> Result<Caption> {
        Ok(Caption {
            short: caption.short.map(|s| self.walk_inlines(s)).transpose()?,
            long: self.walk_blocks(caption.long)?,
        })
    }

    fn walk_table(&mut self, mut table: Table) -> Result<Table> {
        table.caption = self.walk_caption(table.caption)?;
        table.head.rows = self.walk_rows(table.head.rows)?;
        table.bodies = table
            .bodies
            .into_iter()
            .map(|body| self.walk_table_body(body))
            .collect::<Result<_>>()?;
        table.foot.rows = self.walk_rows(table.foot.rows)?;
        Ok(table)
    }

    fn walk_table_body(&mut self, mut body: TableBody) -> Result<TableBody> {
        body.head = self.walk_rows(body.head)?;
        body.body = self.walk_rows(body.body)?;
        Ok(body)
    }

    fn walk_rows(&mut self, rows: Vec<Row>) -> Result<Vec<Row>> {
        rows.into_iter()
            .map(|mut row| -> Result<Row> {
                for cell in &mut row.cells {
                    cell.content = self.walk_blocks(std::mem::take(&mut cell.content))?;
                }
                Ok(row)
            })
            .collect()
    }
}

/// Apply a filter to a whole document for the given output format.
///
/// Metadata is walked first, then the body. Filters see the original
/// metadata through [`FilterContext::meta`].
pub fn walk_document<F: NodeFilter + ?Sized>(
    doc: Document,
    filter: &mut F,
    format: &str,
) -> Result<Document> {
    let Document {
        api_version,
        meta,
        blocks,
    } = doc;

    let ctx = FilterContext::new(format, &meta);
    let mut walker = Walker::new(filter, ctx);
    let new_meta = walker.walk_meta(meta.clone())?;
    let new_blocks = walker.walk_blocks(blocks)?;

    let stats = walker.stats();
    log::debug!(
        "Walked {} blocks and {} inlines for format '{}', replaced {} nodes",
        stats.blocks_visited,
        stats.inlines_visited,
        format,
        stats.nodes_replaced
    );

    Ok(Document {
        api_version,
        meta: new_meta,
        blocks: new_blocks,
    })
}

//! Tables rendered as ruled LaTeX tabulars.
//!
//! pandoc's own LaTeX tables use no vertical lines. This renderer emits a
//! `table` float with a fully ruled `tabular` whose columns are fixed-width
//! paragraph columns sized from the column specs.

use super::TableOptions;
use crate::decompose::{ColumnLayout, TableParts};
use crate::error::Result;
use crate::filter::{FilterAction, FilterContext, NodeFilter};
use crate::model::{Alignment, Block, Inline};

/// Filter rendering captioned tables as ruled tabulars.
#[derive(Debug, Clone, Default)]
pub struct PrettyTablesFilter {
    options: TableOptions,
}

impl PrettyTablesFilter {
    /// Create a filter with the given options.
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    /// Filter options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Render a decomposed table into the blocks that replace it.
    pub fn render(&self, parts: &TableParts<'_>) -> Vec<Block> {
        let mut blocks = vec![
            self.raw_block(format!("\\begin{{table}}{}", self.placement())),
            self.raw_block("\\centering"),
            self.raw_block(format!(
                "\\begin{{tabular}}{{@{{}} {} @{{}}}}",
                self.column_spec(&parts.columns)
            )),
            self.header(&parts.header_rows),
        ];
        if !parts.body_rows.is_empty() {
            blocks.push(self.body(&parts.body_rows));
        }
        blocks.push(self.raw_block("\\end{tabular}"));
        blocks.push(self.caption(parts.caption));
        blocks.push(self.raw_block("\\end{table}"));
        blocks
    }

    /// Column spec for the tabular: one paragraph column per layout,
    /// separated and enclosed by vertical rules.
    pub fn column_spec(&self, columns: &[ColumnLayout]) -> String {
        let cols = columns.len();
        let directives = columns
            .iter()
            .map(|column| {
                format!(
                    ">{{{}\\arraybackslash}}p{{({} - {}{}) * \\real{{{:.*}}}}}",
                    justify(column.alignment),
                    self.options.text_width,
                    cols * 2,
                    self.options.column_gap,
                    self.options.width_precision,
                    column.width
                )
            })
            .collect::<Vec<_>>();

        format!("\n  |{}|", directives.join("\n  |"))
    }

    fn header(&self, rows: &[Vec<&[Inline]>]) -> Block {
        let opts = &self.options;
        if rows.is_empty() {
            return Block::Para(vec![self.raw_inline(opts.rule.as_str())]);
        }

        let mut content = vec![self.raw_inline(format!("{}\n", opts.rule))];
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                content.push(self.raw_inline(format!("{}\n", opts.row_end)));
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    content.push(self.raw_inline(opts.cell_separator.as_str()));
                }
                content.push(self.raw_inline(format!("\\{}{{", opts.header_macro)));
                content.extend(cell.iter().cloned());
                content.push(self.raw_inline("}"));
            }
        }
        content.push(self.raw_inline(format!("{}\n{}{}", opts.row_end, opts.rule, opts.rule)));
        Block::Para(content)
    }

    fn body(&self, rows: &[Vec<&[Inline]>]) -> Block {
        let opts = &self.options;
        let mut content = Vec::new();
        for row in rows {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    content.push(self.raw_inline(opts.cell_separator.as_str()));
                }
                content.extend(cell.iter().cloned());
            }
            content.push(self.raw_inline(format!("{}\n", opts.row_end)));
            content.push(self.raw_inline(format!("{}\n", opts.rule)));
        }
        Block::Para(content)
    }

    fn caption(&self, caption: &[Inline]) -> Block {
        let mut content = Vec::with_capacity(caption.len() + 2);
        content.push(self.raw_inline(format!("\\{}{{", self.options.caption_macro)));
        content.extend(caption.iter().cloned());
        content.push(self.raw_inline("}"));
        Block::Para(content)
    }

    fn placement(&self) -> String {
        if self.options.placement.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.options.placement)
        }
    }

    fn raw_block(&self, text: impl Into<String>) -> Block {
        Block::raw(self.options.target_format.as_str(), text)
    }

    fn raw_inline(&self, text: impl Into<String>) -> Inline {
        Inline::raw(self.options.target_format.as_str(), text)
    }
}

impl NodeFilter for PrettyTablesFilter {
    fn filter_block(&mut self, block: &Block, ctx: &FilterContext<'_>) -> Result<FilterAction<Block>> {
        if !ctx.is_format(&self.options.target_format) {
            return Ok(FilterAction::Keep);
        }
        let Block::Table(table) = block else {
            return Ok(FilterAction::Keep);
        };

        match TableParts::from_table(table)? {
            Some(parts) => {
                log::debug!(
                    "Rendering table with {} columns and {} body rows",
                    parts.column_count(),
                    parts.body_rows.len()
                );
                Ok(FilterAction::ReplaceMany(self.render(&parts)))
            }
            None => {
                log::debug!("Skipping table without caption");
                Ok(FilterAction::Keep)
            }
        }
    }
}

/// Horizontal justification directive for a column alignment.
pub fn justify(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Default | Alignment::Left => "\\raggedright",
        Alignment::Center => "\\centering",
        Alignment::Right => "\\raggedleft",
    }
}

//! Decomposition of code and table nodes into the fields renderers use.

use crate::error::{Error, Result};
use crate::model::{Alignment, Attr, Block, Cell, Inline, Row, Table};

/// Key of the attribute pair that overrides a listing caption.
pub const CAPTION_KEY: &str = "caption";

/// Semantic fields of a `CodeBlock` or `Code` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParts<'a> {
    /// Identifier, used as the cross-reference label
    pub label: &'a str,

    /// Source language: the first class, or the caller's default
    pub language: &'a str,

    /// Caption override from the `caption` attribute
    pub caption: Option<&'a str>,

    /// Remaining attributes as `key=value` joined by `, `
    pub attributes: String,

    /// Code text
    pub contents: &'a str,
}

impl<'a> CodeParts<'a> {
    /// Decompose code attributes and text.
    pub fn new(attr: &'a Attr, contents: &'a str, default_language: &'a str) -> Self {
        let attributes = attr
            .attributes
            .iter()
            .filter(|(key, _)| key != CAPTION_KEY)
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            label: &attr.identifier,
            language: attr.first_class().unwrap_or(default_language),
            caption: attr.get(CAPTION_KEY),
            attributes,
            contents,
        }
    }

    /// Decompose a `CodeBlock`; `None` for any other block.
    pub fn from_block(block: &'a Block, default_language: &'a str) -> Option<Self> {
        match block {
            Block::CodeBlock(attr, text) => Some(Self::new(attr, text, default_language)),
            _ => None,
        }
    }

    /// Decompose an inline `Code`; `None` for any other inline.
    pub fn from_inline(inline: &'a Inline, default_language: &'a str) -> Option<Self> {
        match inline {
            Inline::Code(attr, text) => Some(Self::new(attr, text, default_language)),
            _ => None,
        }
    }
}

/// Resolved layout of one table column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Column alignment
    pub alignment: Alignment,

    /// Relative width, as stored in the tree
    pub width: f64,
}

/// Semantic fields of a captioned `Table` node.
#[derive(Debug, Clone, PartialEq)]
pub struct TableParts<'a> {
    /// Inline content of the caption
    pub caption: &'a [Inline],

    /// One layout per column spec
    pub columns: Vec<ColumnLayout>,

    /// Inline content of each header cell, row by row
    pub header_rows: Vec<Vec<&'a [Inline]>>,

    /// Inline content of each cell below the header, row by row
    pub body_rows: Vec<Vec<&'a [Inline]>>,
}

impl<'a> TableParts<'a> {
    /// Decompose a table.
    ///
    /// Returns `Ok(None)` when the caption has no blocks: table-shaped
    /// metadata values carry an empty caption and are not content tables.
    /// Column widths left at the writer default get an equal share.
    pub fn from_table(table: &'a Table) -> Result<Option<Self>> {
        let Some(first) = table.caption.long.first() else {
            return Ok(None);
        };
        let caption = block_inlines(first, "table caption")?;

        let count = table.column_count();
        let columns = table
            .col_specs
            .iter()
            .map(|spec| ColumnLayout {
                alignment: spec.alignment,
                width: spec.width.fraction().unwrap_or(1.0 / count as f64),
            })
            .collect();

        let header_rows = rows_inlines(table.head.rows.iter(), count)?;
        let body_rows = rows_inlines(table.content_rows(), count)?;

        Ok(Some(Self {
            caption,
            columns,
            header_rows,
            body_rows,
        }))
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Inline content of a table cell: the inlines of its first block, or
/// nothing for an empty cell.
pub fn cell_inlines(cell: &Cell) -> Result<&[Inline]> {
    match cell.content.first() {
        Some(block) => block_inlines(block, "table cell"),
        None => Ok(&[]),
    }
}

fn block_inlines<'a>(block: &'a Block, context: &'static str) -> Result<&'a [Inline]> {
    match block {
        Block::Plain(inlines) | Block::Para(inlines) => Ok(inlines),
        other => Err(Error::UnsupportedNode {
            context,
            found: other.kind(),
        }),
    }
}

fn rows_inlines<'a>(
    rows: impl Iterator<Item = &'a Row>,
    columns: usize,
) -> Result<Vec<Vec<&'a [Inline]>>> {
    rows.map(|row| {
        if row.cells.len() != columns {
            log::warn!(
                "Table row has {} cells but {} column specs",
                row.cells.len(),
                columns
            );
        }
        row.cells.iter().map(cell_inlines).collect::<Result<Vec<_>>>()
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Caption, ColSpec, ColWidth};

    #[test]
    fn test_code_parts_with_class_and_caption() {
        let attr = Attr::new("lst:ex")
            .with_class("python")
            .with_attribute("caption", "Example")
            .with_attribute("linenos", "true")
            .with_attribute("fontsize", "\\small");
        let parts = CodeParts::new(&attr, "print(1)", "text");

        assert_eq!(parts.label, "lst:ex");
        assert_eq!(parts.language, "python");
        assert_eq!(parts.caption, Some("Example"));
        assert_eq!(parts.attributes, "linenos=true, fontsize=\\small");
        assert_eq!(parts.contents, "print(1)");
    }

    #[test]
    fn test_code_parts_defaults() {
        let attr = Attr::default();
        let parts = CodeParts::new(&attr, "x", "text");
        assert_eq!(parts.language, "text");
        assert_eq!(parts.caption, None);
        assert_eq!(parts.attributes, "");
        assert_eq!(parts.label, "");
    }

    #[test]
    fn test_code_parts_drops_every_caption_pair() {
        let attr = Attr::default()
            .with_attribute("caption", "First")
            .with_attribute("caption", "Second")
            .with_attribute("a", "b");
        let parts = CodeParts::new(&attr, "", "text");
        assert_eq!(parts.caption, Some("First"));
        assert_eq!(parts.attributes, "a=b");
        assert!(!parts.attributes.contains("caption="));
    }

    #[test]
    fn test_code_parts_node_kinds() {
        let block = Block::CodeBlock(Attr::default().with_class("rust"), "fn main() {}".into());
        assert_eq!(CodeParts::from_block(&block, "text").map(|p| p.language), Some("rust"));
        assert!(CodeParts::from_block(&Block::HorizontalRule, "text").is_none());

        let inline = Inline::Code(Attr::default(), "x".into());
        assert_eq!(CodeParts::from_inline(&inline, "c").map(|p| p.language), Some("c"));
        assert!(CodeParts::from_inline(&Inline::Space, "c").is_none());
    }

    #[test]
    fn test_table_parts_empty_caption_skipped() {
        let table = Table::new(vec![ColSpec::new(Alignment::Left, 1.0)])
            .with_body_row(Row::from_strings(["x"]));
        assert!(TableParts::from_table(&table).unwrap().is_none());
    }

    #[test]
    fn test_table_parts_fields() {
        let table = Table::new(vec![
            ColSpec::new(Alignment::Left, 0.6),
            ColSpec {
                alignment: Alignment::Right,
                width: ColWidth::Default,
            },
        ])
        .with_caption(Caption::plain(Inline::words("Results")))
        .with_header_row(Row::from_strings(["Name", "Value"]))
        .with_body_row(Row::new(vec![Cell::text("x"), Cell::empty()]));

        let parts = TableParts::from_table(&table).unwrap().unwrap();
        assert_eq!(parts.column_count(), 2);
        assert_eq!(parts.columns[0].width, 0.6);
        assert_eq!(parts.columns[1].width, 0.5);
        assert_eq!(parts.caption, &[Inline::str("Results")][..]);
        assert_eq!(parts.header_rows[0][1], &[Inline::str("Value")][..]);
        assert_eq!(parts.body_rows.len(), 1);
        assert!(parts.body_rows[0][1].is_empty());
    }

    #[test]
    fn test_table_parts_rejects_code_cell() {
        let table = Table::new(vec![ColSpec::new(Alignment::Left, 1.0)])
            .with_caption(Caption::plain(vec![Inline::str("T")]))
            .with_body_row(Row::new(vec![Cell::new(vec![Block::CodeBlock(
                Attr::default(),
                "x".into(),
            )])]));

        let err = TableParts::from_table(&table).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedNode {
                context: "table cell",
                found: "CodeBlock"
            }
        ));
    }
}

//! Block-level node types.

use super::{Attr, Inline, Table};
use serde::{Deserialize, Serialize};

/// A block node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    /// Plain text, not a paragraph
    Plain(Vec<Inline>),
    /// Paragraph
    Para(Vec<Inline>),
    /// Multiple non-breaking lines
    LineBlock(Vec<Vec<Inline>>),
    /// Code block
    CodeBlock(Attr, String),
    /// Raw markup for the given format
    RawBlock(String, String),
    /// Block quote
    BlockQuote(Vec<Block>),
    /// Ordered list (attributes and items)
    OrderedList(ListAttributes, Vec<Vec<Block>>),
    /// Bullet list
    BulletList(Vec<Vec<Block>>),
    /// Terms with their definitions
    DefinitionList(Vec<(Vec<Inline>, Vec<Vec<Block>>)>),
    /// Section heading (level, attributes, text)
    Header(i32, Attr, Vec<Inline>),
    /// Horizontal rule
    HorizontalRule,
    /// Table
    Table(Box<Table>),
    /// Figure with caption
    Figure(Attr, Caption, Vec<Block>),
    /// Generic block container
    Div(Attr, Vec<Block>),
}

impl Block {
    /// Create a raw block for the given format.
    pub fn raw(format: impl Into<String>, text: impl Into<String>) -> Self {
        Block::RawBlock(format.into(), text.into())
    }

    /// Create a paragraph from plain prose.
    pub fn para_text(text: &str) -> Self {
        Block::Para(Inline::words(text))
    }

    /// Node kind as it appears in the `"t"` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Plain(_) => "Plain",
            Block::Para(_) => "Para",
            Block::LineBlock(_) => "LineBlock",
            Block::CodeBlock(..) => "CodeBlock",
            Block::RawBlock(..) => "RawBlock",
            Block::BlockQuote(_) => "BlockQuote",
            Block::OrderedList(..) => "OrderedList",
            Block::BulletList(_) => "BulletList",
            Block::DefinitionList(_) => "DefinitionList",
            Block::Header(..) => "Header",
            Block::HorizontalRule => "HorizontalRule",
            Block::Table(_) => "Table",
            Block::Figure(..) => "Figure",
            Block::Div(..) => "Div",
        }
    }
}

/// Table or figure caption, encoded as `[short | null, [Block]]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Caption {
    /// Optional short caption (used in lists of tables/figures)
    pub short: Option<Vec<Inline>>,

    /// Full caption content
    pub long: Vec<Block>,
}

array_encoded!(Caption {
    short: Option<Vec<Inline>>,
    long: Vec<Block>,
});

impl Caption {
    /// Create a caption holding a single `Plain` block.
    pub fn plain(content: Vec<Inline>) -> Self {
        Self {
            short: None,
            long: vec![Block::Plain(content)],
        }
    }

    /// Check whether the caption has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.long.is_empty()
    }
}

/// Ordered list attributes: start number, numbering style, delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAttributes {
    /// First item number
    pub start: i32,

    /// Numbering style
    pub style: ListNumberStyle,

    /// Number delimiter
    pub delimiter: ListNumberDelim,
}

array_encoded!(ListAttributes {
    start: i32,
    style: ListNumberStyle,
    delimiter: ListNumberDelim,
});

impl Default for ListAttributes {
    fn default() -> Self {
        Self {
            start: 1,
            style: ListNumberStyle::DefaultStyle,
            delimiter: ListNumberDelim::DefaultDelim,
        }
    }
}

/// Ordered list numbering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberStyle {
    /// Writer default
    DefaultStyle,
    /// Example list (`@`)
    Example,
    /// 1, 2, 3
    Decimal,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
    /// a, b, c
    LowerAlpha,
    /// A, B, C
    UpperAlpha,
}

/// Ordered list number delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberDelim {
    /// Writer default
    DefaultDelim,
    /// `1.`
    Period,
    /// `1)`
    OneParen,
    /// `(1)`
    TwoParens,
}

//! Inline-level node types.

use super::{Attr, Block, Target};
use serde::{Deserialize, Serialize};

/// An inline node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    /// Plain text
    Str(String),
    /// Emphasized text
    Emph(Vec<Inline>),
    /// Underlined text
    Underline(Vec<Inline>),
    /// Strongly emphasized text
    Strong(Vec<Inline>),
    /// Struck-out text
    Strikeout(Vec<Inline>),
    /// Superscripted text
    Superscript(Vec<Inline>),
    /// Subscripted text
    Subscript(Vec<Inline>),
    /// Small caps text
    SmallCaps(Vec<Inline>),
    /// Quoted text
    Quoted(QuoteType, Vec<Inline>),
    /// Citation with its rendered content
    Cite(Vec<Citation>, Vec<Inline>),
    /// Inline code
    Code(Attr, String),
    /// Inter-word space
    Space,
    /// Soft line break
    SoftBreak,
    /// Hard line break
    LineBreak,
    /// TeX math
    Math(MathType, String),
    /// Raw markup for the given format
    RawInline(String, String),
    /// Hyperlink
    Link(Attr, Vec<Inline>, Target),
    /// Image
    Image(Attr, Vec<Inline>, Target),
    /// Footnote or endnote
    Note(Vec<Block>),
    /// Generic inline container
    Span(Attr, Vec<Inline>),
}

impl Inline {
    /// Create a text node.
    pub fn str(text: impl Into<String>) -> Self {
        Inline::Str(text.into())
    }

    /// Create a raw inline for the given format.
    pub fn raw(format: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::RawInline(format.into(), text.into())
    }

    /// Split text on spaces into `Str` / `Space` nodes, as pandoc's
    /// readers do for plain prose.
    pub fn words(text: &str) -> Vec<Inline> {
        let mut out = Vec::new();
        for (i, word) in text.split(' ').filter(|w| !w.is_empty()).enumerate() {
            if i > 0 {
                out.push(Inline::Space);
            }
            out.push(Inline::str(word));
        }
        out
    }

    /// Node kind as it appears in the `"t"` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Inline::Str(_) => "Str",
            Inline::Emph(_) => "Emph",
            Inline::Underline(_) => "Underline",
            Inline::Strong(_) => "Strong",
            Inline::Strikeout(_) => "Strikeout",
            Inline::Superscript(_) => "Superscript",
            Inline::Subscript(_) => "Subscript",
            Inline::SmallCaps(_) => "SmallCaps",
            Inline::Quoted(..) => "Quoted",
            Inline::Cite(..) => "Cite",
            Inline::Code(..) => "Code",
            Inline::Space => "Space",
            Inline::SoftBreak => "SoftBreak",
            Inline::LineBreak => "LineBreak",
            Inline::Math(..) => "Math",
            Inline::RawInline(..) => "RawInline",
            Inline::Link(..) => "Link",
            Inline::Image(..) => "Image",
            Inline::Note(_) => "Note",
            Inline::Span(..) => "Span",
        }
    }

    /// Plain text of this node and its inline children.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Str(s) => s.clone(),
            Inline::Code(_, s) | Inline::Math(_, s) => s.clone(),
            Inline::Space | Inline::SoftBreak => " ".to_string(),
            Inline::LineBreak => "\n".to_string(),
            Inline::Emph(c)
            | Inline::Underline(c)
            | Inline::Strong(c)
            | Inline::Strikeout(c)
            | Inline::Superscript(c)
            | Inline::Subscript(c)
            | Inline::SmallCaps(c)
            | Inline::Quoted(_, c)
            | Inline::Cite(_, c)
            | Inline::Link(_, c, _)
            | Inline::Image(_, c, _)
            | Inline::Span(_, c) => c.iter().map(Inline::plain_text).collect(),
            Inline::RawInline(..) | Inline::Note(_) => String::new(),
        }
    }
}

/// Quotation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum QuoteType {
    /// Single quotes
    SingleQuote,
    /// Double quotes
    DoubleQuote,
}

/// Math display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum MathType {
    /// Display math
    DisplayMath,
    /// Inline math
    InlineMath,
}

/// A single citation inside a `Cite` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Citation key
    pub citation_id: String,

    /// Text before the citation
    pub citation_prefix: Vec<Inline>,

    /// Text after the citation
    pub citation_suffix: Vec<Inline>,

    /// Citation mode
    pub citation_mode: CitationMode,

    /// Note number
    pub citation_note_num: i32,

    /// Citation hash
    pub citation_hash: i32,
}

/// How a citation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum CitationMode {
    /// Author in text
    AuthorInText,
    /// Author suppressed
    SuppressAuthor,
    /// Normal citation
    NormalCitation,
}

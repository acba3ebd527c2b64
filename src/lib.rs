//! # panlatex
//!
//! Pandoc JSON filters that render code listings and tables as LaTeX.
//!
//! A pandoc filter reads the document tree pandoc emits with `-t json`,
//! rewrites some nodes, and writes the tree back. This crate provides the
//! tree model, a generic filter walker, and two LaTeX renderers:
//!
//! - [`latex::MintedFilter`]: code blocks and inline code as `minted` markup
//! - [`latex::PrettyTablesFilter`]: captioned tables as ruled `tabular` floats
//!
//! ## Quick Start
//!
//! ```
//! use panlatex::latex::PrettyTablesFilter;
//! use panlatex::JsonFormat;
//!
//! fn main() -> panlatex::Result<()> {
//!     let input = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[]}"#;
//!     let mut output = Vec::new();
//!
//!     let mut filter = PrettyTablesFilter::default();
//!     panlatex::run_filter(&mut filter, "latex", input.as_bytes(), &mut output, JsonFormat::Compact)?;
//!
//!     assert!(output.starts_with(br#"{"pandoc-api-version":[1,23,1]"#));
//!     Ok(())
//! }
//! ```
//!
//! ## Writing a filter
//!
//! Implement [`NodeFilter`] and return a [`FilterAction`] for the nodes of
//! interest. The walker takes care of every container node in between.

pub mod decompose;
pub mod error;
pub mod filter;
pub mod json;
pub mod latex;
pub mod model;

// Re-export commonly used types
pub use decompose::{CodeParts, ColumnLayout, TableParts};
pub use error::{Error, Result};
pub use filter::{
    walk_document, CompositeFilter, FilterAction, FilterContext, IdentityFilter, NodeFilter,
    WalkStats, Walker,
};
pub use json::JsonFormat;
pub use latex::{MintedFilter, MintedOptions, PrettyTablesFilter, TableOptions};
pub use model::{Attr, Block, Document, Inline, Meta, MetaValue, Table};

use std::io::{Read, Write};

/// Apply a filter to a decoded document.
///
/// Equivalent to [`walk_document`]; kept as the entry point for callers
/// that already hold a [`Document`].
pub fn apply_filter<F: NodeFilter + ?Sized>(
    doc: Document,
    filter: &mut F,
    format: &str,
) -> Result<Document> {
    walk_document(doc, filter, format)
}

/// Run a filter over a JSON document stream.
///
/// Reads the whole tree from `reader`, applies the filter for `format`,
/// and writes the result to `writer`. Nothing is written on error.
///
/// # Example
///
/// ```
/// use panlatex::{run_filter, IdentityFilter, JsonFormat};
///
/// let input = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[{"t":"HorizontalRule"}]}"#;
/// let mut output = Vec::new();
/// run_filter(&mut IdentityFilter, "html", input.as_bytes(), &mut output, JsonFormat::Compact)?;
/// assert_eq!(String::from_utf8(output).unwrap().trim_end(), input);
/// # Ok::<(), panlatex::Error>(())
/// ```
pub fn run_filter<F, R, W>(
    filter: &mut F,
    format: &str,
    reader: R,
    writer: W,
    json_format: JsonFormat,
) -> Result<()>
where
    F: NodeFilter + ?Sized,
    R: Read,
    W: Write,
{
    let doc = json::from_reader(reader)?;
    let doc = apply_filter(doc, filter, format)?;
    json::write_document(&doc, writer, json_format)
}

/// Run a filter over a JSON string and return the filtered JSON.
pub fn filter_str<F: NodeFilter + ?Sized>(filter: &mut F, format: &str, input: &str) -> Result<String> {
    let doc = json::from_str(input)?;
    let doc = apply_filter(doc, filter, format)?;
    json::to_json(&doc, JsonFormat::Compact)
}

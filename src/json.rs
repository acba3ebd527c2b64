//! JSON encoding of pandoc document trees.

use crate::error::{Error, Result};
use crate::model::Document;
use std::io::{Read, Write};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    Pretty,
    /// Compact JSON without extra whitespace (what pandoc itself emits)
    #[default]
    Compact,
}

/// Decode a document from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    check_api_version(&doc);
    Ok(doc)
}

/// Decode a document from a string.
pub fn from_str(input: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(input)?;
    check_api_version(&doc);
    Ok(doc)
}

/// Encode a document to a JSON string.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Encode a document into a writer, followed by a newline.
pub fn write_document<W: Write>(doc: &Document, mut writer: W, format: JsonFormat) -> Result<()> {
    let json = to_json(doc, format)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn check_api_version(doc: &Document) {
    if !doc.is_supported_api_version() {
        log::warn!(
            "pandoc-api-version {:?} is outside the supported 1.22-1.23 range",
            doc.api_version
        );
    }
}

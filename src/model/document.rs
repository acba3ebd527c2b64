//! Document-level types.

use super::{Block, Inline};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// pandoc-types API version written into new documents.
pub const API_VERSION: [u32; 3] = [1, 23, 1];

/// Document metadata.
pub type Meta = BTreeMap<String, MetaValue>;

/// A complete pandoc document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// pandoc-types API version the tree was produced with
    #[serde(rename = "pandoc-api-version")]
    pub api_version: Vec<u32>,

    /// Document metadata
    pub meta: Meta,

    /// Body blocks
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document at the current API version.
    pub fn new() -> Self {
        Self {
            api_version: API_VERSION.to_vec(),
            meta: Meta::new(),
            blocks: Vec::new(),
        }
    }

    /// Create a document holding the given blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::new()
        }
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Set a metadata entry.
    pub fn set_meta(&mut self, key: impl Into<String>, value: MetaValue) {
        self.meta.insert(key.into(), value);
    }

    /// Check whether the API version is one whose table and figure shapes
    /// this model understands (1.22 and 1.23).
    pub fn is_supported_api_version(&self) -> bool {
        matches!(self.api_version.as_slice(), [1, 22 | 23, ..])
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MetaValue {
    /// Nested mapping
    MetaMap(BTreeMap<String, MetaValue>),
    /// List of values
    MetaList(Vec<MetaValue>),
    /// Boolean
    MetaBool(bool),
    /// Uninterpreted string
    MetaString(String),
    /// Inline content
    MetaInlines(Vec<Inline>),
    /// Block content
    MetaBlocks(Vec<Block>),
}

impl MetaValue {
    /// Plain string value, if this is a `MetaString`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::MetaString(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_envelope() {
        let json = r#"{"pandoc-api-version":[1,23,1],"meta":{"title":{"t":"MetaInlines","c":[{"t":"Str","c":"Report"}]}},"blocks":[{"t":"HorizontalRule"}]}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.api_version, vec![1, 23, 1]);
        assert!(doc.is_supported_api_version());
        assert!(matches!(doc.meta.get("title"), Some(MetaValue::MetaInlines(_))));
        assert_eq!(serde_json::to_string(&doc).unwrap(), json);
    }

    #[test]
    fn test_missing_blocks_rejected() {
        let result: Result<Document, _> =
            serde_json::from_str(r#"{"pandoc-api-version":[1,23,1],"meta":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_version_support() {
        let mut doc = Document::new();
        assert!(doc.is_supported_api_version());
        doc.api_version = vec![1, 17, 5];
        assert!(!doc.is_supported_api_version());
    }

    #[test]
    fn test_meta_values() {
        let mut doc = Document::new();
        doc.set_meta("lang", MetaValue::MetaString("en".to_string()));
        doc.set_meta("draft", MetaValue::MetaBool(true));
        assert_eq!(doc.meta["lang"].as_str(), Some("en"));
        assert_eq!(doc.meta["draft"].as_str(), None);
    }
}

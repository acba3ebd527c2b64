//! Pandoc document model.
//!
//! This module mirrors the pandoc-types 1.23 AST as closed Rust enums.
//! Every node kind is one enum variant, encoded on the wire as
//! `{"t": kind, "c": payload}` (unit kinds carry no `"c"`), so any JSON
//! that does not match a known node shape is rejected while decoding
//! rather than surfacing later as a missing field.

/// Serde impls for pandoc records that travel as positional JSON arrays
/// (`Attr`, `Cell`, `Caption`, ...) while keeping named fields in Rust.
macro_rules! array_encoded {
    ($ty:ident { $($field:ident : $fty:ty),+ $(,)? }) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&($(&self.$field,)+), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let ($($field,)+): ($($fty,)+) = serde::Deserialize::deserialize(deserializer)?;
                Ok(Self { $($field),+ })
            }
        }
    };
}

mod attr;
mod block;
mod document;
mod inline;
mod table;

pub use attr::{Attr, Target};
pub use block::{Block, Caption, ListAttributes, ListNumberDelim, ListNumberStyle};
pub use document::{Document, Meta, MetaValue, API_VERSION};
pub use inline::{Citation, CitationMode, Inline, MathType, QuoteType};
pub use table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};

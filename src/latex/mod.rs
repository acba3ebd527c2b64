//! LaTeX renderers for code and tables.

mod minted;
mod options;
mod tables;
pub mod template;

pub use minted::{MintedFilter, TEMPLATE_FIELDS};
pub use options::{
    MintedOptions, TableOptions, DEFAULT_BLOCK_TEMPLATE, DEFAULT_INLINE_TEMPLATE,
    DEFAULT_LANGUAGE, DEFAULT_TARGET_FORMAT,
};
pub use tables::{justify, PrettyTablesFilter};
pub use template::Template;

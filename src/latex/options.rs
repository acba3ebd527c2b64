//! Filter options and configuration.

/// Output format both filters target unless configured otherwise.
pub const DEFAULT_TARGET_FORMAT: &str = "latex";

/// Language used for code without a class.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Block listing: a captioned, labelled `listing` float around `minted`.
pub const DEFAULT_BLOCK_TEMPLATE: &str = "\n\\begin{listing}\n\\begin{minted}[$attributes]{$language}\n$contents\n\\end{minted}\n\\caption{$caption}\n\\label{$label}\n\\end{listing}\n";

/// Inline code: a single `\mintinline` invocation.
pub const DEFAULT_INLINE_TEMPLATE: &str = "\\mintinline[$attributes]{$language}{$contents}";

/// Options for the minted code filter.
#[derive(Debug, Clone)]
pub struct MintedOptions {
    /// Output format the filter acts on
    pub target_format: String,

    /// Language for code nodes without a class
    pub default_language: String,

    /// Template for `CodeBlock` nodes
    pub block_template: String,

    /// Template for inline `Code` nodes
    pub inline_template: String,
}

impl MintedOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format the filter acts on.
    pub fn with_target_format(mut self, format: impl Into<String>) -> Self {
        self.target_format = format.into();
        self
    }

    /// Set the fallback language.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Set the code block template.
    pub fn with_block_template(mut self, template: impl Into<String>) -> Self {
        self.block_template = template.into();
        self
    }

    /// Set the inline code template.
    pub fn with_inline_template(mut self, template: impl Into<String>) -> Self {
        self.inline_template = template.into();
        self
    }
}

impl Default for MintedOptions {
    fn default() -> Self {
        Self {
            target_format: DEFAULT_TARGET_FORMAT.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            block_template: DEFAULT_BLOCK_TEMPLATE.to_string(),
            inline_template: DEFAULT_INLINE_TEMPLATE.to_string(),
        }
    }
}

/// Options for the table filter.
///
/// Every LaTeX token the renderer emits is configurable so that variants
/// (e.g. `beamer`, `tabularx`-style widths) reuse the same code.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Output format the filter acts on
    pub target_format: String,

    /// Float placement specifier (`h`, `htbp`, ...); empty for none
    pub placement: String,

    /// Length the column widths are fractions of
    pub text_width: String,

    /// Length subtracted twice per column for inter-column padding
    pub column_gap: String,

    /// Token between cells of a row
    pub cell_separator: String,

    /// Token that ends a row
    pub row_end: String,

    /// Horizontal rule token
    pub rule: String,

    /// Macro wrapping each header cell (without backslash)
    pub header_macro: String,

    /// Caption macro (without backslash)
    pub caption_macro: String,

    /// Decimal places for width fractions
    pub width_precision: usize,
}

impl TableOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format the filter acts on.
    pub fn with_target_format(mut self, format: impl Into<String>) -> Self {
        self.target_format = format.into();
        self
    }

    /// Set the float placement specifier.
    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Set the length column widths are fractions of.
    pub fn with_text_width(mut self, width: impl Into<String>) -> Self {
        self.text_width = width.into();
        self
    }

    /// Set the cell separator token.
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }

    /// Set the horizontal rule token.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Set the header cell macro.
    pub fn with_header_macro(mut self, name: impl Into<String>) -> Self {
        self.header_macro = name.into();
        self
    }

    /// Set the caption macro.
    pub fn with_caption_macro(mut self, name: impl Into<String>) -> Self {
        self.caption_macro = name.into();
        self
    }

    /// Set the number of decimals for width fractions.
    pub fn with_width_precision(mut self, precision: usize) -> Self {
        self.width_precision = precision;
        self
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            target_format: DEFAULT_TARGET_FORMAT.to_string(),
            placement: "h".to_string(),
            text_width: "\\columnwidth".to_string(),
            column_gap: "\\tabcolsep".to_string(),
            cell_separator: " & ".to_string(),
            row_end: " \\\\".to_string(),
            rule: "\\hline".to_string(),
            header_macro: "textbf".to_string(),
            caption_macro: "caption".to_string(),
            width_precision: 4,
        }
    }
}

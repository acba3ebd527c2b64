//! Table types.

use super::{Attr, Block, Caption, Inline};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// Encoded as `[Attr, Caption, [ColSpec], TableHead, [TableBody], TableFoot]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Table attributes
    pub attr: Attr,

    /// Table caption (empty for table-shaped metadata values)
    pub caption: Caption,

    /// One spec per column
    pub col_specs: Vec<ColSpec>,

    /// Header rows
    pub head: TableHead,

    /// Body sections
    pub bodies: Vec<TableBody>,

    /// Footer rows
    pub foot: TableFoot,
}

array_encoded!(Table {
    attr: Attr,
    caption: Caption,
    col_specs: Vec<ColSpec>,
    head: TableHead,
    bodies: Vec<TableBody>,
    foot: TableFoot,
});

impl Table {
    /// Create an uncaptioned table with the given column specs.
    pub fn new(col_specs: Vec<ColSpec>) -> Self {
        Self {
            col_specs,
            ..Self::default()
        }
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    /// Add a header row and return self.
    pub fn with_header_row(mut self, row: Row) -> Self {
        self.head.rows.push(row);
        self
    }

    /// Add a body row to the last body (creating one if needed) and return self.
    pub fn with_body_row(mut self, row: Row) -> Self {
        if self.bodies.is_empty() {
            self.bodies.push(TableBody::default());
        }
        if let Some(body) = self.bodies.last_mut() {
            body.body.push(row);
        }
        self
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.col_specs.len()
    }

    /// Iterate over every row below the header: intermediate head rows and
    /// body rows of each body, then footer rows.
    pub fn content_rows(&self) -> impl Iterator<Item = &Row> {
        self.bodies
            .iter()
            .flat_map(|b| b.head.iter().chain(b.body.iter()))
            .chain(self.foot.rows.iter())
    }
}

/// Column alignment and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColSpec {
    /// Horizontal alignment
    pub alignment: Alignment,

    /// Relative width
    pub width: ColWidth,
}

array_encoded!(ColSpec {
    alignment: Alignment,
    width: ColWidth,
});

impl ColSpec {
    /// Create a column spec with a fixed relative width.
    pub fn new(alignment: Alignment, width: f64) -> Self {
        Self {
            alignment,
            width: ColWidth::Fixed(width),
        }
    }
}

/// Horizontal alignment of a column or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Alignment {
    /// Left aligned
    #[serde(rename = "AlignLeft")]
    Left,
    /// Right aligned
    #[serde(rename = "AlignRight")]
    Right,
    /// Centered
    #[serde(rename = "AlignCenter")]
    Center,
    /// Writer default
    #[default]
    #[serde(rename = "AlignDefault")]
    Default,
}

/// Column width as a fraction of the text width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ColWidth {
    /// Fixed fraction (0..1)
    #[serde(rename = "ColWidth")]
    Fixed(f64),
    /// Writer default
    #[default]
    #[serde(rename = "ColWidthDefault")]
    Default,
}

impl ColWidth {
    /// Fixed fraction, if any.
    pub fn fraction(&self) -> Option<f64> {
        match self {
            ColWidth::Fixed(w) => Some(*w),
            ColWidth::Default => None,
        }
    }
}

/// Table head, encoded as `[Attr, [Row]]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableHead {
    /// Head attributes
    pub attr: Attr,

    /// Header rows
    pub rows: Vec<Row>,
}

array_encoded!(TableHead {
    attr: Attr,
    rows: Vec<Row>,
});

/// Table body, encoded as `[Attr, RowHeadColumns, [Row], [Row]]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBody {
    /// Body attributes
    pub attr: Attr,

    /// Number of row-header columns
    pub row_head_columns: i32,

    /// Intermediate head rows
    pub head: Vec<Row>,

    /// Body rows
    pub body: Vec<Row>,
}

array_encoded!(TableBody {
    attr: Attr,
    row_head_columns: i32,
    head: Vec<Row>,
    body: Vec<Row>,
});

/// Table foot, encoded as `[Attr, [Row]]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFoot {
    /// Foot attributes
    pub attr: Attr,

    /// Footer rows
    pub rows: Vec<Row>,
}

array_encoded!(TableFoot {
    attr: Attr,
    rows: Vec<Row>,
});

/// A table row, encoded as `[Attr, [Cell]]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Row attributes
    pub attr: Attr,

    /// Cells in the row
    pub cells: Vec<Cell>,
}

array_encoded!(Row {
    attr: Attr,
    cells: Vec<Cell>,
});

impl Row {
    /// Create a row with cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            attr: Attr::default(),
            cells,
        }
    }

    /// Create a row of plain-text cells.
    pub fn from_strings<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(|v| Cell::text(v.as_ref())).collect())
    }
}

/// A table cell, encoded as `[Attr, Alignment, RowSpan, ColSpan, [Block]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell attributes
    pub attr: Attr,

    /// Cell alignment
    pub alignment: Alignment,

    /// Number of rows this cell spans
    pub row_span: i32,

    /// Number of columns this cell spans
    pub col_span: i32,

    /// Cell content
    pub content: Vec<Block>,
}

array_encoded!(Cell {
    attr: Attr,
    alignment: Alignment,
    row_span: i32,
    col_span: i32,
    content: Vec<Block>,
});

impl Cell {
    /// Create a cell with block content.
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            attr: Attr::default(),
            alignment: Alignment::Default,
            row_span: 1,
            col_span: 1,
            content,
        }
    }

    /// Create a cell holding a single `Plain` block of prose.
    pub fn text(text: &str) -> Self {
        Self::new(vec![Block::Plain(Inline::words(text))])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

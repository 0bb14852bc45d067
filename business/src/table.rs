//! Multiplication table construction.

use crate::{Bounds, GridSink};

/// Background class of a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Row and column share parity.
    Grey,
    Plain,
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Blank top-left cell of the header row.
    Corner,
    /// Row or column label.
    Header(i32),
    /// Product of the cell's row and column.
    Data { product: i32, shade: Shade },
}

impl Cell {
    /// Text shown inside the cell.
    pub fn label(&self) -> String {
        match self {
            Self::Corner => String::new(),
            Self::Header(index) => index.to_string(),
            Self::Data { product, .. } => product.to_string(),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// Shading of a data cell, `None` for corner and header cells.
    pub fn shade(&self) -> Option<Shade> {
        match self {
            Self::Data { shade, .. } => Some(*shade),
            Self::Corner | Self::Header(_) => None,
        }
    }
}

/// Checkerboard class for the cell at `(row, col)`.
///
/// Uses euclidean remainders so negative odd indices count as odd.
pub fn shade_for(row: i32, col: i32) -> Shade {
    if row.rem_euclid(2) == col.rem_euclid(2) {
        Shade::Grey
    } else {
        Shade::Plain
    }
}

/// A fully built multiplication table, header row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    bounds: Bounds,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Every row including the header row.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Corner cell followed by the column labels.
    pub fn header(&self) -> &[Cell] {
        &self.rows[0]
    }

    /// Rows below the header, each starting with its row label.
    pub fn body(&self) -> &[Vec<Cell>] {
        &self.rows[1..]
    }

    /// Cell for the given row and column index values.
    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        if !self.bounds.rows().contains(&row) || !self.bounds.columns().contains(&col) {
            return None;
        }
        let row_offset = usize::try_from(row - self.bounds.row_min()).ok()?;
        let col_offset = usize::try_from(col - self.bounds.col_min()).ok()?;
        self.body().get(row_offset)?.get(col_offset + 1)
    }

    /// Replaces whatever the sink shows with this table.
    pub fn mount_into<G: GridSink + ?Sized>(self, sink: &mut G) {
        sink.clear();
        for row in self.rows {
            sink.append_row(row);
        }
    }
}

/// Builds the table for already validated bounds.
pub fn build_table(bounds: &Bounds) -> Table {
    let mut rows = Vec::with_capacity(bounds.rows().count() + 1);

    let mut header = Vec::with_capacity(bounds.columns().count() + 1);
    header.push(Cell::Corner);
    header.extend(bounds.columns().map(Cell::Header));
    rows.push(header);

    for row in bounds.rows() {
        let mut cells = Vec::with_capacity(bounds.columns().count() + 1);
        cells.push(Cell::Header(row));
        cells.extend(bounds.columns().map(|col| Cell::Data {
            product: row * col,
            shade: shade_for(row, col),
        }));
        rows.push(cells);
    }

    Table {
        bounds: *bounds,
        rows,
    }
}

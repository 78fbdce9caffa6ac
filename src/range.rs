//! Rectangular regions of cell contexts
//!
//! A [`RangeContext`] holds one [`StyleContext`] per cell in row-major order,
//! as handed over by whatever reads the spreadsheet. Lookups outside the
//! region fail instead of wrapping around to another cell.

use crate::error::{CellTexError, Result};
use crate::expression::LiteralExpression;
use crate::types::StyleContext;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A1-style cell reference (0-based internally)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CellRef {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellRef {
    pub fn new(row: u32, col: u32) -> Self {
        CellRef { row, col }
    }

    /// Parse a reference such as `"B12"` or `"$B$12"`
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || CellTexError::InvalidCellRef(s.to_string());
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        let mut pos = 0;
        if bytes.first() == Some(&b'$') {
            pos += 1;
        }

        let mut col: u32 = 0;
        let letters_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            let digit = (bytes[pos].to_ascii_uppercase() - b'A') as u32 + 1;
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(digit))
                .ok_or_else(invalid)?;
            pos += 1;
        }
        if pos == letters_start {
            return Err(invalid());
        }

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let digits = &trimmed[pos..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(CellRef::new(row - 1, col - 1))
    }

    /// Parse a region such as `"A1:D5"`; a single reference is a 1x1 region
    pub fn parse_range(s: &str) -> Result<(CellRef, CellRef)> {
        let (start, end) = match s.split_once(':') {
            Some((start, end)) => (Self::parse(start), Self::parse(end)),
            None => {
                let cell = Self::parse(s);
                (cell.clone(), cell)
            }
        };
        let map_err = |_: CellTexError| CellTexError::InvalidRange(s.to_string());
        let (start, end) = (start.map_err(map_err)?, end.map_err(map_err)?);

        if end.row < start.row || end.col < start.col {
            return Err(CellTexError::InvalidRange(s.to_string()));
        }
        Ok((start, end))
    }

    /// Convert column index to letters (0 -> A, 25 -> Z, 26 -> AA)
    pub fn col_to_letter(col: u32) -> String {
        let mut result = String::new();
        let mut col = col as u64 + 1;

        while col > 0 {
            col -= 1;
            result.insert(0, (b'A' + (col % 26) as u8) as char);
            col /= 26;
        }

        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::col_to_letter(self.col), self.row as u64 + 1)
    }
}

impl FromStr for CellRef {
    type Err = CellTexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Number of (rows, cols) covered by a region string such as `"A1:D5"`
pub fn range_shape(s: &str) -> Result<(usize, usize)> {
    let (start, end) = CellRef::parse_range(s)?;
    Ok((
        (end.row - start.row) as usize + 1,
        (end.col - start.col) as usize + 1,
    ))
}

/// Row-major block of cell contexts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeContext {
    rows: usize,
    cols: usize,
    cells: Vec<StyleContext>,
    origin: CellRef,
}

impl RangeContext {
    /// Create a region from row-major contexts
    ///
    /// A region with zero rows or zero columns is normalised to 0x0.
    pub fn new(rows: usize, cols: usize, cells: Vec<StyleContext>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(CellTexError::RegionTooLarge { rows, cols })?;
        if cells.len() != expected {
            return Err(CellTexError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        let (rows, cols) = if expected == 0 { (0, 0) } else { (rows, cols) };

        Ok(RangeContext {
            rows,
            cols,
            cells,
            origin: CellRef::default(),
        })
    }

    /// Create a region from rows of equal length
    pub fn from_rows(rows: Vec<Vec<StyleContext>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let capacity = row_count
            .checked_mul(cols)
            .ok_or(CellTexError::RegionTooLarge {
                rows: row_count,
                cols,
            })?;
        let mut cells = Vec::with_capacity(capacity);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(CellTexError::RaggedRow {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }

        Self::new(row_count, cols, cells)
    }

    /// Create a region covering a sheet range such as `"A1:D5"`
    ///
    /// The origin is set to the range's top-left cell.
    pub fn for_range(range: &str, cells: Vec<StyleContext>) -> Result<Self> {
        let (start, _) = CellRef::parse_range(range)?;
        let (rows, cols) = range_shape(range)?;
        Ok(Self::new(rows, cols, cells)?.with_origin(start))
    }

    /// Anchor the region at a sheet position (top-left cell)
    pub fn with_origin(mut self, origin: CellRef) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> CellRef {
        self.origin
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Context at (row, col), relative to the region
    pub fn get(&self, row: usize, col: usize) -> Result<&StyleContext> {
        if row >= self.rows || col >= self.cols {
            return Err(CellTexError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Context at a row-major linear index
    pub fn get_index(&self, index: usize) -> Result<&StyleContext> {
        self.cells.get(index).ok_or(CellTexError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Absolute sheet reference of the cell at (row, col)
    pub fn reference(&self, row: usize, col: usize) -> Result<CellRef> {
        self.get(row, col)?;
        let overflow = || CellTexError::ReferenceOverflow {
            origin: self.origin.to_string(),
            row,
            col,
        };
        let offset = |base: u32, delta: usize| {
            u32::try_from(delta)
                .ok()
                .and_then(|delta| base.checked_add(delta))
        };

        Ok(CellRef::new(
            offset(self.origin.row, row).ok_or_else(overflow)?,
            offset(self.origin.col, col).ok_or_else(overflow)?,
        ))
    }

    /// Iterate all contexts in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, StyleContext> {
        self.cells.iter()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[StyleContext]> {
        // `chunks` rejects 0; an empty region has no cells to chunk anyway.
        self.cells.chunks(self.cols.max(1))
    }

    /// Render every cell, returning a row-major grid of fragments
    pub fn render_with<R>(&self, renderer: &R) -> Vec<Vec<String>>
    where
        R: LiteralExpression + ?Sized,
    {
        debug!(
            rows = self.rows,
            cols = self.cols,
            cells = self.cells.len(),
            origin = %self.origin,
            "rendering region"
        );

        self.rows()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, ctx)| {
                        trace!(row = r, col = c, "rendering cell");
                        renderer.evaluate(ctx)
                    })
                    .collect::<Vec<String>>()
            })
            .collect()
    }

    /// Render every cell across the rayon thread pool
    ///
    /// Output is identical to [`RangeContext::render_with`].
    #[cfg(feature = "parallel")]
    pub fn render_with_parallel<R>(&self, renderer: &R) -> Vec<Vec<String>>
    where
        R: LiteralExpression + Sync + ?Sized,
    {
        debug!(
            rows = self.rows,
            cols = self.cols,
            cells = self.cells.len(),
            origin = %self.origin,
            "rendering region in parallel"
        );

        if self.is_empty() {
            return Vec::new();
        }

        self.cells
            .par_chunks(self.cols)
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, ctx)| {
                        trace!(row = r, col = c, "rendering cell");
                        renderer.evaluate(ctx)
                    })
                    .collect::<Vec<String>>()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RangeContext {
    type Item = &'a StyleContext;
    type IntoIter = std::slice::Iter<'a, StyleContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RangeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, ctx) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", ctx)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

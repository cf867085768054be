//! Grid geometry: tile indices, tile rectangles and the per-tile size.
//!
//! A `rows` x `cols` grid splits an image of `width` x `height` pixels into
//! tiles of `width / cols` x `height / rows` pixels (floor division). The
//! tile at (row, col) covers
//!
//! ```text
//! [col * part_width, (col + 1) * part_width) x [row * part_height, (row + 1) * part_height)
//! ```
//!
//! Pixels right of `cols * part_width` or below `rows * part_height` belong
//! to no tile.

use thiserror::Error;

/// Number of tile rows in the default grid.
pub const GRID_ROWS: u32 = 4;

/// Number of tile columns in the default grid.
pub const GRID_COLS: u32 = 4;

/// Errors raised while laying out or remapping the tile grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The image is too small to give every tile at least one pixel.
    #[error("Image width or height is less than the number of segments ({cols}x{rows}): image is {width}x{height}")]
    InvalidGrid {
        width: u32,
        height: u32,
        rows: u32,
        cols: u32,
    },

    /// A transposed index falls outside the grid.
    #[error("Index is out of range: row={row}, col={col} for a {cols}x{rows} grid")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },
}

/// Grid dimensions in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GridSpec {
    /// The fixed 4x4 grid.
    pub const DEFAULT: GridSpec = GridSpec::new(GRID_ROWS, GRID_COLS);

    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Compute `(part_width, part_height)` for an image of the given size.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidGrid` if either part would be zero pixels.
    pub fn tile_size(&self, width: u32, height: u32) -> Result<(u32, u32), GridError> {
        let invalid = GridError::InvalidGrid {
            width,
            height,
            rows: self.rows,
            cols: self.cols,
        };
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid);
        }

        let part_width = width / self.cols;
        let part_height = height / self.rows;
        if part_width == 0 || part_height == 0 {
            return Err(invalid);
        }

        Ok((part_width, part_height))
    }

    /// Lay the grid out over an image of the given size.
    pub fn layout(&self, width: u32, height: u32) -> Result<TileLayout, GridError> {
        let (part_width, part_height) = self.tile_size(width, height)?;
        Ok(TileLayout {
            grid: *self,
            part_width,
            part_height,
        })
    }
}

/// Position of a tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    pub row: u32,
    pub col: u32,
}

impl TileIndex {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The index with row and column swapped.
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

/// Pixel rectangle of a tile, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A grid laid out over a concrete image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub grid: GridSpec,
    pub part_width: u32,
    pub part_height: u32,
}

impl TileLayout {
    /// Rectangle covered by the tile at `index`.
    pub fn rect(&self, index: TileIndex) -> TileRect {
        TileRect {
            x: index.col * self.part_width,
            y: index.row * self.part_height,
            width: self.part_width,
            height: self.part_height,
        }
    }

    /// All tile indices in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = TileIndex> {
        let GridSpec { rows, cols } = self.grid;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| TileIndex::new(row, col)))
    }

    /// Width covered by the tiles; columns at or beyond it are never drawn.
    pub fn covered_width(&self) -> u32 {
        self.grid.cols * self.part_width
    }

    /// Height covered by the tiles; rows at or beyond it are never drawn.
    pub fn covered_height(&self) -> u32 {
        self.grid.rows * self.part_height
    }
}

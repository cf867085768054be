//! Tile-grid transposition: tiling, compositing and remapping.
//!
//! # Transform Order
//!
//! 1. The grid is laid out over the image (`part_width = width / cols`,
//!    `part_height = height / rows`)
//! 2. Each tile is exposed as a borrowed view of the source buffer
//! 3. A transparent output buffer of the same size is allocated
//! 4. The tile at (row, col) is composited at (col, row)
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Tile indices are (row, col), both zero-based
//! - Pixels beyond `cols * part_width` or `rows * part_height` belong to no
//!   tile and stay transparent in the output

mod composite;
mod grid;
mod tiler;
mod transpose;

pub use composite::composite_over;
pub use grid::{GridError, GridSpec, TileIndex, TileLayout, TileRect, GRID_COLS, GRID_ROWS};
pub use tiler::{tile, TileGrid, TileSource, TileView};
pub use transpose::{transpose, transpose_tiles};

//! Tile-grid transposition.
//!
//! The tile at grid position (row, col) is drawn at (col, row). This is a
//! matrix transpose of the tile grid, not a rotation: pixels inside each
//! tile keep their orientation.

use image::{GenericImageView, RgbaImage};
use log::debug;

use super::composite::composite_over;
use super::grid::{GridError, GridSpec, TileRect};
use super::tiler::{tile, TileGrid, TileView};

/// Tile `source` with `grid` and transpose the tiles.
///
/// # Errors
///
/// Returns `GridError::InvalidGrid` if the image is smaller than the grid
/// and `GridError::IndexOutOfRange` if the grid is not square.
pub fn transpose(source: &RgbaImage, grid: GridSpec) -> Result<RgbaImage, GridError> {
    let tiles = tile(source, grid)?;
    transpose_tiles(source, &tiles)
}

/// Draw every tile of `tiles` at its transposed position on a new buffer.
///
/// The output has the bounds of `source` and starts fully transparent, so
/// pixels not covered by any tile stay `[0, 0, 0, 0]`.
pub fn transpose_tiles(source: &RgbaImage, tiles: &TileGrid<'_>) -> Result<RgbaImage, GridError> {
    let layout = tiles.layout();
    let GridSpec { rows, cols } = layout.grid;
    let mut output = RgbaImage::new(source.width(), source.height());

    for dest in layout.indices() {
        let from = dest.transposed();
        // `get` bounds-checks against the grid; only a non-square grid can miss
        let src_tile = tiles.get(from).ok_or(GridError::IndexOutOfRange {
            row: from.row,
            col: from.col,
            rows,
            cols,
        })?;

        draw_over(&mut output, layout.rect(dest), src_tile);
    }
    debug!("transposed {} tiles", tiles.len());

    Ok(output)
}

/// Composite a tile onto `canvas` with its top-left corner at `dest`.
fn draw_over(canvas: &mut RgbaImage, dest: TileRect, tile: &TileView<'_>) {
    for (x, y, src) in tile.view.pixels() {
        let px = canvas.get_pixel_mut(dest.x + x, dest.y + y);
        *px = composite_over(*px, src);
    }
}

//! Splitting an image into read-only tile views.
//!
//! No pixels are copied here. Each [`TileView`] borrows the source buffer
//! and exposes only its rectangle.

use image::{GenericImageView, RgbaImage, SubImage};
use log::{debug, warn};

use super::grid::{GridError, GridSpec, TileIndex, TileLayout, TileRect};

/// Buffers that can hand out rectangular sub-views of themselves.
pub trait TileSource: GenericImageView + Sized {
    /// Borrow the pixels inside `rect`.
    ///
    /// `rect` must lie within the buffer bounds.
    fn tile_view(&self, rect: TileRect) -> SubImage<&Self>;
}

impl TileSource for RgbaImage {
    fn tile_view(&self, rect: TileRect) -> SubImage<&Self> {
        self.view(rect.x, rect.y, rect.width, rect.height)
    }
}

/// A read-only window onto one tile of the source image.
pub struct TileView<'a> {
    pub index: TileIndex,
    pub rect: TileRect,
    pub view: SubImage<&'a RgbaImage>,
}

/// Every tile of a laid-out grid, stored in row-major order.
pub struct TileGrid<'a> {
    layout: TileLayout,
    tiles: Vec<TileView<'a>>,
}

impl<'a> TileGrid<'a> {
    /// The layout the tiles were cut with.
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Look up a tile, or `None` if `index` is outside the grid.
    pub fn get(&self, index: TileIndex) -> Option<&TileView<'a>> {
        let GridSpec { rows, cols } = self.layout.grid;
        if index.row >= rows || index.col >= cols {
            return None;
        }
        self.tiles.get((index.row * cols + index.col) as usize)
    }

    /// Tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &TileView<'a>> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Cut `image` into the tiles of `grid`.
///
/// # Errors
///
/// Returns `GridError::InvalidGrid` if the image is smaller than the grid.
pub fn tile(image: &RgbaImage, grid: GridSpec) -> Result<TileGrid<'_>, GridError> {
    let (width, height) = image.dimensions();
    let layout = grid.layout(width, height)?;
    debug!(
        "tiling {width}x{height} into {}x{} tiles of {}x{}",
        grid.cols, grid.rows, layout.part_width, layout.part_height
    );

    if layout.covered_width() < width || layout.covered_height() < height {
        warn!(
            "{width}x{height} is not divisible by the {}x{} grid, pixels outside {}x{} will be blank",
            grid.cols,
            grid.rows,
            layout.covered_width(),
            layout.covered_height()
        );
    }

    let tiles = layout
        .indices()
        .map(|index| {
            let rect = layout.rect(index);
            TileView {
                index,
                rect,
                view: image.tile_view(rect),
            }
        })
        .collect();

    Ok(TileGrid { layout, tiles })
}

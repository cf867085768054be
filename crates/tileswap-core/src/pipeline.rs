//! One complete run: read, decode, tile, transpose, encode, write.
//!
//! A run moves strictly forward through [`Stage`]s and stops at the first
//! error. The output file is only created once the PNG bytes exist, so a
//! failed run never leaves an output file behind.

use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::decode::DecoderRegistry;
use crate::encode::encode_png;
use crate::error::Error;
use crate::output::png_output_path;
use crate::transform::{tile, transpose_tiles, GridSpec};

/// Progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Decoded,
    Tiled,
    Transposed,
    Encoded,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Decoded => "decoded",
            Stage::Tiled => "tiled",
            Stage::Transposed => "transposed",
            Stage::Encoded => "encoded",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Decoders and grid used for a run.
pub struct Pipeline {
    registry: DecoderRegistry,
    grid: GridSpec,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// A pipeline with every built-in decoder and the 4x4 grid.
    pub fn new() -> Self {
        Self {
            registry: DecoderRegistry::with_default_formats(),
            grid: GridSpec::DEFAULT,
        }
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_registry(mut self, registry: DecoderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Decode `bytes`, transpose the tile grid and return the new buffer.
    pub fn process(&self, bytes: &[u8]) -> Result<RgbaImage, Error> {
        self.process_observed(bytes, &mut enter)
    }

    /// Transform the file at `input` and write the result next to it.
    ///
    /// Returns the path of the written PNG.
    pub fn run(&self, input: &Path) -> Result<PathBuf, Error> {
        self.run_observed(input, &mut enter)
    }

    fn process_observed(
        &self,
        bytes: &[u8],
        observe: &mut dyn FnMut(Stage),
    ) -> Result<RgbaImage, Error> {
        observe(Stage::Start);
        self.transform(bytes, observe)
    }

    fn run_observed(
        &self,
        input: &Path,
        observe: &mut dyn FnMut(Stage),
    ) -> Result<PathBuf, Error> {
        observe(Stage::Start);
        let bytes = read_input(input)?;
        let output = self.transform(&bytes, observe)?;

        let png = encode_png(&output)?;
        observe(Stage::Encoded);

        let output_path = png_output_path(input);
        write_output(&output_path, &png)?;
        observe(Stage::Done);

        Ok(output_path)
    }

    // Decoded -> Tiled -> Transposed
    fn transform(
        &self,
        bytes: &[u8],
        observe: &mut dyn FnMut(Stage),
    ) -> Result<RgbaImage, Error> {
        let source = self.registry.decode(bytes)?.into_image();
        observe(Stage::Decoded);

        let tiles = tile(&source, self.grid)?;
        observe(Stage::Tiled);

        let output = transpose_tiles(&source, &tiles)?;
        observe(Stage::Transposed);

        Ok(output)
    }
}

fn enter(stage: Stage) {
    debug!("stage: {stage}");
}

// The handle is dropped before decoding starts.
fn read_input(path: &Path) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(bytes)
}

fn write_output(path: &Path, png: &[u8]) -> Result<(), Error> {
    let mut file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(png)
        .and_then(|()| file.flush())
        .map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}

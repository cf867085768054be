//! Error type for a complete tileswap run.
//!
//! Messages carry only the short prefix; the underlying cause is exposed
//! through [`std::error::Error::source`] so it is printed once.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::GridError;

/// Every way a run can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot open input file {}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("Cannot read input file {}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("Image decoding failed")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Failed to save in PNG format")]
    Encode(#[from] EncodeError),

    #[error("Unable to create output file {}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("Unable to write output file {}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

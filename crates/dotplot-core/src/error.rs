// File: crates/dotplot-core/src/error.rs
// Summary: Errors from the raster backend. The data pipeline itself never fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("reading back {width}x{height} pixels failed")]
    Readback { width: i32, height: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

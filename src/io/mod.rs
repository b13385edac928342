//! Drawing-format import/export.
//!
//! Formats live behind cargo feature flags; when a feature is disabled
//! the corresponding module (and error variant) is not compiled.

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

use crate::errors::GeometryError;
use thiserror::Error;

/// I/O and format-conversion errors.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("i/o error: {0}")]
    StdIo(#[from] std::io::Error),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate.
    #[error("dxf error: {0}")]
    Dxf(#[from] ::dxf::DxfError),

    /// The drawing parsed but its content is unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

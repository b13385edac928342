//! Geometry errors

use thiserror::Error;

/// Fatal conditions for a single input. A failed item returns exactly
/// one of these; the batch layer catches it and moves on to the next
/// file. Recoverable conditions (too few sample points, every axis
/// rejected) are resolved internally and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The solid exposes no planar faces, so no profile can be taken.
    #[error("solid has no planar faces to take a profile from")]
    NoPlanarFaces,

    /// A 2D drawing contained no usable boundary entities.
    #[error("drawing contains no usable boundary entities")]
    EmptyDrawing,
}

use thiserror::Error;

use crate::geometry::Point;

/// Errors surfaced by the slicing pipeline. Reconstruction failures are
/// scoped to the plane they occurred on; only I/O failures end a whole run.
#[derive(Debug, Error)]
pub enum SliceError {
    /// A vertex with more than one candidate continuation segment was hit
    /// while tracing a contour. The mesh is non-manifold (or self
    /// intersecting) at this point.
    #[error("ambiguous contour at vertex {vertex}: more than one continuation")]
    InvalidMesh { vertex: Point },

    /// The configured layer height cannot drive a plane sweep.
    #[error("invalid layer height {0}: must be finite and positive")]
    InvalidLayerHeight(f64),

    /// The mesh source could not be read.
    #[error("failed to read mesh: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SliceError> = std::result::Result<T, E>;

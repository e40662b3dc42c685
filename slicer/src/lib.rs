//! Vector slicing engine. Cuts a triangulated surface mesh into horizontal
//! cross sections, each a set of closed contours tagged as solid fill or
//! hole. See [`slicer::Slicer`] for the driver and [`mesh::Mesh`] for the
//! input model.

use nalgebra::Vector3;

pub mod error;
pub mod format;
pub mod geometry;
pub mod intersection;
pub mod mesh;
pub mod pool;
pub mod reconstruct;
pub mod slicer;

pub use error::SliceError;

pub type Pos = Vector3<f64>;

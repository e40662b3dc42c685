//! Slicing driver: sweeps planes across the mesh's z extent and runs the
//! intersect / pool / reconstruct pipeline for each. Planes are independent,
//! so the sweep fans out over a rayon thread pool; a reconstruction failure
//! poisons only its own layer.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info, warn};

use common::{Progress, SliceConfig};

use crate::{
    error::SliceError,
    geometry::{round, Polygon},
    mesh::Mesh,
    pool::SegmentPool,
    reconstruct::polygons_from_pool,
};

/// One successfully sliced plane.
#[derive(Debug, Clone)]
pub struct Layer {
    pub z: f64,
    pub polygons: Vec<Polygon>,
}

/// A plane whose reconstruction failed. The rest of the run is unaffected.
#[derive(Debug)]
pub struct LayerFailure {
    pub z: f64,
    pub error: SliceError,
}

/// Everything produced by one sweep.
#[derive(Debug, Default)]
pub struct SliceResult {
    pub layers: Vec<Layer>,
    pub failures: Vec<LayerFailure>,
}

/// Used to slice a mesh.
pub struct Slicer {
    mesh: Mesh,
    levels: Vec<f64>,
    progress: Progress,
}

impl Slicer {
    /// Creates a new slicer for a mesh, precomputing the plane levels from
    /// the mesh's z extent and the configured layer height. A layer height
    /// that is zero, negative, or non-finite cannot drive a sweep and is
    /// rejected.
    pub fn new(config: &SliceConfig, mesh: Mesh) -> Result<Self, SliceError> {
        if !config.layer_height.is_finite() || config.layer_height <= 0.0 {
            return Err(SliceError::InvalidLayerHeight(config.layer_height));
        }

        let mut levels = Vec::new();
        if let Some((min_z, max_z)) = mesh.z_extent() {
            // Snap the ratio to tolerance first; 2.0 / 0.1 is 19.999... in
            // floating point and would lose the top plane.
            let count = round((max_z - min_z) / config.layer_height).floor() as usize + 1;
            let count = count.min(config.max_layers.unwrap_or(usize::MAX));
            levels.extend((0..count).map(|i| round(min_z + i as f64 * config.layer_height)));
        }

        let progress = Progress::new();
        progress.set_total(levels.len() as u64);

        Ok(Self {
            mesh,
            levels,
            progress,
        })
    }

    /// Gets a handle on the slicing [`Progress`].
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    pub fn layer_count(&self) -> usize {
        self.levels.len()
    }

    /// Run the sweep. Layers come back in ascending z order; failed planes
    /// are collected separately and logged.
    pub fn slice(&self) -> SliceResult {
        let sliced = self
            .levels
            .clone()
            .into_par_iter()
            .inspect(|_| self.progress.add_complete(1))
            .map(|z| (z, self.slice_plane(z)))
            .collect::<Vec<_>>();

        self.progress.set_finished();

        let mut result = SliceResult::default();
        for (z, outcome) in sliced {
            match outcome {
                Ok(polygons) => result.layers.push(Layer { z, polygons }),
                Err(error) => {
                    warn!("layer at z = {z} failed: {error}");
                    result.failures.push(LayerFailure { z, error });
                }
            }
        }

        info!(
            "sliced {} layer(s), {} failed",
            result.layers.len(),
            result.failures.len()
        );
        result
    }

    /// Slice a single plane.
    pub fn slice_plane(&self, z: f64) -> Result<Vec<Polygon>, SliceError> {
        let pool = SegmentPool::build(&self.mesh, z);
        debug!("z = {z}: {} segment(s) pooled", pool.len());

        polygons_from_pool(pool)
    }
}

use serde::{Deserialize, Serialize};

/// Parameters for one slicing run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SliceConfig {
    /// Vertical distance between consecutive slicing planes.
    pub layer_height: f64,
    /// Upper bound on the number of planes swept, regardless of the mesh's
    /// z extent.
    pub max_layers: Option<usize>,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            layer_height: 0.05,
            max_layers: None,
        }
    }
}

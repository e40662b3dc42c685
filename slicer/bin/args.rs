use std::path::PathBuf;

use clap::Parser;
use common::SliceConfig;

#[derive(Debug, Parser)]
/// Slice a triangulated mesh into per-layer closed contours.
pub struct Args {
    /// Path to an ASCII .stl mesh file.
    pub mesh: PathBuf,

    #[arg(long, default_value_t = 0.05)]
    /// Layer height in model units.
    pub layer_height: f64,

    #[arg(long)]
    /// Cap the number of layers sliced.
    pub max_layers: Option<usize>,

    #[arg(long)]
    /// Write an SVG contact sheet of the sliced contours to this path.
    pub svg: Option<PathBuf>,

    #[arg(short, long)]
    /// Enable debug logging.
    pub verbose: bool,
}

impl Args {
    pub fn slice_config(&self) -> SliceConfig {
        SliceConfig {
            layer_height: self.layer_height,
            max_layers: self.max_layers,
        }
    }
}

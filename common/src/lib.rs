pub mod config;
pub mod progress;

pub use config::SliceConfig;
pub use progress::Progress;

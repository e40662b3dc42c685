//! Mesh input and diagnostic output formats.

pub mod stl;
pub mod svg;

pub use stl::parse;

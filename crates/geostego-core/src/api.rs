//! Builder style entry points working on image files.

pub mod hide;
pub mod unveil;

mod shared;

pub use shared::*;

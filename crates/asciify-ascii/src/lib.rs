/// ASCII conversion engine for asciify.
///
/// Pipeline: validate the request, plan the grid, sample and quantize
/// luminance per cell, render rows to text.
pub mod geometry;
pub mod luminance;
pub mod rasterizer;
pub mod render;
pub mod validate;

pub use geometry::{GeometryPlan, plan_geometry};
pub use rasterizer::{Rasterizer, rasterize};

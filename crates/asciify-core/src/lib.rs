/// Configuration, types, and shared structures for asciify.
///
/// This crate contains the source image buffer, the density palette, the
/// rendering profiles and the error taxonomy shared across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{DENSITY_PALETTE, LuminanceLut, Palette};
pub use config::{
    DISPLAY_VERTICAL_COMPRESSION, OutputBox, OutputTarget, RasterConfig, RenderProfile,
};
pub use error::CoreError;
pub use frame::{AsciiGrid, FrameBuffer};

use thiserror::Error;

/// Errors originating from the rasterizer and its image collaborators.
///
/// Every failure is a deterministic function of the input: none of these are
/// worth retrying with the same arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Requested output box has a zero dimension.
    #[error("Invalid output bounds: {max_width}×{max_height} (both must be at least 1)")]
    InvalidParameters {
        /// Requested maximum width in characters.
        max_width: u32,
        /// Requested maximum height in characters.
        max_height: u32,
    },

    /// Source image has a zero dimension.
    #[error("Empty image: {width}×{height}")]
    EmptyImage {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// Aspect rounding collapsed one axis of the output grid to zero.
    #[error("Degenerate output grid: {width}×{height}, choose a larger box")]
    DegenerateOutput {
        /// Planned width in characters.
        width: u32,
        /// Planned height in characters.
        height: u32,
    },

    /// Image bytes could not be decoded.
    #[error("Decode failure: {reason}")]
    DecodeFailure {
        /// Message from the decoder.
        reason: String,
    },

    /// File type outside the accepted whitelist.
    #[error("Unsupported format: {format} (expected png, jpg or jpeg)")]
    UnsupportedFormat {
        /// The extension or detected format that was rejected.
        format: String,
    },

    /// Invalid configuration value or structure.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Image acquisition for asciify: format whitelist and decoding into a
/// [`FrameBuffer`](asciify_core::frame::FrameBuffer).

pub mod image;

pub use crate::image::{IMAGE_EXTS, decode_bytes, decode_path, is_supported_path};

use std::path::Path;

use ::image::{DynamicImage, ImageFormat, ImageReader};
use asciify_core::error::CoreError;
use asciify_core::frame::FrameBuffer;

/// Extensions image reconnues.
pub const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg"];

/// Whether `path` carries one of [`IMAGE_EXTS`] (case-insensitive).
///
/// # Example
/// ```
/// use asciify_source::image::is_supported_path;
/// use std::path::Path;
/// assert!(is_supported_path(Path::new("cat.JPG")));
/// assert!(!is_supported_path(Path::new("cat.gif")));
/// assert!(!is_supported_path(Path::new("cat")));
/// ```
#[must_use]
pub fn is_supported_path(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| IMAGE_EXTS.contains(&ext.as_str()))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
}

/// Charge une image PNG ou JPEG depuis le disque.
///
/// The extension must be whitelisted, but the decoder is chosen from the
/// file's leading bytes: a JPEG saved as `upload.png` decodes as JPEG. The
/// file handle lives only for the duration of the decode and is released on
/// every return path.
///
/// # Errors
/// [`CoreError::UnsupportedFormat`] if the extension is not whitelisted or
/// the content is neither PNG nor JPEG, [`CoreError::DecodeFailure`] if the
/// file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use asciify_source::image::decode_path;
/// use std::path::Path;
/// let frame = decode_path(Path::new("cat.png")).unwrap();
/// ```
pub fn decode_path(path: &Path) -> Result<FrameBuffer, CoreError> {
    if !is_supported_path(path) {
        return Err(CoreError::UnsupportedFormat {
            format: extension_of(path).unwrap_or_else(|| "<none>".to_string()),
        });
    }

    let io_failure = |e: std::io::Error| CoreError::DecodeFailure {
        reason: format!("Impossible de charger {} : {e}", path.display()),
    };
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(io_failure)?;

    // Unrecognised content keeps the format implied by the extension.
    let format = reader.format().ok_or_else(|| CoreError::DecodeFailure {
        reason: format!("Format inconnu : {}", path.display()),
    })?;
    check_format(format)?;

    let img = reader.decode().map_err(|e| CoreError::DecodeFailure {
        reason: format!("Impossible de décoder {} : {e}", path.display()),
    })?;
    log::debug!("Image {format:?} décodée depuis {}", path.display());
    into_frame(img)
}

/// Decode an in-memory PNG or JPEG, format detected from its magic bytes.
///
/// # Errors
/// [`CoreError::UnsupportedFormat`] for a recognised non-PNG/JPEG format,
/// [`CoreError::DecodeFailure`] for unrecognised or corrupt data.
///
/// # Example
/// ```
/// use asciify_source::image::decode_bytes;
/// assert!(decode_bytes(b"not an image").is_err());
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<FrameBuffer, CoreError> {
    let format = ::image::guess_format(bytes).map_err(|e| CoreError::DecodeFailure {
        reason: e.to_string(),
    })?;
    check_format(format)?;

    let img = ::image::load_from_memory_with_format(bytes, format).map_err(|e| {
        CoreError::DecodeFailure {
            reason: e.to_string(),
        }
    })?;
    log::debug!("Image {format:?} décodée depuis {} octets", bytes.len());
    into_frame(img)
}

fn check_format(format: ImageFormat) -> Result<(), CoreError> {
    if matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        Ok(())
    } else {
        Err(CoreError::UnsupportedFormat {
            format: format!("{format:?}").to_lowercase(),
        })
    }
}

fn into_frame(img: DynamicImage) -> Result<FrameBuffer, CoreError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    FrameBuffer::from_rgba(width, height, rgba.into_raw())
}

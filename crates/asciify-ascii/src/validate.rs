use asciify_core::error::CoreError;
use asciify_core::frame::FrameBuffer;

/// Check that the requested box and the source image are both usable.
///
/// Bounds are checked before the image, so a zero box over an empty image
/// reports [`CoreError::InvalidParameters`].
///
/// # Errors
/// [`CoreError::InvalidParameters`] if either bound is zero,
/// [`CoreError::EmptyImage`] if either image dimension is zero.
///
/// # Example
/// ```
/// use asciify_ascii::validate::validate_request;
/// use asciify_core::error::CoreError;
/// assert!(validate_request(10, 10, 60, 30).is_ok());
/// assert_eq!(
///     validate_request(10, 10, 0, 30),
///     Err(CoreError::InvalidParameters { max_width: 0, max_height: 30 })
/// );
/// ```
pub fn validate_request(
    img_width: u32,
    img_height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(), CoreError> {
    if max_width == 0 || max_height == 0 {
        return Err(CoreError::InvalidParameters {
            max_width,
            max_height,
        });
    }
    if img_width == 0 || img_height == 0 {
        return Err(CoreError::EmptyImage {
            width: img_width,
            height: img_height,
        });
    }
    Ok(())
}

/// [`validate_request`] against a decoded frame, bounds first.
///
/// # Errors
/// Same as [`validate_request`].
///
/// # Example
/// ```
/// use asciify_ascii::validate::validate_frame;
/// use asciify_core::error::CoreError;
/// use asciify_core::frame::FrameBuffer;
/// assert_eq!(
///     validate_frame(&FrameBuffer::new(0, 4), 60, 30),
///     Err(CoreError::EmptyImage { width: 0, height: 4 })
/// );
/// ```
pub fn validate_frame(frame: &FrameBuffer, max_width: u32, max_height: u32) -> Result<(), CoreError> {
    if max_width == 0 || max_height == 0 {
        return Err(CoreError::InvalidParameters {
            max_width,
            max_height,
        });
    }
    if frame.is_empty() {
        return Err(CoreError::EmptyImage {
            width: frame.width,
            height: frame.height,
        });
    }
    Ok(())
}

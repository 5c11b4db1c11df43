use std::cmp::Ordering;

use asciify_core::config::RenderProfile;
use asciify_core::error::CoreError;

use crate::validate::validate_request;

/// Dimensions de la grille de sortie, en caractères.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryPlan {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

/// Derive the output grid from the requested box and the image's aspect ratio.
///
/// The long side of the image takes its full maximum and the other side is
/// scaled proportionally; a square image fills the box. Under
/// [`RenderProfile::Display`] the box is first capped at the image's pixel
/// size, and the planned height is then multiplied by the vertical compression
/// factor. If the result still overflows the box on either axis it is scaled
/// down until it fits.
///
/// Scaling is done in `f64` and rounded half away from zero.
///
/// # Errors
/// Validation errors from [`validate_request`], or
/// [`CoreError::DegenerateOutput`] when rounding leaves an axis at zero.
///
/// # Example
/// ```
/// use asciify_ascii::geometry::{plan_geometry, GeometryPlan};
/// use asciify_core::config::RenderProfile;
///
/// let plan = plan_geometry(100, 50, 60, 30, RenderProfile::Proportional).unwrap();
/// assert_eq!(plan, GeometryPlan { width: 60, height: 30 });
///
/// let plan = plan_geometry(200, 200, 60, 30, RenderProfile::Display).unwrap();
/// assert_eq!(plan, GeometryPlan { width: 60, height: 15 });
/// ```
pub fn plan_geometry(
    img_width: u32,
    img_height: u32,
    max_width: u32,
    max_height: u32,
    profile: RenderProfile,
) -> Result<GeometryPlan, CoreError> {
    validate_request(img_width, img_height, max_width, max_height)?;

    let (max_width, max_height) = if profile.caps_native_resolution() {
        (max_width.min(img_width), max_height.min(img_height))
    } else {
        (max_width, max_height)
    };

    let (mut width, mut height) = match img_width.cmp(&img_height) {
        Ordering::Greater => (max_width, scale(max_width, img_height, img_width)),
        Ordering::Less => (scale(max_height, img_width, img_height), max_height),
        Ordering::Equal => (max_width, max_height),
    };

    height = compress(height, profile.vertical_compression());

    // Keep the grid inside the box, shrinking the other axis with it.
    if height > max_height {
        width = scale(width, max_height, height);
        height = max_height;
    }
    if width > max_width {
        height = scale(height, max_width, width);
        width = max_width;
    }

    if width == 0 || height == 0 {
        return Err(CoreError::DegenerateOutput { width, height });
    }

    log::debug!(
        "Plan {img_width}×{img_height} px → {width}×{height} car. (profil {profile})"
    );
    Ok(GeometryPlan { width, height })
}

/// `round(value × num / den)`; `den` is never zero here.
#[inline]
fn scale(value: u32, num: u32, den: u32) -> u32 {
    (f64::from(value) * f64::from(num) / f64::from(den)).round() as u32
}

#[inline]
fn compress(height: u32, factor: f64) -> u32 {
    (f64::from(height) * factor).round() as u32
}

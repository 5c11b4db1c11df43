use asciify_core::charset::{LuminanceLut, Palette};
use asciify_core::config::RenderProfile;
use asciify_core::error::CoreError;
use asciify_core::frame::{AsciiGrid, FrameBuffer};

use crate::geometry::{GeometryPlan, plan_geometry};
use crate::luminance::process_luminance;
use crate::render::render_text;
use crate::validate::validate_frame;

/// Image → texte monospace.
///
/// Holds only immutable configuration (the profile and the LUT derived from
/// the palette), so one instance can serve any number of images from any
/// number of threads.
///
/// # Example
/// ```
/// use asciify_ascii::rasterizer::Rasterizer;
/// use asciify_core::config::RenderProfile;
/// use asciify_core::frame::FrameBuffer;
///
/// let rasterizer = Rasterizer::with_profile(RenderProfile::Proportional);
/// let frame = FrameBuffer::solid(100, 50, (0, 0, 0));
/// let text = rasterizer.rasterize(&frame, 60, 30).unwrap();
/// assert_eq!(text.lines().count(), 30);
/// assert!(text.lines().all(|l| l.len() == 60));
/// ```
#[derive(Clone, Debug)]
pub struct Rasterizer {
    profile: RenderProfile,
    lut: LuminanceLut,
}

impl Rasterizer {
    /// Create a rasterizer for `palette` and `profile`.
    #[must_use]
    pub fn new(palette: Palette, profile: RenderProfile) -> Self {
        Self {
            profile,
            lut: LuminanceLut::new(palette),
        }
    }

    /// Density palette with the given profile.
    #[must_use]
    pub fn with_profile(profile: RenderProfile) -> Self {
        Self::new(Palette::DENSITY, profile)
    }

    /// Active sizing profile.
    #[must_use]
    pub fn profile(&self) -> RenderProfile {
        self.profile
    }

    /// Grid size this rasterizer would produce for `frame`.
    ///
    /// # Errors
    /// Same as [`plan_geometry`].
    pub fn plan(
        &self,
        frame: &FrameBuffer,
        max_width: u32,
        max_height: u32,
    ) -> Result<GeometryPlan, CoreError> {
        validate_frame(frame, max_width, max_height)?;
        plan_geometry(frame.width, frame.height, max_width, max_height, self.profile)
    }

    /// Validate, plan and sample into a fresh grid.
    ///
    /// # Errors
    /// [`CoreError::InvalidParameters`], [`CoreError::EmptyImage`] or
    /// [`CoreError::DegenerateOutput`]; no grid is produced on error.
    pub fn rasterize_grid(
        &self,
        frame: &FrameBuffer,
        max_width: u32,
        max_height: u32,
    ) -> Result<AsciiGrid, CoreError> {
        let plan = self.plan(frame, max_width, max_height)?;
        let mut grid = AsciiGrid::new(plan.width, plan.height);
        process_luminance(frame, &self.lut, &mut grid);
        Ok(grid)
    }

    /// Full pipeline: returns `height` lines of `width` glyphs, each ending in `\n`.
    ///
    /// # Errors
    /// See [`Rasterizer::rasterize_grid`].
    pub fn rasterize(
        &self,
        frame: &FrameBuffer,
        max_width: u32,
        max_height: u32,
    ) -> Result<String, CoreError> {
        let grid = self.rasterize_grid(frame, max_width, max_height)?;
        Ok(render_text(&grid))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::with_profile(RenderProfile::default())
    }
}

/// One-shot convenience over [`Rasterizer`] with the density palette.
///
/// # Errors
/// See [`Rasterizer::rasterize_grid`].
///
/// # Example
/// ```
/// use asciify_ascii::rasterizer::rasterize;
/// use asciify_core::config::RenderProfile;
/// use asciify_core::frame::FrameBuffer;
///
/// let frame = FrameBuffer::solid(200, 200, (255, 255, 255));
/// let text = rasterize(&frame, 60, 30, RenderProfile::Display).unwrap();
/// assert_eq!(text.lines().count(), 15);
/// ```
pub fn rasterize(
    frame: &FrameBuffer,
    max_width: u32,
    max_height: u32,
    profile: RenderProfile,
) -> Result<String, CoreError> {
    Rasterizer::with_profile(profile).rasterize(frame, max_width, max_height)
}

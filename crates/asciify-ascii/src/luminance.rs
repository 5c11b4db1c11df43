use asciify_core::charset::LuminanceLut;
use asciify_core::frame::{AsciiGrid, FrameBuffer};

/// Source pixel for grid cell (cx, cy): `floor(cx × W / grid_w)`, same for y.
///
/// Integer arithmetic, so the mapping is exact and deterministic.
///
/// # Example
/// ```
/// use asciify_ascii::luminance::source_pixel;
/// assert_eq!(source_pixel(0, 0, (100, 50), (60, 30)), (0, 0));
/// assert_eq!(source_pixel(59, 29, (100, 50), (60, 30)), (98, 48));
/// ```
#[inline(always)]
#[must_use]
pub fn source_pixel(cx: u32, cy: u32, frame: (u32, u32), grid: (u32, u32)) -> (u32, u32) {
    let (fw, fh) = frame;
    let (gw, gh) = grid;
    let px = u64::from(cx) * u64::from(fw) / u64::from(gw.max(1));
    let py = u64::from(cy) * u64::from(fh) / u64::from(gh.max(1));
    (
        (px as u32).min(fw.saturating_sub(1)),
        (py as u32).min(fh.saturating_sub(1)),
    )
}

/// Fill `grid` from `frame` by nearest-pixel sampling and luminance lookup.
///
/// For each cell, samples the back-mapped pixel, converts it to BT.601
/// luminance and maps it to a glyph via the LUT. No blending, no dithering.
///
/// # Example
/// ```
/// use asciify_core::frame::{FrameBuffer, AsciiGrid};
/// use asciify_core::charset::{LuminanceLut, Palette};
/// use asciify_ascii::luminance::process_luminance;
///
/// let frame = FrameBuffer::solid(10, 10, (255, 255, 255));
/// let mut grid = AsciiGrid::new(5, 5);
/// process_luminance(&frame, &LuminanceLut::new(Palette::DENSITY), &mut grid);
/// assert!(grid.cells.iter().all(|&c| c == ' '));
/// ```
pub fn process_luminance(frame: &FrameBuffer, lut: &LuminanceLut, grid: &mut AsciiGrid) {
    let frame_dims = (frame.width, frame.height);
    let grid_dims = (grid.width, grid.height);
    for cy in 0..grid.height {
        for cx in 0..grid.width {
            let (px, py) = source_pixel(cx, cy, frame_dims, grid_dims);
            grid.set(cx, cy, lut.map(frame.luminance(px, py)));
        }
    }
}

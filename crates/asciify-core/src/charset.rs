/// 70 caractères — Paul Bourke, ordonnés du plus dense au plus clair.
///
/// Index 0 is the darkest glyph, the final space the lightest.
pub const DENSITY_PALETTE: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Ordered glyph ramp used to render luminance, densest first.
///
/// The only palette the rasterizer ships is [`Palette::DENSITY`]; the type
/// exists so the ramp travels as an explicit value instead of a global.
///
/// # Example
/// ```
/// use asciify_core::charset::Palette;
/// let palette = Palette::DENSITY;
/// assert_eq!(palette.len(), 70);
/// assert_eq!(palette.glyph(0), '$');
/// assert_eq!(palette.glyph(palette.len() - 1), ' ');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: &'static [u8],
}

impl Palette {
    /// The built-in dense→sparse ramp.
    pub const DENSITY: Self = Self {
        glyphs: DENSITY_PALETTE.as_bytes(),
    };

    /// Number of glyphs (L).
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for [`Palette::DENSITY`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last entry.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        char::from(self.glyphs[index.min(self.glyphs.len() - 1)])
    }

    /// Palette index for a luminance value: `floor(Y × L / 256)`, clamped to L-1.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::Palette;
    /// let p = Palette::DENSITY;
    /// assert_eq!(p.index_for(0), 0);
    /// assert_eq!(p.index_for(255), p.len() - 1);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index_for(&self, luminance: u8) -> usize {
        let len = self.glyphs.len();
        (usize::from(luminance) * len / 256).min(len - 1)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DENSITY
    }
}

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed once per rasterizer for O(1) per-cell cost.
///
/// # Example
/// ```
/// use asciify_core::charset::{LuminanceLut, Palette};
/// let lut = LuminanceLut::new(Palette::DENSITY);
/// assert_eq!(lut.map(0), '$');
/// assert_eq!(lut.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct LuminanceLut {
    lut: [u8; 256],
}

impl LuminanceLut {
    /// Build a LUT from a dense→sparse palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        let mut lut = [b' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = palette.glyphs[palette.index_for(i as u8)];
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        char::from(self.lut[luminance as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_palette_is_ascii_and_ends_with_space() {
        assert!(DENSITY_PALETTE.is_ascii());
        assert_eq!(DENSITY_PALETTE.len(), 70);
        assert!(DENSITY_PALETTE.ends_with(' '));
        assert!(DENSITY_PALETTE.starts_with('$'));
    }

    #[test]
    fn index_extremes_clamp() {
        let p = Palette::DENSITY;
        assert_eq!(p.index_for(0), 0);
        assert_eq!(p.index_for(255), p.len() - 1);
        // 3 × 70 / 256 = 0.82
        assert_eq!(p.index_for(3), 0);
        // 4 × 70 / 256 = 1.09
        assert_eq!(p.index_for(4), 1);
    }

    #[test]
    fn index_monotonic_in_luminance() {
        let p = Palette::DENSITY;
        let mut prev = 0usize;
        for y in 0..=255u8 {
            let idx = p.index_for(y);
            assert!(idx >= prev, "index non monotone à luminance {y}");
            prev = idx;
        }
    }

    #[test]
    fn every_glyph_reachable() {
        let p = Palette::DENSITY;
        let mut seen = vec![false; p.len()];
        for y in 0..=255u8 {
            seen[p.index_for(y)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn lut_matches_palette() {
        let p = Palette::DENSITY;
        let lut = LuminanceLut::new(p);
        for y in 0..=255u8 {
            assert_eq!(lut.map(y), p.glyph(p.index_for(y)));
        }
    }

    #[test]
    fn glyph_clamps_out_of_range() {
        assert_eq!(Palette::DENSITY.glyph(10_000), ' ');
    }
}

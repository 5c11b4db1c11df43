use crate::error::CoreError;

/// Image source décodée, en lecture seule pour le rasterizer.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use asciify_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `data` is not exactly `width × height × 4` bytes.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::from_rgba(2, 1, vec![255; 8]).unwrap();
    /// assert_eq!(fb.luminance(1, 0), 255);
    /// assert!(FrameBuffer::from_rgba(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CoreError::Config(format!(
                "RGBA buffer of {} bytes does not match {width}×{height} (expected {expected})",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer rempli d'une seule couleur opaque.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::solid(3, 2, (255, 255, 255));
    /// assert_eq!(fb.pixel(2, 1), (255, 255, 255, 255));
    /// ```
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgb.0, rgb.1, rgb.2, 255]);
        }
        fb
    }

    /// True if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// Out-of-range coordinates read as transparent black.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// let (r, g, b, a) = fb.pixel(0, 0);
    /// assert_eq!((r, g, b, a), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        if x >= self.width || y >= self.height {
            return (0, 0, 0, 0);
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        match self.data.get(idx..idx + 4) {
            Some(px) => (px[0], px[1], px[2], px[3]),
            None => (0, 0, 0, 0),
        }
    }

    /// Overwrite pixel (x, y). Out-of-range writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
    }

    /// Luminance perceptuelle BT.601, alpha ignoré.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::solid(1, 1, (255, 255, 255));
    /// assert_eq!(fb.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        luma_bt601(r, g, b)
    }
}

/// ITU-R BT.601 luma in integer math: `(299 R + 587 G + 114 B) / 1000`.
///
/// # Example
/// ```
/// use asciify_core::frame::luma_bt601;
/// assert_eq!(luma_bt601(0, 0, 0), 0);
/// assert_eq!(luma_bt601(255, 255, 255), 255);
/// assert_eq!(luma_bt601(255, 0, 0), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
}

/// Grille de sortie ASCII, une instance fraîche par appel.
///
/// # Example
/// ```
/// use asciify_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(4, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.get(0, 0), '@');
/// assert_eq!(grid.get(3, 1), ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set the glyph at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Glyph at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Row `y` as a slice.
    ///
    /// # Example
    /// ```
    /// use asciify_core::frame::AsciiGrid;
    /// let mut grid = AsciiGrid::new(3, 2);
    /// grid.set(1, 1, '#');
    /// assert_eq!(grid.row(1), &[' ', '#', ' ']);
    /// ```
    #[must_use]
    pub fn row(&self, y: u32) -> &[char] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_weights_order() {
        // G > R > B in BT.601
        assert!(luma_bt601(0, 255, 0) > luma_bt601(255, 0, 0));
        assert!(luma_bt601(255, 0, 0) > luma_bt601(0, 0, 255));
    }

    #[test]
    fn luminance_ignores_alpha() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.set_pixel(0, 0, (200, 200, 200, 0));
        assert_eq!(fb.luminance(0, 0), 200);
    }

    #[test]
    fn pixel_out_of_range_reads_transparent_black() {
        let fb = FrameBuffer::solid(2, 2, (255, 255, 255));
        // x past the row end must not wrap onto the next row.
        assert_eq!(fb.pixel(2, 0), (0, 0, 0, 0));
        assert_eq!(fb.pixel(0, 2), (0, 0, 0, 0));
        assert_eq!(fb.pixel(9, 9), (0, 0, 0, 0));
        assert_eq!(fb.pixel(1, 1), (255, 255, 255, 255));
    }

    #[test]
    fn set_pixel_out_of_range_is_noop() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(5, 5, (1, 2, 3, 4));
        assert!(fb.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_detection() {
        assert!(FrameBuffer::new(0, 10).is_empty());
        assert!(FrameBuffer::new(10, 0).is_empty());
        assert!(!FrameBuffer::new(1, 1).is_empty());
    }

    #[test]
    fn grid_rows_cover_all_cells() {
        let grid = AsciiGrid::new(5, 3);
        let rows: Vec<&[char]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 5));
    }
}

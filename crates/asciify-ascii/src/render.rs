use asciify_core::frame::AsciiGrid;

/// Assemble the grid into text: one line per row, each ending in `\n`.
///
/// # Example
/// ```
/// use asciify_core::frame::AsciiGrid;
/// use asciify_ascii::render::render_text;
/// let mut grid = AsciiGrid::new(2, 2);
/// grid.set(0, 0, '#');
/// assert_eq!(render_text(&grid), "# \n  \n");
/// ```
#[must_use]
pub fn render_text(grid: &AsciiGrid) -> String {
    let mut out = String::with_capacity((grid.width as usize + 1) * grid.height as usize);
    for row in grid.rows() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

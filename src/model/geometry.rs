/// Maps between scene pixels and grid cells.
///
/// The scene is `cell_size * cols` by `cell_size * rows` pixels. Pointer
/// positions are kept half a cell away from the borders, so the snapped
/// cursor always lies on a full cell.
#[derive(Clone, Copy, Debug)]
pub struct GridGeometry {
    cols: usize,
    rows: usize,
    cell_size: f64,
}

impl GridGeometry {
    pub fn new(cols: usize, rows: usize, cell_size: f64) -> Self {
        assert!(cols >= 1 && rows >= 1 && cell_size > 0.);
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn margin(&self) -> f64 {
        self.cell_size / 2.
    }

    pub fn scene_width(&self) -> f64 {
        self.cell_size * self.cols as f64
    }

    pub fn scene_height(&self) -> f64 {
        self.cell_size * self.rows as f64
    }

    /// Clamps a raw pointer position into the scene, `margin` away from
    /// the borders.
    pub fn clamp_to_scene(&self, px: f64, py: f64) -> (f64, f64) {
        (
            px.clamp(self.margin(), self.scene_width() - self.margin()),
            py.clamp(self.margin(), self.scene_height() - self.margin()),
        )
    }

    /// Cell under a scene-pixel position (floor of the pitch division).
    pub fn cell_at(&self, px: f64, py: f64) -> (i32, i32) {
        (
            (px / self.cell_size).floor() as i32,
            (py / self.cell_size).floor() as i32,
        )
    }

    /// Pixel position aligned to the cell lattice: the center of the cell
    /// `cell_at` selects. Snapping and selection share one convention, so
    /// the highlighted cell is always the cell a click would hit.
    pub fn snap_to_lattice(&self, px: f64, py: f64) -> (f64, f64) {
        let (cx, cy) = self.cell_at(px, py);
        self.cell_center(cx, cy)
    }

    /// Top-left corner of a cell in scene pixels.
    pub fn cell_origin(&self, cx: i32, cy: i32) -> (f64, f64) {
        (cx as f64 * self.cell_size, cy as f64 * self.cell_size)
    }

    pub fn cell_center(&self, cx: i32, cy: i32) -> (f64, f64) {
        let (x, y) = self.cell_origin(cx, cy);
        (x + self.margin(), y + self.margin())
    }
}

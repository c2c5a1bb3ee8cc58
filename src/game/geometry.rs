use super::config::GameConfig;

/// An axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Zero-area rectangle, used to mark unused segment slots
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Same size, translated by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Bounding-box overlap test. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (ax, ay) = (self.x as i64, self.y as i64);
        let (bx, by) = (other.x as i64, other.y as i64);

        ax < bx + other.w as i64
            && bx < ax + self.w as i64
            && ay < by + other.h as i64
            && by < ay + self.h as i64
    }
}

/// Grid geometry of the play area.
///
/// The window is split into square cells of `cell` pixels. The outermost
/// ring of cells is wall; everything inside is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: u32,
    pub height: u32,
    pub cell: u32,
    pub cols: i32,
    pub rows: i32,
}

impl Playfield {
    pub fn new(width: u32, height: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        Self {
            width,
            height,
            cell,
            cols: i32::try_from(width / cell).unwrap_or(i32::MAX),
            rows: i32::try_from(height / cell).unwrap_or(i32::MAX),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.window_width, config.window_height, config.cell_size)
    }

    /// Pixel rectangle of a grid cell
    pub fn cell_rect(&self, col: i32, row: i32) -> Rect {
        let size = self.cell as i32;
        Rect::new(col * size, row * size, self.cell, self.cell)
    }

    /// Grid cell containing the rectangle's top-left corner
    pub fn cell_of(&self, rect: &Rect) -> (i32, i32) {
        let size = self.cell as i32;
        (rect.x.div_euclid(size), rect.y.div_euclid(size))
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    /// Playable columns and rows, excluding the wall ring
    pub fn interior_size(&self) -> (i32, i32) {
        ((self.cols - 2).max(0), (self.rows - 2).max(0))
    }

    /// Number of playable cells; also the snake's segment capacity
    pub fn capacity(&self) -> usize {
        let (w, h) = self.interior_size();
        (w as usize).saturating_mul(h as usize)
    }

    /// All playable cells, row by row
    pub fn interior_cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (1..self.rows - 1)
            .flat_map(move |row| (1..self.cols - 1).map(move |col| self.cell_rect(col, row)))
    }

    pub fn center_cell(&self) -> Rect {
        self.cell_rect(self.cols / 2, self.rows / 2)
    }

    /// The wall ring as four strips: top, bottom, left, right
    pub fn wall_rects(&self) -> [Rect; 4] {
        let size = self.cell as i32;
        let span_w = self.cols as u32 * self.cell;
        let inner_h = (self.rows - 2).max(0) as u32 * self.cell;

        [
            Rect::new(0, 0, span_w, self.cell),
            Rect::new(0, (self.rows - 1) * size, span_w, self.cell),
            Rect::new(0, size, self.cell, inner_h),
            Rect::new((self.cols - 1) * size, size, self.cell, inner_h),
        ]
    }

    /// True if the rectangle touches the wall or leaves the grid
    pub fn hits_wall(&self, rect: &Rect) -> bool {
        let (col, row) = self.cell_of(rect);
        !self.in_bounds(col, row)
            || self
                .wall_rects()
                .iter()
                .any(|wall| wall.intersects(rect))
    }
}

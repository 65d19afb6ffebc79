//! Level domain: grid cells and the arena matrix.
//!
//! The matrix is the authority on what occupies each cell and what blocks
//! movement. Bombs cache their armed flag here so collision queries never
//! have to reach into the ECS.

use bevy::prelude::*;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridCell {
    #[default]
    Empty,
    Wall {
        destructible: bool,
    },
    Bomb {
        bomb: Entity,
        armed: bool,
    },
}

impl GridCell {
    pub fn hard_wall() -> Self {
        GridCell::Wall {
            destructible: false,
        }
    }

    pub fn soft_wall() -> Self {
        GridCell::Wall { destructible: true }
    }

    /// Whether a mover may stand in this cell. Total over every variant:
    /// walls of either kind block, bombs block only once armed.
    pub fn is_passable(self) -> bool {
        match self {
            GridCell::Empty => true,
            GridCell::Wall { .. } => false,
            GridCell::Bomb { armed, .. } => !armed,
        }
    }
}

/// Row-major arena grid in y-down cell coordinates (row 0 at the top).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelMatrix {
    rows: usize,
    cols: usize,
    tile_size: f32,
    cells: Vec<GridCell>,
}

impl LevelMatrix {
    /// Build a matrix with every cell set to `fill`.
    pub(crate) fn filled(rows: usize, cols: usize, tile_size: f32, fill: GridCell) -> Self {
        Self {
            rows,
            cols,
            tile_size,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: GridCell) {
        if self.in_bounds(row, col) {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Out-of-bounds counts as blocked.
    pub fn is_passable(&self, row: usize, col: usize) -> bool {
        match self.cell(row, col) {
            Some(cell) => cell.is_passable(),
            None => false,
        }
    }

    /// Pixel-space rect covered by a cell.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let t = self.tile_size;
        let x = col as f32 * t;
        let y = row as f32 * t;
        Rect::new(x, y, x + t, y + t)
    }

    /// Cell containing a pixel-space point, or None outside the arena.
    pub fn cell_of_point(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.tile_size) as usize;
        let row = (y / self.tile_size) as usize;
        if self.in_bounds(row, col) {
            Some((row, col))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), GridCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| ((i / self.cols, i % self.cols), cell))
    }

    /// Whether `hitbox` strictly overlaps any blocked cell. Cells are scanned
    /// from the rect's span; anything outside the arena blocks.
    pub fn rect_blocked(&self, hitbox: Rect) -> bool {
        let t = self.tile_size;
        let col_lo = (hitbox.min.x / t).floor() as i64;
        let col_hi = (hitbox.max.x / t).ceil() as i64 - 1;
        let row_lo = (hitbox.min.y / t).floor() as i64;
        let row_hi = (hitbox.max.y / t).ceil() as i64 - 1;
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if row < 0 || col < 0 {
                    return true;
                }
                if !self.is_passable(row as usize, col as usize) {
                    return true;
                }
            }
        }
        false
    }

    // ----
    // Bomb cell transitions. Each checks the cell still belongs to the caller
    // and reports whether it applied.
    // ----

    /// Claim an empty cell for a freshly placed, still passable bomb.
    pub fn reserve_for_bomb(&mut self, row: usize, col: usize, bomb: Entity) -> bool {
        if self.cell(row, col) != Some(GridCell::Empty) {
            return false;
        }
        self.set(row, col, GridCell::Bomb { bomb, armed: false });
        true
    }

    /// One-way transition to the blocking state.
    pub fn arm_bomb(&mut self, row: usize, col: usize, bomb: Entity) -> bool {
        match self.cell(row, col) {
            Some(GridCell::Bomb { bomb: occupant, .. }) if occupant == bomb => {
                self.set(row, col, GridCell::Bomb { bomb, armed: true });
                true
            }
            _ => false,
        }
    }

    /// Release an expired bomb's cell back to empty.
    pub fn clear_bomb(&mut self, row: usize, col: usize, bomb: Entity) -> bool {
        match self.cell(row, col) {
            Some(GridCell::Bomb { bomb: occupant, .. }) if occupant == bomb => {
                self.set(row, col, GridCell::Empty);
                true
            }
            _ => false,
        }
    }
}

/// Strict AABB overlap: rects sharing only an edge do not collide.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

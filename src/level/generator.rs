//! Level domain: seeded arena generation.

use rand::Rng;

use super::grid::{GridCell, LevelMatrix};

/// The 3x3 cell neighborhood around the spawn cell. Kept clear of
/// destructible fill so a fresh player always has room to move; structural
/// walls inside it are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnZone {
    pub row_min: usize,
    pub row_max: usize,
    pub col_min: usize,
    pub col_max: usize,
}

impl SpawnZone {
    pub fn around(row: usize, col: usize) -> Self {
        Self {
            row_min: row.saturating_sub(1),
            row_max: row + 1,
            col_min: col.saturating_sub(1),
            col_max: col + 1,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row_min && row <= self.row_max && col >= self.col_min && col <= self.col_max
    }
}

/// Generation failures surfaced before any entities are spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    TooSmall { rows: usize, cols: usize },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::TooSmall { rows, cols } => {
                write!(f, "Arena of {}x{} cells is below the 2x2 minimum", rows, cols)
            }
        }
    }
}

impl LevelMatrix {
    /// Generate an arena.
    ///
    /// Structural walls (border plus the even/even pillar lattice) claim
    /// their cells first; every remaining cell outside the spawn zone then
    /// gets a destructible-wall draw. One cell in `soft_wall_one_in` becomes
    /// a destructible wall; zero disables the fill. The same seed always
    /// produces the same arena.
    pub fn generate(
        rows: usize,
        cols: usize,
        tile_size: f32,
        spawn: (usize, usize),
        soft_wall_one_in: u32,
        rng: &mut impl Rng,
    ) -> Result<LevelMatrix, LevelError> {
        if rows < 2 || cols < 2 {
            return Err(LevelError::TooSmall { rows, cols });
        }

        let mut matrix = LevelMatrix::filled(rows, cols, tile_size, GridCell::Empty);
        let zone = SpawnZone::around(spawn.0, spawn.1);

        for row in 0..rows {
            for col in 0..cols {
                if is_structural(row, col, rows, cols) {
                    matrix.set(row, col, GridCell::hard_wall());
                    continue;
                }
                if zone.contains(row, col) {
                    continue;
                }
                if soft_wall_one_in > 0 && rng.random_range(0..soft_wall_one_in) == 0 {
                    matrix.set(row, col, GridCell::soft_wall());
                }
            }
        }

        Ok(matrix)
    }
}

/// Border cells and the even/even pillar lattice are always walls.
fn is_structural(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    row == 0
        || row == rows - 1
        || col == 0
        || col == cols - 1
        || (row % 2 == 0 && col % 2 == 0)
}

//! Square grid of cell states.
//!
//! Cells are stored as a flat row-major array: index = row * size + col.

use std::fmt;

use rand::Rng;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            _ => Err(GridError::InvalidCell(v)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell as u8
    }
}

/// One generation: an N x N matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

impl Grid {
    /// Allocate an all-dead grid.
    pub fn dead(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let len = size.checked_mul(size).ok_or(GridError::TooLarge(size))?;
        Ok(Self {
            cells: vec![Cell::Dead; len],
            size,
        })
    }

    /// All-dead grid with the same shape as `other`.
    pub fn dead_like(other: &Grid) -> Self {
        Self {
            cells: vec![Cell::Dead; other.cells.len()],
            size: other.size,
        }
    }

    /// Seed a grid where each cell is independently alive with probability `density`.
    ///
    /// One uniform draw in [0, 1) is taken per cell in row-major order, so the
    /// result is a pure function of (size, density, rng state).
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let mut grid = Self::dead(size)?;
        for cell in grid.cells.iter_mut() {
            if rng.r#gen::<f64>() < density {
                *cell = Cell::Alive;
            }
        }
        Ok(grid)
    }

    /// Build a grid from literal rows of 0/1 values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            for v in row {
                cells.push(Cell::try_from(v)?);
            }
        }
        Ok(Self { cells, size })
    }

    /// Build a grid with exactly the listed coordinates alive.
    pub fn from_live_cells(size: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::dead(size)?;
        for &(row, col) in alive {
            if row >= size || col >= size {
                return Err(GridError::OutOfBounds { row, col, size });
            }
            grid.cells[row * size + col] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col). Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major cell buffer, used by the engine to fill the next generation.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Copy out as nested 0/1 rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", u8::from(*cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summary of a single generation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    /// Number of live cells.
    pub population: usize,
    /// Fraction of cells alive.
    pub density: f64,
}

impl GridStats {
    pub fn from_grid(grid: &Grid) -> Self {
        let population = grid.population();
        Self {
            population,
            density: population as f64 / grid.cells().len() as f64,
        }
    }
}

/// Grid construction errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GridError {
    #[error("Grid size must be non-zero")]
    EmptyGrid,
    #[error("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Cell value {0} is not a valid state (expected 0 or 1)")]
    InvalidCell(u8),
    #[error("Population density {0} must lie in [0, 1]")]
    InvalidDensity(f64),
    #[error("Cell ({row}, {col}) lies outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("Grid size {0} is too large: {0}x{0} cells overflows usize")]
    TooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dead_grid() {
        let grid = Grid::dead(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Grid::dead(0), Err(GridError::EmptyGrid));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(0, 0.5, &mut rng), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let size = 1usize << (usize::BITS / 2);
        assert_eq!(Grid::dead(size), Err(GridError::TooLarge(size)));
        assert_eq!(Grid::dead(usize::MAX), Err(GridError::TooLarge(usize::MAX)));
        assert_eq!(
            Grid::from_live_cells(size, &[]),
            Err(GridError::TooLarge(size))
        );
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let a = Grid::random(16, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(16, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty = Grid::random(10, 0.0, &mut rng).unwrap();
        assert_eq!(empty.population(), 0);

        let full = Grid::random(10, 1.0, &mut rng).unwrap();
        assert_eq!(full.population(), 100);
    }

    #[test]
    fn test_random_density_roughly_matches() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(100, 0.5, &mut rng).unwrap();
        let stats = GridStats::from_grid(&grid);
        assert!(
            (stats.density - 0.5).abs() < 0.05,
            "Density too far from 0.5: {}",
            stats.density
        );
    }

    #[test]
    fn test_invalid_density() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Grid::random(4, 1.5, &mut rng),
            Err(GridError::InvalidDensity(1.5))
        );
        assert!(Grid::random(4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![1, 1]]).unwrap();
        assert_eq!(grid.get(0, 0), Cell::Dead);
        assert_eq!(grid.get(0, 1), Cell::Alive);
        assert_eq!(grid.row(1), &[Cell::Alive, Cell::Alive]);
        assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![1, 1]]);
    }

    #[test]
    fn test_from_rows_rejects_jagged_and_invalid() {
        assert_eq!(
            Grid::from_rows(vec![vec![0, 1], vec![1]]),
            Err(GridError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![0, 9], vec![1, 0]]),
            Err(GridError::InvalidCell(9))
        );
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_from_live_cells() {
        let grid = Grid::from_live_cells(3, &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.population(), 2);
        assert!(grid.get(2, 1).is_alive());
        assert_eq!(
            Grid::from_live_cells(3, &[(3, 0)]),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(grid.to_string(), "1 0\n0 1\n");
    }
}

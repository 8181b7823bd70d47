use std::cmp::Ordering;

/// Occupancy state of a quantized surface, divided into rows and columns of equally sized cells.
/// Cells are stored row-major in a flat vector.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
    pub n_rows: usize,
    pub n_cols: usize,
}

impl OccupancyGrid {
    /// Creates a grid with all cells free
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            cells: vec![false; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    /// Finds the first run of `n_blocks` consecutive free cells within a single row.
    /// Rows are scanned top to bottom, start columns left to right.
    /// Returns the (row, col) of the start of the run.
    pub fn first_fit(&self, n_blocks: usize) -> Option<(usize, usize)> {
        if n_blocks > self.n_cols {
            return None;
        }
        (0..self.n_rows).find_map(|row| {
            (0..=self.n_cols - n_blocks)
                .find(|&col| self.run_is_free(row, col, n_blocks))
                .map(|col| (row, col))
        })
    }

    /// Marks `n_blocks` cells starting from (row, col) as occupied.
    pub fn occupy(&mut self, row: usize, col: usize, n_blocks: usize) {
        debug_assert!(self.run_is_free(row, col, n_blocks));
        for c in col..col + n_blocks {
            let idx = self.to_index(row, c).expect("run out of bounds");
            self.cells[idx] = true;
        }
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        match self.to_index(row, col) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    pub fn n_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    fn run_is_free(&self, row: usize, col: usize, n_blocks: usize) -> bool {
        (col..col + n_blocks).all(|c| matches!(self.to_index(row, c), Some(idx) if !self.cells[idx]))
    }

    pub fn to_index(&self, row: usize, col: usize) -> Option<usize> {
        match (row.cmp(&self.n_rows), col.cmp(&self.n_cols)) {
            (Ordering::Less, Ordering::Less) => Some(row * self.n_cols + col),
            _ => None, //out of bounds
        }
    }
}

//! Dense 2D grid of a thermodynamic variable over the PT domain.

/// A dense `rows × cols` matrix of f64 values in row-major order.
///
/// Rows run along the temperature axis, columns along the pressure axis.
/// Grids are produced fresh per query and owned by the caller; the cells a
/// sparse data file leaves unlisted stay at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl PixelGrid {
    /// Create a zero-filled grid.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a grid from an existing row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "buffer length must match shape");
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Write a value at a 0-based flat position.
    pub fn set_flat(&mut self, index: usize, value: f64) {
        self.data[index] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Minimum and maximum over the finite cells, for color scaling.
    /// Returns None when no cell is finite.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.data {
            if !v.is_finite() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Element-wise accumulation of another grid of the same shape.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn add_assign(&mut self, other: &PixelGrid) {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "grid shapes must match"
        );
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
    }

    /// Element-wise division by another grid of the same shape.
    ///
    /// Division by zero is not special-cased: it yields NaN or ±inf in the
    /// affected cells, which downstream consumers must tolerate.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn div_assign(&mut self, other: &PixelGrid) {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "grid shapes must match"
        );
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a /= b;
        }
    }
}

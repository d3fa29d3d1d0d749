//! Pairwise Pearson correlation matrices
//!
//! Builds the square, symmetric matrix of Pearson correlation coefficients
//! over a set of named numeric columns, together with the upper-triangle
//! mask used to suppress the redundant half when rendering.

/// A square, symmetric matrix of pairwise Pearson correlation coefficients.
///
/// Diagonal entries are exactly 1.0; off-diagonal entries lie in `[-1, 1]`.
/// Recomputed fresh for every analysis run, never persisted.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Column labels, in matrix row/column order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns) in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true when the matrix has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The coefficient at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row][column]
    }

    /// Boolean mask of the same shape, `true` strictly above the main
    /// diagonal.
    ///
    /// Masked cells are excluded from display so only the lower triangle,
    /// diagonal included, is rendered.
    #[must_use]
    pub fn upper_triangle_mask(&self) -> Vec<Vec<bool>> {
        let n = self.len();
        (0..n)
            .map(|row| (0..n).map(|column| column > row).collect())
            .collect()
    }
}

/// Computes the Pearson correlation coefficient between two equal-length
/// samples.
///
/// # Preconditions
/// Both slices must have the same non-zero length and non-zero variance;
/// zero variance in either sample leaves the coefficient undefined (NaN).
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    ss_xy / (ss_xx * ss_yy).sqrt()
}

/// Builds the full pairwise correlation matrix over named columns.
///
/// Only the lower triangle is computed; the upper half mirrors it so the
/// result is exactly symmetric, and diagonal entries are set to exactly 1.0.
///
/// # Preconditions
/// All columns must have the same non-zero length. Zero-variance columns
/// produce undefined (NaN) coefficients against every other column.
#[must_use]
pub fn correlation_matrix(columns: &[(String, Vec<f64>)]) -> CorrelationMatrix {
    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];

    for row in 0..n {
        values[row][row] = 1.0;
        for column in 0..row {
            let r = pearson(&columns[row].1, &columns[column].1);
            values[row][column] = r;
            values[column][row] = r;
        }
    }

    CorrelationMatrix {
        labels: columns.iter().map(|(name, _)| name.clone()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, values: &[f64]) -> (String, Vec<f64>) {
        (name.to_string(), values.to_vec())
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let doubled = vec![2.0, 4.0, 6.0, 8.0];
        let negated = vec![4.0, 3.0, 2.0, 1.0];

        assert!((pearson(&x, &doubled) - 1.0).abs() < 1e-10);
        assert!((pearson(&x, &negated) - (-1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_pearson_uncorrelated() {
        // Symmetric V shape: no linear association
        let x = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
        let y = vec![4.0, 1.0, 0.0, 1.0, 4.0];
        assert!(pearson(&x, &y).abs() < 1e-10);
    }

    #[test]
    fn test_matrix_diagonal_is_exactly_one() {
        let columns = vec![
            column("a", &[1.0, 2.0, 3.0, 4.0]),
            column("b", &[2.0, 1.0, 4.0, 3.0]),
            column("c", &[1.0, 3.0, 2.0, 5.0]),
        ];
        let matrix = correlation_matrix(&columns);

        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
        }
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let columns = vec![
            column("a", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            column("b", &[2.0, 1.0, 4.0, 3.0, 6.0]),
            column("c", &[5.0, 3.0, 2.0, 1.0, 4.0]),
        ];
        let matrix = correlation_matrix(&columns);

        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_matrix_values_in_range() {
        let columns = vec![
            column("a", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            column("b", &[1.5, 2.5, 2.0, 4.5, 4.0]),
        ];
        let matrix = correlation_matrix(&columns);

        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                let r = matrix.get(i, j);
                assert!((-1.0..=1.0).contains(&r));
            }
        }
    }

    #[test]
    fn test_upper_triangle_mask() {
        let columns = vec![
            column("a", &[1.0, 2.0, 3.0]),
            column("b", &[3.0, 2.0, 1.0]),
            column("c", &[2.0, 3.0, 1.0]),
        ];
        let mask = correlation_matrix(&columns).upper_triangle_mask();

        for (row, mask_row) in mask.iter().enumerate() {
            for (column, masked) in mask_row.iter().enumerate() {
                assert_eq!(*masked, row < column);
            }
        }
    }

    #[test]
    fn test_matrix_labels_preserve_order() {
        let columns = vec![
            column("height", &[1.0, 2.0, 3.0]),
            column("weight", &[3.0, 2.0, 1.0]),
        ];
        let matrix = correlation_matrix(&columns);
        assert_eq!(matrix.labels(), ["height", "weight"]);
    }
}

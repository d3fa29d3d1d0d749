//! Ordinary least-squares line fitting
//!
//! Fits `y = intercept + slope * x` to a set of points by minimizing the
//! sum of squared vertical residuals, and evaluates the fitted line over
//! inclusive year ranges for trend extrapolation.

use std::ops::RangeInclusive;

/// A fitted line together with its fit diagnostics.
///
/// Immutable once computed. The correlation coefficient and standard error
/// are carried for reproducibility even when downstream consumers only read
/// the slope and intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line (change in y per unit of x)
    pub slope: f64,
    /// Intercept of the fitted line (value of y at x = 0)
    pub intercept: f64,
    /// Pearson correlation coefficient of the fit, 0.0 when the y-variance
    /// is zero
    pub r_value: f64,
    /// Standard error of the slope estimate; NaN when there are no residual
    /// degrees of freedom (exactly two points)
    pub std_err: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at a single x value.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Evaluates the fitted line for every year in an inclusive range,
    /// preserving range order.
    ///
    /// The range may extend past the fitted data; predictions beyond the
    /// last observed year are extrapolations of the fitted trend.
    #[must_use]
    pub fn predict_years(&self, years: RangeInclusive<i32>) -> Vec<(i32, f64)> {
        years
            .map(|year| (year, self.predict(f64::from(year))))
            .collect()
    }
}

/// Fits a line to `(x, y)` points by ordinary least squares.
///
/// # Preconditions
/// The input must contain at least two points with at least two distinct
/// x-values. Zero x-variance leaves the slope undefined; this is a caller
/// precondition, not a runtime check.
///
/// # Returns
/// The fitted [`LinearFit`]. The correlation coefficient is 0.0 when the
/// y-variance is zero (horizontal data), and the standard error is NaN when
/// the input has exactly two points (no residual degrees of freedom).
#[must_use]
pub fn fit_line(points: &[(f64, f64)]) -> LinearFit {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for (x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let r_value = if ss_yy == 0.0 {
        0.0
    } else {
        ss_xy / (ss_xx * ss_yy).sqrt()
    };

    // Residual sum of squares via the identity ss_res = ss_yy - slope * ss_xy.
    // Floating point can push an exact fit slightly negative.
    let ss_res = (ss_yy - slope * ss_xy).max(0.0);
    let df = n - 2.0;
    let std_err = if df > 0.0 {
        (ss_res / df / ss_xx).sqrt()
    } else {
        f64::NAN
    };

    LinearFit {
        slope,
        intercept,
        r_value,
        std_err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_fit() {
        // Points lying exactly on y = x - 1990
        let points = vec![(2000.0, 10.0), (2001.0, 11.0), (2002.0, 12.0)];
        let fit = fit_line(&points);

        assert!((fit.slope - 1.0).abs() < 1e-10);
        assert!((fit.intercept - (-1990.0)).abs() < 1e-7);
        assert!((fit.r_value - 1.0).abs() < 1e-10);
        assert!(fit.std_err.abs() < 1e-7);
    }

    #[test]
    fn test_predictions_reconstruct_sample_points() {
        let points = vec![(2000.0, 10.0), (2001.0, 11.0), (2002.0, 12.0)];
        let fit = fit_line(&points);

        for (x, y) in &points {
            assert!((fit.predict(*x) - y).abs() < 1e-7);
        }
    }

    #[test]
    fn test_predict_years_inclusive_range() {
        let points = vec![(2000.0, 10.0), (2001.0, 11.0), (2002.0, 12.0)];
        let fit = fit_line(&points);

        let predictions = fit.predict_years(2000..=2005);
        assert_eq!(predictions.len(), 6);
        assert_eq!(predictions[0].0, 2000);
        assert_eq!(predictions[5].0, 2005);
        // Extrapolated past the data, still on the fitted line
        assert!((predictions[5].1 - 15.0).abs() < 1e-7);
    }

    #[test]
    fn test_noisy_fit_diagnostics() {
        // y = 2x + 1 with symmetric noise on the middle point
        let points = vec![(0.0, 1.0), (1.0, 3.5), (2.0, 5.0), (3.0, 6.5)];
        let fit = fit_line(&points);

        assert!(fit.slope > 0.0);
        assert!(fit.r_value > 0.9);
        assert!(fit.std_err > 0.0);
        assert!(fit.std_err.is_finite());
    }

    #[test]
    fn test_horizontal_data_has_zero_r_value() {
        let points = vec![(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)];
        let fit = fit_line(&points);

        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.r_value, 0.0);
    }

    #[test]
    fn test_two_point_fit_has_nan_std_err() {
        let points = vec![(0.0, 0.0), (1.0, 2.0)];
        let fit = fit_line(&points);

        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!(fit.intercept.abs() < 1e-10);
        assert!(fit.std_err.is_nan());
    }

    #[test]
    fn test_negative_trend() {
        let points = vec![(1.0, 10.0), (2.0, 8.0), (3.0, 6.0), (4.0, 4.0)];
        let fit = fit_line(&points);

        assert!((fit.slope - (-2.0)).abs() < 1e-10);
        assert!((fit.intercept - 12.0).abs() < 1e-10);
        assert!((fit.r_value - (-1.0)).abs() < 1e-10);
    }
}

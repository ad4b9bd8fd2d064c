//! Functions for evaluating how well a polynomial fits a dataset
//!
//! # Model Fit / Regression Diagnostics
//! - [`residual_sum_of_squares`]: Total squared difference between observed and predicted values. Lower is better.
//! - [`mean_squared_error`]: Average squared difference between observed and predicted values. Lower is better.
//! - [`r_squared`]: Proportion of variance explained by the model. Higher is better (0 to 1).
//!
//! # Descriptive Statistics
//! - [`mean`]: Arithmetic mean of a dataset.
//!
//! Model selection scores (AIC, BIC) live in [`crate::score`]; they are built on
//! [`residual_sum_of_squares`] but are not measures of fit quality themselves.
//!
//! # Examples
//!
//! ```rust
//! use polyreg::statistics::{r_squared, residual_sum_of_squares};
//!
//! let y = vec![1.0, 2.0, 3.0];
//! let y_fit = vec![1.0, 2.5, 3.0];
//!
//! assert_eq!(residual_sum_of_squares(y.iter().copied(), y_fit.iter().copied()), 0.25);
//! let r2 = r_squared(y.iter().copied(), y_fit.iter().copied());
//! assert!(r2 < 1.0);
//! ```
use crate::value::Value;

/// Computes the residual sum of squares (RSS) of a model's predictions.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// RSS = Σ (y_i - y_fit_i)²
/// ```
/// </div>
///
/// # Parameters
/// - `y`: Iterator over the observed (actual) values.
/// - `y_fit`: Iterator over the predicted values from the model.
pub fn residual_sum_of_squares<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    rss_with_n(y, y_fit).0
}

/// Computes the mean squared error (MSE).
///
/// MSE measures the average squared difference between the observed and predicted values.
/// Returns `NaN` for empty input.
pub fn mean_squared_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let (rss, n) = rss_with_n(y, y_fit);
    if n == T::zero() {
        return T::nan();
    }

    rss / n
}

/// Calculate the R-squared value for a set of data.
///
/// R-squared is a number between 0 and 1 that tells you how well the model explains the data:
/// - `0` means the model explains none of the variation.
/// - `1` means the model explains all the variation.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
/// If the observed values are all equal (`SS_tot = 0`), R² is 1 for a perfect fit and 0 otherwise.
/// </div>
pub fn r_squared<T: Value>(y: impl Iterator<Item = T>, y_fit: impl Iterator<Item = T>) -> T {
    let pairs: Vec<(T, T)> = y.zip(y_fit).collect();
    if pairs.is_empty() {
        return T::nan();
    }

    let y_mean = mean(pairs.iter().map(|&(y, _)| y));
    let mut ss_res = T::zero();
    let mut ss_tot = T::zero();
    for &(y, y_fit) in &pairs {
        ss_res = ss_res + (y - y_fit).powi(2);
        ss_tot = ss_tot + (y - y_mean).powi(2);
    }

    if ss_tot == T::zero() {
        return if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };
    }

    T::one() - ss_res / ss_tot
}

/// Arithmetic mean of a dataset. Returns `NaN` for empty input.
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut n = T::zero();
    for v in data {
        sum = sum + v;
        n = n + T::one();
    }

    if n == T::zero() {
        return T::nan();
    }
    sum / n
}

/// Internal impl for reuse - returns (RSS, n)
fn rss_with_n<T: Value>(y: impl Iterator<Item = T>, y_fit: impl Iterator<Item = T>) -> (T, T) {
    let mut rss = T::zero();
    let mut n = T::zero();
    for (y, y_fit) in y.zip(y_fit) {
        rss = rss + (y - y_fit).powi(2);
        n = n + T::one();
    }

    (rss, n)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn rss_and_mse() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let y_fit = [1.5, 2.0, 2.0, 4.0];
        assert_eq!(
            residual_sum_of_squares(y.into_iter(), y_fit.into_iter()),
            1.25
        );
        assert_close!(mean_squared_error(y.into_iter(), y_fit.into_iter()), 0.3125);
    }

    #[test]
    fn empty_inputs() {
        let empty: [f64; 0] = [];
        assert_eq!(
            residual_sum_of_squares(empty.into_iter(), empty.into_iter()),
            0.0
        );
        assert!(mean_squared_error(empty.into_iter(), empty.into_iter()).is_nan());
        assert!(r_squared(empty.into_iter(), empty.into_iter()).is_nan());
        assert!(mean(empty.into_iter()).is_nan());
    }

    #[test]
    fn r_squared_bounds() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(r_squared(y.into_iter(), y.into_iter()), 1.0);

        // Predicting the mean explains nothing
        let flat = [2.0, 2.0, 2.0];
        assert_close!(r_squared(y.into_iter(), flat.into_iter()), 0.0);

        // Constant data
        assert_eq!(r_squared(flat.into_iter(), flat.into_iter()), 1.0);
        assert_eq!(r_squared(flat.into_iter(), y.into_iter()), 0.0);
    }
}

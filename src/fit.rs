use std::{borrow::Cow, ops::RangeInclusive};

use crate::{
    error::{Error, Result},
    linalg::SquareMatrix,
    polynomial::monomial,
    score::ModelScoreProvider,
    select::ModelSelector,
    statistics,
    value::{CoordExt, Point, Value},
    Polynomial, MAX_DEGREE,
};

/// Solves the least-squares normal equations `XᵀX·c = Xᵀy` for a polynomial of the given degree.
///
/// The design matrix `X[i][j] = x_iʲ` is never stored; each row is folded straight into the
/// `(d+1)×(d+1)` Gram matrix and the right-hand side.
///
/// Does not validate `degree` against the data. Callers do that.
///
/// # Errors
/// Returns [`Error::SingularMatrix`] if `XᵀX` cannot be inverted.
pub(crate) fn least_squares<T: Value>(data: &[Point<T>], degree: usize) -> Result<Vec<T>> {
    let k = degree + 1;
    let mut xtx = SquareMatrix::<T>::zeros(k);
    let mut xty = vec![T::zero(); k];

    let mut row = vec![T::zero(); k];
    for &(x, y) in data {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = monomial(j, x);
        }

        for i in 0..k {
            xty[i] = xty[i] + row[i] * y;
            for j in 0..k {
                xtx[(i, j)] = xtx[(i, j)] + row[i] * row[j];
            }
        }
    }

    xtx.solve(&xty).map_err(|e| match e {
        Error::SingularMatrix { .. } => Error::SingularMatrix { n: data.len(), k },
        other => other,
    })
}

/// Represents a polynomial curve fit for a set of data points.
///
/// `CurveFit` computes the polynomial `y = a₀ + a₁x + … + a_d xᵈ` that minimizes the sum of
/// squared residuals over the dataset. It stores both the original data and the resulting
/// coefficients.
///
/// # How it works
/// - Builds the **normal equations** `XᵀX·c = Xᵀy`, where `X[i][j] = x_iʲ`.
/// - Solves them with Gauss-Jordan elimination ([`SquareMatrix::solve`]).
/// - The solution `c` is the vector of polynomial coefficients, lowest power first.
///
/// # Type parameters
/// - `T`: Numeric type (default `f64`) implementing [`Value`].
///
/// # Example
/// ```
/// # use polyreg::CurveFit;
/// let data = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
/// let fit = CurveFit::new(data, 2).unwrap();
/// println!("Coefficients: {:?}", fit.coefficients());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFit<'data, T: Value = f64> {
    data: Cow<'data, [Point<T>]>,
    x_range: RangeInclusive<T>,
    function: Polynomial<'static, T>,
}
impl<'data, T: Value> CurveFit<'data, T> {
    /// Creates a new polynomial curve fit from already-solved coefficients.
    pub(crate) fn from_raw(data: Cow<'data, [Point<T>]>, coefficients: Vec<T>) -> Result<Self> {
        let x_range = data.x_range().ok_or(Error::InsufficientData {
            points: 0,
            required: coefficients.len(),
        })?;

        Ok(Self {
            data,
            x_range,
            function: Polynomial::owned(coefficients),
        })
    }

    /// Creates a new polynomial curve fit for the given data and degree.
    ///
    /// You can also use [`CurveFit::new_auto`] to automatically select the best degree.
    ///
    /// # Parameters
    /// - `data`: Slice of `(x, y)` points to fit. Order does not matter.
    /// - `degree`: Desired polynomial degree, `1..=`[`MAX_DEGREE`].
    ///
    /// # Errors
    /// Returns an [`Error`] in the following cases:
    /// - `Error::InsufficientData`: `data` is empty, or has fewer than `degree + 1` points.
    /// - `Error::InvalidDegree`: `degree` is 0 or above [`MAX_DEGREE`].
    /// - `Error::SingularMatrix`: the normal equations could not be solved, usually because
    ///   there are too few distinct x-values for this degree.
    ///
    /// # Example
    /// ```
    /// # use polyreg::CurveFit;
    /// let data = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let fit = CurveFit::new(data, 2).unwrap();
    /// assert_eq!(fit.coefficients().len(), 3);
    /// ```
    pub fn new(data: impl Into<Cow<'data, [Point<T>]>>, degree: usize) -> Result<Self> {
        let data: Cow<_> = data.into();
        let required = degree.saturating_add(1);

        if data.is_empty() {
            return Err(Error::InsufficientData {
                points: 0,
                required,
            });
        } else if !(1..=MAX_DEGREE).contains(&degree) {
            return Err(Error::InvalidDegree(degree));
        } else if data.len() < required {
            return Err(Error::InsufficientData {
                points: data.len(),
                required,
            });
        }

        let coefficients = least_squares(&data, degree)?;
        tracing::debug!(degree, points = data.len(), "fitted polynomial");
        Self::from_raw(data, coefficients)
    }

    /// Automatically selects the best polynomial degree and creates a curve fit.
    ///
    /// Fits every degree from 1 to `min(20, n - 1)` and keeps the one with the lowest score
    /// according to `method`. See [`ModelSelector`] for the full rules, and
    /// [`ModelSelector::sweep`] to inspect every candidate.
    ///
    /// # Choosing a scoring method
    /// - `AIC` penalizes complexity more gently and may pick a higher degree.
    /// - `BIC` imposes a harsher penalty on complexity for larger datasets.
    ///
    /// # Errors
    /// Returns [`Error`] if:
    /// - `data` has fewer than 2 points (`Error::InsufficientData`)
    /// - every candidate degree was singular (`Error::NoModelFound`)
    ///
    /// # Example
    /// ```
    /// # use polyreg::{CurveFit, score::Aic};
    /// let data = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0), (3.0, 13.0)];
    /// let fit = CurveFit::new_auto(data, &Aic).unwrap();
    /// assert_eq!(fit.degree(), 2);
    /// ```
    pub fn new_auto(
        data: impl Into<Cow<'data, [Point<T>]>>,
        method: &impl ModelScoreProvider,
    ) -> Result<Self> {
        let data: Cow<_> = data.into();
        let sweep = ModelSelector::new(method).sweep(&data)?;
        Self::from_raw(data, sweep.into_best().coefficients)
    }

    /// Computes the quality score of the polynomial fit using the specified method.
    ///
    /// # Parameters
    /// - `method`: [`ModelScoreProvider`] to use for scoring.
    ///   - `AIC`: Akaike Information Criterion
    ///   - `BIC`: Bayesian Information Criterion
    ///
    /// # Returns
    /// The score as a numeric value (`T`). Lower scores indicate better models.
    /// A perfect fit (zero RSS) scores `-∞`.
    ///
    /// # Example
    /// ```
    /// # use polyreg::{CurveFit, score::Aic};
    /// let data: &[(f64, f64)] = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.5), (3.0, 12.0)];
    /// let fit = CurveFit::new(data, 1).unwrap();
    /// let score = fit.model_score(&Aic);
    /// assert!(score.is_finite());
    /// ```
    pub fn model_score(&self, method: &impl ModelScoreProvider) -> T {
        let n = T::from_positive_int(self.data.len());
        let k = T::from_positive_int(self.coefficients().len());
        method.score(self.residual_sum_of_squares(), n, k)
    }

    /// Computes the residuals of the fit.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// residual_i = y_i - f(x_i)
    /// where
    ///   y_i = observed value, f(x_i) = predicted value from the polynomial at x_i
    /// ```
    /// </div>
    ///
    /// # Returns
    /// A vector of `(x, residual)` pairs, one per data point.
    pub fn residuals(&self) -> Vec<Point<T>> {
        self.data
            .iter()
            .map(|&(x, y)| (x, y - self.function.y(x)))
            .collect()
    }

    /// Computes the residual sum of squares (RSS) of this fit against its source data.
    ///
    /// See [`statistics::residual_sum_of_squares`].
    pub fn residual_sum_of_squares(&self) -> T {
        let y_fit = self.data.x_iter().map(|x| self.function.y(x));
        statistics::residual_sum_of_squares(self.data.y_iter(), y_fit)
    }

    /// Computes the mean squared error (MSE) of this fit against its source data.
    ///
    /// See [`statistics::mean_squared_error`].
    pub fn mean_squared_error(&self) -> T {
        let y_fit = self.data.x_iter().map(|x| self.function.y(x));
        statistics::mean_squared_error(self.data.y_iter(), y_fit)
    }

    /// Calculates the R-squared value of this fit against its source data.
    ///
    /// Values closer to 1 indicate a better fit. See [`statistics::r_squared`].
    ///
    /// # Example
    /// ```
    /// # use polyreg::CurveFit;
    /// let data: &[(f64, f64)] = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let fit = CurveFit::new(data, 2).unwrap();
    /// assert!((fit.r_squared() - 1.0).abs() < 1e-9);
    /// ```
    pub fn r_squared(&self) -> T {
        let y_fit = self.data.x_iter().map(|x| self.function.y(x));
        statistics::r_squared(self.data.y_iter(), y_fit)
    }

    /// Returns the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.function.degree()
    }

    /// Returns a reference to the polynomial’s coefficients, lowest power first.
    ///
    /// For example in the expression `y(x) = 2x^2 - 3x + 1`;
    /// coefficients = [1.0, -3.0, 2.0]
    pub fn coefficients(&self) -> &[T] {
        self.function.coefficients()
    }

    /// Returns a reference to the data points used for fitting.
    pub fn data(&self) -> &[Point<T>] {
        &self.data
    }

    /// Returns the inclusive range of x-values in the dataset.
    pub fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    /// Evaluates the fitted polynomial at a given x-value.
    ///
    /// Polynomial fits are generally only stable within [`CurveFit::x_range`], but evaluation
    /// is not restricted to it.
    ///
    /// # Example
    /// ```
    /// # use polyreg::CurveFit;
    /// let data: &[(f64, f64)] = &[(0.0, 1.0), (1.0, 3.0)];
    /// let fit = CurveFit::new(data, 1).unwrap();
    /// assert!((fit.y(2.0) - 5.0).abs() < 1e-9);
    /// ```
    pub fn y(&self, x: T) -> T {
        self.function.y(x)
    }

    /// Evaluates the fitted polynomial at `x`, or `None` if the result is not finite.
    ///
    /// See [`Polynomial::predict`].
    pub fn predict(&self, x: T) -> Option<T> {
        self.function.predict(x)
    }

    /// Returns the fitted y-values corresponding to the original x-values.
    ///
    /// This produces a vector of `(x, y)` pairs for the same x-values used in the source data.
    pub fn solution(&self) -> Vec<Point<T>> {
        self.function.solve(self.data.x_iter())
    }

    /// Returns a pure polynomial representation of the curve fit.
    ///
    /// The [`Polynomial`] form is considered a canonical function, not a fit estimate.
    pub fn as_polynomial(&self) -> &Polynomial<'static, T> {
        &self.function
    }

    /// Returns a pure polynomial representation of the curve fit, dropping the source data.
    ///
    /// # Example
    /// ```
    /// # use polyreg::CurveFit;
    /// let data = &[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let fit = CurveFit::new(data, 2).unwrap();
    /// let poly = fit.into_polynomial();
    /// let y = poly.y(10.0);
    /// ```
    pub fn into_polynomial(self) -> Polynomial<'static, T> {
        self.function
    }

    /// Returns the `{degree, coefficients}` pair describing this fit.
    pub fn result(&self) -> FitResult<T> {
        FitResult {
            degree: self.degree(),
            coefficients: self.coefficients().to_vec(),
        }
    }

    /// Returns a human-readable string of the polynomial equation, such as `f(x) = 2x^2 - 1`.
    ///
    /// See [`crate::display`] for the formatting rules.
    pub fn equation(&self) -> String {
        self.function.equation()
    }

    /// Returns the properties of the curve fit.
    ///
    /// This is a comprehensive summary of the fit's characteristics.
    pub fn properties(&self) -> FitProperties<T> {
        FitProperties {
            degree: self.degree(),
            data_points: self.data().len(),
            coefficients: self.coefficients().to_vec(),
            rss: self.residual_sum_of_squares(),
            mse: self.mean_squared_error(),
            r_squared: self.r_squared(),
        }
    }
}

impl<T: Value> AsRef<Polynomial<'static, T>> for CurveFit<'_, T> {
    fn as_ref(&self) -> &Polynomial<'static, T> {
        &self.function
    }
}

impl<T: Value> std::fmt::Display for CurveFit<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.function)
    }
}

/// The outcome of a fit: the chosen degree and its coefficients, lowest power first.
///
/// Created per fit request and never stored.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct FitResult<T: Value = f64> {
    /// The degree of the fitted polynomial.
    pub degree: usize,

    /// The coefficients of the fitted polynomial. Index `i` is the coefficient of `xⁱ`.
    pub coefficients: Vec<T>,
}
impl<T: Value> FitResult<T> {
    /// Returns the evaluable polynomial for these coefficients.
    pub fn function(&self) -> Polynomial<'_, T> {
        Polynomial::borrowed(&self.coefficients)
    }

    /// Returns the formula for these coefficients, such as `f(x) = 3x^2 - 2`.
    pub fn equation(&self) -> String {
        crate::display::formula(&self.coefficients)
    }
}

/// A set of diagnostic properties for a curve fit.
///
/// Can be serialize to JSON or other formats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct FitProperties<T: Value> {
    /// The degree of the fitted polynomial.
    pub degree: usize,

    /// The number of data points used in the fit.
    pub data_points: usize,

    /// The coefficients of the fitted polynomial.
    pub coefficients: Vec<T>,

    /// The residual sum of squares of the fit.
    pub rss: T,

    /// The mean squared error of the fit.
    pub mse: T,

    /// The R² value of the fit.
    pub r_squared: T,
}

use std::{borrow::Cow, ops::RangeInclusive};

use crate::{
    display,
    value::{Point, SteppedValues, Value},
};

/// Represents a polynomial function `y = a₀ + a₁x + a₂x² + …` by its coefficients.
///
/// Unlike [`crate::CurveFit`], this struct is **not tied to any dataset**, making it a canonical function that
/// can be evaluated for **any x-value** without range restrictions.
///
/// Coefficients are stored lowest power first, and cannot be modified once the polynomial exists;
/// a new fit always produces a new `Polynomial`.
///
/// # Type Parameters
/// - `'a`: Lifetime for borrowed coefficients, if used.
/// - `T`: Numeric type for the coefficients, default is `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<'a, T: Value = f64> {
    coefficients: Cow<'a, [T]>,
}
impl<'a, T: Value> Polynomial<'a, T> {
    /// Creates a new borrowed polynomial from a slice of coefficients.
    ///
    /// # Parameters
    /// - `coefficients`: Slice of coefficients, starting from the constant term.
    ///
    /// # Example
    /// ```
    /// # use polyreg::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]); // 1 + 2x + 3x^2
    /// assert_eq!(poly.degree(), 2);
    /// ```
    #[must_use]
    pub const fn borrowed(coefficients: &'a [T]) -> Self {
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Creates a new owned polynomial from a vector of coefficients.
    ///
    /// # Parameters
    /// - `coefficients`: Vec of coefficients, starting from the constant term.
    #[must_use]
    pub const fn owned(coefficients: Vec<T>) -> Polynomial<'static, T> {
        Polynomial {
            coefficients: Cow::Owned(coefficients),
        }
    }

    /// Converts the polynomial into an owned version, copying borrowed coefficients if needed.
    #[must_use]
    pub fn into_owned(self) -> Polynomial<'static, T> {
        Polynomial {
            coefficients: Cow::Owned(self.coefficients.into_owned()),
        }
    }

    /// Returns a reference to the polynomial’s coefficients.
    ///
    /// Index `i` holds the coefficient of `xⁱ`.
    ///
    /// For example in the expression `y(x) = 2x^2 - 3x + 1`;
    /// coefficients = [1.0, -3.0, 2.0]
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial: one less than the number of coefficients.
    ///
    /// An empty polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at a given x-value.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// y(x) = Σ (c_i * x^i)
    /// ```
    /// `x⁰` is always 1, including at `x = 0`. Empty polynomials evaluate to 0.
    /// </div>
    ///
    /// The result can be NaN or infinite for extreme inputs; see [`Polynomial::predict`].
    ///
    /// # Example
    /// ```
    /// # use polyreg::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]); // Represents 1 + 2x + 3x^2
    /// assert_eq!(poly.y(2.0), 17.0);
    /// ```
    pub fn y(&self, x: T) -> T {
        let mut y = T::zero();
        for (i, &coef) in self.coefficients.iter().enumerate() {
            y = y + coef * monomial(i, x);
        }

        y
    }

    /// Evaluates the polynomial at `x`, returning `None` if the result is not finite.
    ///
    /// This is the prediction query: a NaN or infinite result means the prediction is undefined,
    /// not that something failed.
    ///
    /// # Example
    /// ```
    /// # use polyreg::Polynomial;
    /// let poly = Polynomial::borrowed(&[0.0, 0.0, 1.0]);
    /// assert_eq!(poly.predict(3.0), Some(9.0));
    /// assert_eq!(poly.predict(f64::MAX), None);
    /// ```
    pub fn predict(&self, x: T) -> Option<T> {
        let y = self.y(x);
        y.is_finite().then_some(y)
    }

    /// Evaluates the polynomial at multiple x-values.
    ///
    /// # Returns
    /// A `Vec` of `(x, y)` pairs corresponding to each input value.
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<Point<T>> {
        x.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Evaluates the polynomial over a range of x-values with a fixed step.
    ///
    /// Useful for sampling a curve to plot.
    ///
    /// # Example
    /// ```
    /// # use polyreg::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]); // 1 + 2x + 3x^2
    /// let points = poly.solve_range(0.0..=2.0, 1.0);
    /// assert_eq!(points, vec![(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]);
    /// ```
    pub fn solve_range(&self, range: RangeInclusive<T>, step: T) -> Vec<Point<T>> {
        self.solve(SteppedValues::new(range, step))
    }

    /// Returns the formula for this polynomial, such as `f(x) = 3x^2 - 2`.
    ///
    /// See [`crate::display`] for the formatting rules.
    #[must_use]
    pub fn equation(&self) -> String {
        display::formula(self.coefficients())
    }
}

impl<T: Value> std::fmt::Display for Polynomial<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::format_polynomial(f, self.coefficients())
    }
}

impl<'a, T: Value> AsRef<Polynomial<'a, T>> for Polynomial<'a, T> {
    fn as_ref(&self) -> &Polynomial<'a, T> {
        self
    }
}

/// Evaluates the `j`th monomial basis function, `xʲ`, at `x`.
#[inline]
pub(crate) fn monomial<T: Value>(j: usize, x: T) -> T {
    match j {
        0 => T::one(),
        1 => x,
        _ => x.powi(i32::try_from(j).unwrap_or(i32::MAX)),
    }
}

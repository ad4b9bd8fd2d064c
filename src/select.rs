//! Automatic degree selection
//!
//! [`ModelSelector`] fits every candidate degree from 1 to `min(20, n - 1)`, scores each fit
//! with a [`ModelScoreProvider`] and keeps the minimum. Every candidate is recorded in a
//! [`DegreeSweep`], including the ones that could not be solved.
//!
//! # Rules
//! - A degree whose normal equations are singular is skipped and recorded as [`Outcome::Singular`].
//! - The first degree with `RSS ≤` [`PERFECT_FIT_TOLERANCE`] scores `-∞`, so nothing after it can win.
//! - A saturated degree (`degree + 1 = n`) interpolates every point. Its RSS is rounding noise, so
//!   it only competes when no lower degree has been accepted; otherwise it is recorded as
//!   [`Outcome::Saturated`].
//! - Scores are compared with strict `<`, so the lower degree wins an exact tie.
//!
//! # Example
//! ```
//! # use polyreg::{select::ModelSelector, score::Bic};
//! let data = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.1), (5.0, 9.9)];
//! let sweep = ModelSelector::new(&Bic).sweep(&data).unwrap();
//!
//! assert_eq!(sweep.candidates().len(), 4);
//! assert!(sweep.best().degree <= 3);
//! ```
use crate::{
    error::{Error, Result},
    fit::{least_squares, FitResult},
    score::ModelScoreProvider,
    statistics,
    value::{CoordExt, Point, Value},
    Polynomial, MAX_DEGREE,
};

/// Fits with a residual sum of squares at or below this are treated as perfect.
pub const PERFECT_FIT_TOLERANCE: f64 = 1e-10;

/// What happened when a candidate degree was tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T: Value = f64> {
    /// The fit was solved and scored.
    Scored {
        /// Residual sum of squares of the fit
        rss: T,
        /// Information criterion score; `-∞` for an accepted perfect fit
        score: T,
    },

    /// The fit interpolates every point and was not scored.
    Saturated {
        /// Residual sum of squares of the fit
        rss: T,
    },

    /// The normal equations were singular at this degree.
    Singular,
}

/// One entry of a [`DegreeSweep`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeCandidate<T: Value = f64> {
    /// The degree that was tried
    pub degree: usize,

    /// What happened
    pub outcome: Outcome<T>,
}

/// The complete record of an automatic degree selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeSweep<T: Value = f64> {
    candidates: Vec<DegreeCandidate<T>>,
    best: FitResult<T>,
    best_score: T,
}
impl<T: Value> DegreeSweep<T> {
    /// Every candidate degree, in the order tried (ascending).
    #[must_use]
    pub fn candidates(&self) -> &[DegreeCandidate<T>] {
        &self.candidates
    }

    /// The winning fit.
    #[must_use]
    pub fn best(&self) -> &FitResult<T> {
        &self.best
    }

    /// The winning fit's score.
    #[must_use]
    pub fn best_score(&self) -> T {
        self.best_score
    }

    /// Degrees that were skipped because their normal equations were singular.
    #[must_use]
    pub fn singular_degrees(&self) -> Vec<usize> {
        self.candidates
            .iter()
            .filter(|c| c.outcome == Outcome::Singular)
            .map(|c| c.degree)
            .collect()
    }

    /// Consumes the sweep, returning the winning fit.
    #[must_use]
    pub fn into_best(self) -> FitResult<T> {
        self.best
    }
}

/// Picks the polynomial degree that minimizes an information criterion.
///
/// # Example
/// ```
/// # use polyreg::{select::ModelSelector, score::ScoringMethod};
/// let data = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
/// let sweep = ModelSelector::new(&ScoringMethod::AIC).sweep(&data).unwrap();
///
/// // A perfect line is accepted immediately
/// assert_eq!(sweep.best().degree, 1);
/// assert_eq!(sweep.best_score(), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModelSelector<'m, M: ModelScoreProvider> {
    method: &'m M,
}
impl<'m, M: ModelScoreProvider> ModelSelector<'m, M> {
    /// Creates a selector that scores candidates with `method`.
    pub fn new(method: &'m M) -> Self {
        Self { method }
    }

    /// Fits and scores every candidate degree, returning the full record and the winner.
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] if `data` has fewer than 2 points.
    /// - [`Error::NoModelFound`] if no candidate degree could be accepted.
    pub fn sweep<T: Value>(&self, data: &[Point<T>]) -> Result<DegreeSweep<T>> {
        let n = data.len();
        let max_degree = MAX_DEGREE.min(n.saturating_sub(1));
        if max_degree < 1 {
            return Err(Error::InsufficientData {
                points: n,
                required: 2,
            });
        }

        let n_t = T::from_positive_int(n);
        let perfect = T::constant(PERFECT_FIT_TOLERANCE);

        let mut candidates = Vec::with_capacity(max_degree);
        let mut best: Option<(T, FitResult<T>)> = None;
        for degree in 1..=max_degree {
            let coefficients = match least_squares(data, degree) {
                Ok(coefficients) => coefficients,
                Err(Error::SingularMatrix { .. }) => {
                    tracing::debug!(degree, "skipping singular degree");
                    candidates.push(DegreeCandidate {
                        degree,
                        outcome: Outcome::Singular,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let function = Polynomial::borrowed(&coefficients);
            let y_fit = data.x_iter().map(|x| function.y(x));
            let rss = statistics::residual_sum_of_squares(data.y_iter(), y_fit);

            let k = degree + 1;
            let score = if best.is_none() && rss <= perfect {
                T::neg_infinity()
            } else if k == n && best.is_some() {
                tracing::debug!(degree, rss = %rss, "skipping saturated degree");
                candidates.push(DegreeCandidate {
                    degree,
                    outcome: Outcome::Saturated { rss },
                });
                continue;
            } else {
                self.method.score(rss, n_t, T::from_positive_int(k))
            };

            tracing::debug!(degree, rss = %rss, score = %score, "scored degree");
            candidates.push(DegreeCandidate {
                degree,
                outcome: Outcome::Scored { rss, score },
            });

            // NaN never compares less, so it is never accepted
            let best_score = best.as_ref().map_or(T::infinity(), |(s, _)| *s);
            if score < best_score {
                best = Some((
                    score,
                    FitResult {
                        degree,
                        coefficients,
                    },
                ));
            }
        }

        let (best_score, best) = best.ok_or(Error::NoModelFound)?;
        tracing::debug!(degree = best.degree, score = %best_score, "selected model");

        Ok(DegreeSweep {
            candidates,
            best,
            best_score,
        })
    }

    /// Runs [`ModelSelector::sweep`] and returns only the winning fit.
    ///
    /// # Errors
    /// See [`ModelSelector::sweep`].
    pub fn select<T: Value>(&self, data: &[Point<T>]) -> Result<FitResult<T>> {
        self.sweep(data).map(DegreeSweep::into_best)
    }
}

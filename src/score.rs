//! Scoring methods for model selection.
//!
//! These methods help choose the best polynomial degree by balancing fit quality and model complexity.
//! They are not measures of fit quality themselves; for that, use metrics like R².
//!
//! # Overview of Available Scoring Methods
//! - **Akaike Information Criterion (AIC)**: Balances fit quality and complexity. It tends to favor slightly more complex models if they provide a better fit.
//! - **Bayesian Information Criterion (BIC)**: Similar to AIC but applies a stricter penalty for model complexity once `n > 7`.
//!
//! The [`ModelScoreProvider`] trait defines the interface for implementing custom scoring methods.
//! [`ScoringMethod`] is a runtime-selectable wrapper around the two built-in providers.
use std::str::FromStr;

use crate::value::Value;

/// Trait for implementing scoring methods for model selection.
pub trait ModelScoreProvider {
    /// Calculate the model's score using this scoring method.
    ///
    /// # Notes
    /// - Lower scores indicate a "better" choice for automatically selecting the polynomial degree.
    /// - A zero `rss` gives `-∞`.
    ///
    /// # Parameters
    /// - `rss`: Residual sum of squares of the fitted model.
    /// - `n`: Number of observations.
    /// - `k`: Number of model parameters (`degree + 1`).
    ///
    /// # Example
    /// ```
    /// # use polyreg::score::{Aic, ModelScoreProvider};
    /// let score: f64 = Aic.score(0.5, 10.0, 3.0);
    /// assert!(score.is_finite());
    /// ```
    fn score<T: Value>(&self, rss: T, n: T, k: T) -> T;
}

/// Bayesian Information Criterion. Uses a stricter penalty for model complexity.
/// - Prefers simpler models, even if the fit is slightly worse.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// BIC is calculated as:
/// ```math
/// BIC = n * ln(RSS / n) + k * ln(n)
/// where
///   n = number of observations, k = number of model parameters
/// ```
/// </div>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bic;
impl ModelScoreProvider for Bic {
    fn score<T: Value>(&self, rss: T, n: T, k: T) -> T {
        n * (rss / n).ln() + k * n.ln()
    }
}

/// Akaike Information Criterion. Uses a more lenient penalty for model complexity
/// - Picks a slightly more complex model if it fits better.
///
/// This is the default choice for most applications.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// AIC is calculated as:
/// ```math
/// AIC = n * ln(RSS / n) + 2k
/// where
///   n = number of observations, k = number of model parameters
/// ```
/// </div>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aic;
impl ModelScoreProvider for Aic {
    fn score<T: Value>(&self, rss: T, n: T, k: T) -> T {
        n * (rss / n).ln() + T::two() * k
    }
}

/// Methods for scoring a polynomial model, selectable at runtime.
///
/// # Selecting a method
/// - `AIC`: Picks a slightly more complex model if it fits better.
/// - `BIC`: Prefers simpler models, even if the fit is slightly worse.
///
/// - AIC is a good default for general use.
///
/// Parses case-insensitively from `"aic"` / `"bic"`, and (de)serializes as `"AIC"` / `"BIC"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ScoringMethod {
    /// Akaike Information Criterion. See [`Aic`].
    #[default]
    AIC,

    /// Bayesian Information Criterion. See [`Bic`].
    BIC,
}
impl ModelScoreProvider for ScoringMethod {
    fn score<T: Value>(&self, rss: T, n: T, k: T) -> T {
        match self {
            ScoringMethod::AIC => Aic.score(rss, n, k),
            ScoringMethod::BIC => Bic.score(rss, n, k),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aic" => Ok(ScoringMethod::AIC),
            "bic" => Ok(ScoringMethod::BIC),
            other => Err(format!("unknown scoring method `{other}` (expected aic or bic)")),
        }
    }
}

impl std::fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMethod::AIC => write!(f, "AIC"),
            ScoringMethod::BIC => write!(f, "BIC"),
        }
    }
}

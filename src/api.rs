//! Request and response types for hosts that drive the fitter from raw input.
//!
//! A host (a UI, the `polyreg` binary, a service handler) builds a [`FitRequest`], runs it, and
//! renders the [`FitResponse`]. Requests are independent and hold no shared state.
//!
//! # Example
//! ```
//! # use polyreg::{api::{DegreeMode, FitRequest}, score::ScoringMethod};
//! let text = "0,1\n1,3\n2,7\n3,13";
//! let response = FitRequest::from_text(text, DegreeMode::Auto(ScoringMethod::AIC))
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(response.degree, 2);
//! assert_eq!(response.formula, "f(x) = x^2 + x + 1");
//! assert!((response.predict(4.0).unwrap() - 21.0).abs() < 1e-9);
//! ```
use std::ops::RangeInclusive;

use crate::{
    error::Result, parse::parse_points, score::ScoringMethod, select::ModelSelector,
    value::Point, CurveFit, FitResult, Polynomial,
};

/// How the degree of the fitted polynomial is chosen.
///
/// Serializes as `{"Fixed": 3}` or `{"Auto": "BIC"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DegreeMode {
    /// Fit exactly this degree (`1..=MAX_DEGREE`).
    Fixed(usize),

    /// Sweep the candidate degrees and keep the one with the lowest score.
    Auto(ScoringMethod),
}
impl Default for DegreeMode {
    fn default() -> Self {
        Self::Auto(ScoringMethod::default())
    }
}

/// A single fit request: the points and how to pick the degree.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    /// The data to fit.
    pub points: Vec<Point>,

    /// How to pick the degree.
    pub mode: DegreeMode,
}
impl FitRequest {
    /// Creates a request from already-parsed points.
    #[must_use]
    pub fn new(points: Vec<Point>, mode: DegreeMode) -> Self {
        Self { points, mode }
    }

    /// Parses `text` as `x,y` lines and creates a request from it.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Parse`] for the first malformed line.
    /// See [`parse_points`].
    pub fn from_text(text: &str, mode: DegreeMode) -> Result<Self> {
        Ok(Self::new(parse_points(text)?, mode))
    }

    /// Runs the fit.
    ///
    /// # Errors
    /// - In fixed mode, any error from [`CurveFit::new`], including a singular system.
    /// - In auto mode, any error from [`ModelSelector::sweep`].
    pub fn run(&self) -> Result<FitResponse> {
        let result = match self.mode {
            DegreeMode::Fixed(degree) => CurveFit::new(&self.points, degree)?.result(),
            DegreeMode::Auto(method) => ModelSelector::new(&method).select(&self.points)?,
        };

        Ok(FitResponse::from(result))
    }
}

/// The outcome of a [`FitRequest`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitResponse {
    /// Degree of the fitted polynomial.
    pub degree: usize,

    /// Coefficients, lowest power first.
    pub coefficients: Vec<f64>,

    /// Display form, such as `f(x) = 2x - 1`.
    pub formula: String,
}
impl FitResponse {
    /// The fitted polynomial.
    #[must_use]
    pub fn function(&self) -> Polynomial<'_> {
        Polynomial::borrowed(&self.coefficients)
    }

    /// Evaluates the fit at `x`. `None` means the result is undefined (NaN or infinite).
    #[must_use]
    pub fn predict(&self, x: f64) -> Option<f64> {
        self.function().predict(x)
    }

    /// Samples the fit over `range` every `step`, for plotting.
    #[must_use]
    pub fn curve(&self, range: RangeInclusive<f64>, step: f64) -> Vec<Point> {
        self.function().solve_range(range, step)
    }
}

impl From<FitResult> for FitResponse {
    fn from(result: FitResult) -> Self {
        let formula = result.equation();
        Self {
            degree: result.degree,
            coefficients: result.coefficients,
            formula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, error::Error};

    #[test]
    fn fixed_degree_line() {
        let request = FitRequest::from_text("1,1\n2,3\n3,5", DegreeMode::Fixed(1)).unwrap();
        let response = request.run().unwrap();
        assert_eq!(response.degree, 1);
        assert_all_close!(response.coefficients, [-1.0, 2.0]);
        assert_eq!(response.formula, "f(x) = 2x - 1");
    }

    #[test]
    fn fixed_mode_surfaces_errors() {
        let request = FitRequest::new(vec![(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)], DegreeMode::Fixed(2));
        assert_eq!(
            request.run().unwrap_err(),
            Error::SingularMatrix { n: 3, k: 3 }
        );

        let request = FitRequest::new(vec![(1.0, 1.0)], DegreeMode::Fixed(2));
        assert!(matches!(
            request.run(),
            Err(Error::InsufficientData { points: 1, required: 3 })
        ));

        let request = FitRequest::new(vec![(1.0, 1.0), (2.0, 2.0)], DegreeMode::Fixed(0));
        assert_eq!(request.run().unwrap_err(), Error::InvalidDegree(0));
    }

    #[test]
    fn auto_mode_errors() {
        let request = FitRequest::new(vec![(1.0, 1.0)], DegreeMode::default());
        assert!(matches!(
            request.run(),
            Err(Error::InsufficientData { points: 1, required: 2 })
        ));

        let request = FitRequest::new(vec![(1.0, 1.0); 3], DegreeMode::Auto(ScoringMethod::BIC));
        assert_eq!(request.run().unwrap_err(), Error::NoModelFound);
    }

    #[test]
    fn parse_errors_come_first() {
        let err = FitRequest::from_text("1,2\nx,3", DegreeMode::Fixed(1)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn predict_is_undefined_when_not_finite() {
        let response = FitResponse {
            degree: 2,
            coefficients: vec![0.0, 0.0, 1.0],
            formula: "f(x) = x^2".to_string(),
        };
        assert_close!(response.predict(3.0).unwrap(), 9.0);
        assert_eq!(response.predict(f64::MAX), None);
        assert_eq!(response.predict(f64::NAN), None);
    }

    #[test]
    fn curve_samples_range() {
        let response = FitResponse::from(FitResult {
            degree: 1,
            coefficients: vec![1.0, 1.0],
        });
        let curve = response.curve(0.0..=2.0, 0.5);
        assert_eq!(curve.len(), 5);
        assert_close!(curve[0].1, 1.0);
        assert_close!(curve[4].1, 3.0);
    }

    #[test]
    fn serde_shapes() {
        let json = serde_json::to_string(&DegreeMode::Fixed(3)).unwrap();
        assert_eq!(json, r#"{"Fixed":3}"#);
        let mode: DegreeMode = serde_json::from_str(r#"{"Auto":"BIC"}"#).unwrap();
        assert_eq!(mode, DegreeMode::Auto(ScoringMethod::BIC));

        let response = FitResponse::from(FitResult {
            degree: 1,
            coefficients: vec![2.0, -3.0],
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["degree"], 1);
        assert_eq!(value["formula"], "f(x) = -3x + 2");
    }

    #[test]
    fn types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FitRequest>();
        assert_send_sync::<FitResponse>();
        assert_send_sync::<DegreeMode>();
    }
}

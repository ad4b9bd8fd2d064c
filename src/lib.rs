//! # Polyreg
//! ## Least-squares polynomial regression, with the degree picked for you
//!
//! Give it a handful of `(x, y)` points and it finds the polynomial that best explains them.
//! Either pick the degree yourself, or let an information criterion (AIC or BIC) pick it by
//! trading fit quality off against complexity.
//!
//! The numerical core has no linear algebra dependency: it builds the normal equations
//! `XᵀX c = Xᵀy` and solves them with Gauss-Jordan elimination and partial pivoting
//! (see [`linalg`]).
//!
//! The simplest use-case is to find a function that approximates a set of data:
//! ```rust
//! # use polyreg::{CurveFit, score::ScoringMethod};
//! polyreg::function!(f(x) = 2 x^2 + 3 x - 5);
//! let data = f.solve_range(0.0..=3.0, 1.0);
//!
//! let fit = CurveFit::new_auto(&data, &ScoringMethod::AIC).expect("Failed to create fit");
//! assert_eq!(fit.degree(), 2);
//! assert_eq!(fit.equation(), "f(x) = 2x^2 + 3x - 5");
//! ```
//!
//! # Core Concepts
//! - A [`Polynomial`] is a mathematical function returning a value `y` for a given input `x`.
//!     - It is considered `canonical`, or correct, for any input value.
//! - A [`CurveFit`] is a polynomial fitted to a set of data points.
//!     - It carries the data, so it can report residuals, RSS and R².
//!     - Polynomial fits are most trustworthy within the `x` range of the data.
//! - The **degree** of a polynomial is the highest power of `x` in it.
//!     - It is how wiggly the line is.
//!     - Use [`CurveFit::new_auto`] or [`select::ModelSelector`] to choose it for you.
//!         - [`score::ScoringMethod::AIC`] is a good default choice. It is more lenient and may select a higher degree.
//!         - [`score::ScoringMethod::BIC`] is a more conservative choice. It penalizes higher degrees more heavily.
//!
//! # Driving it from raw input
//! [`parse`] reads `x,y` lines, and [`api`] wraps parsing, fitting and prediction into a
//! request/response pair for UIs and other hosts. The `polyreg` binary is a thin front end over it.
//!
//! # Testing utilities
//!
//! This crate includes macros for generating synthetic data and comparing floats. See [`test`].
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar


pub mod api;
pub mod display;
pub mod error;
pub mod linalg;
pub mod parse;
pub mod score;
pub mod select;
pub mod statistics;
pub mod value;

mod fit;
mod polynomial;

pub use fit::*;
pub use polynomial::Polynomial;

/// The highest polynomial degree that can be fitted, explicitly or by automatic selection.
pub const MAX_DEGREE: usize = 20;

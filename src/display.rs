//! Utilities for displaying and formatting polynomials
//!
//! This module converts coefficient vectors into human-readable formulas such as
//! `f(x) = 3x^2 - 2.5x + 1`, highest power first.
//!
//! # Key Concepts
//! - **[`Term`]**: A single displayed term: a sign, an optional magnitude, and a power of `x`.
//! - **[`Sign`]**: Tracks whether a term is positive or negative.
//!
//! # Rules
//! - Coefficients with `|c| <` [`ZERO_TOLERANCE`] are left out entirely.
//! - The first term shows `-` only when negative; later terms are joined with ` + ` or ` - `.
//! - Magnitudes above [`SCIENTIFIC_THRESHOLD`] use scientific notation with 2 decimals (`1.23e4`),
//!   everything else is rounded to 3 significant digits (`0.123`, `12.3`, `2`).
//! - A magnitude of exactly 1 is hidden, except on the constant term.
//! - `x` appears for powers ≥ 1, `^p` for powers ≥ 2.
//! - With nothing left to show, the formula is `f(x) = 0`.
//!
//! # Example
//! ```
//! # use polyreg::display::formula;
//! assert_eq!(formula(&[2.0, -3.0]), "f(x) = -3x + 2");
//! assert_eq!(formula(&[0.0, 0.0, 1.0]), "f(x) = x^2");
//! assert_eq!(formula::<f64>(&[]), "f(x) = 0");
//! ```
use crate::value::Value;

/// Coefficients smaller than this (in absolute value) are not displayed.
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// Magnitudes larger than this are displayed in scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1000.0;

/// Number of significant digits shown outside scientific notation.
pub const SIGNIFICANT_DIGITS: i32 = 3;

/// Number of decimals shown in scientific notation.
pub const SCIENTIFIC_PRECISION: usize = 2;

/// Represents the sign of a polynomial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use polyreg::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if coef < T::zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// Represents a single term of a polynomial for display purposes.
///
/// A term is made of up to three tokens: the magnitude, the variable, and the exponent.
/// `-3x^2` is `Term { sign: Negative, magnitude: Some("3"), power: 2 }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term
    pub sign: Sign,

    /// The formatted absolute value of the coefficient.
    ///
    /// `None` when the magnitude is 1 on a non-constant term, so only the variable is shown.
    pub magnitude: Option<String>,

    /// The power of `x`
    pub power: usize,
}

impl Term {
    /// Builds the display term for coefficient `coef` of `x^power`.
    ///
    /// Returns `None` if the coefficient is too small to display.
    ///
    /// # Example
    /// ```
    /// # use polyreg::display::{Term, Sign};
    /// let term = Term::new(-1.0, 3).unwrap();
    /// assert_eq!(term.sign, Sign::Negative);
    /// assert_eq!(term.magnitude, None);
    /// assert_eq!(term.to_string(), "x^3");
    ///
    /// assert!(Term::new(1e-12, 1).is_none());
    /// ```
    pub fn new<T: Value>(coef: T, power: usize) -> Option<Self> {
        let abs = coef.abs();
        if abs.is_nan() || abs < T::constant(ZERO_TOLERANCE) {
            return None;
        }

        let is_one = (abs - T::one()).abs() < T::constant(ZERO_TOLERANCE);
        let magnitude = if power != 0 && is_one {
            None
        } else {
            Some(format_magnitude(abs))
        };

        Some(Self {
            sign: Sign::from_coef(coef),
            magnitude,
            power,
        })
    }
}

/// Renders the unsigned body of the term, such as `3x^2`, `x`, or `4.5`.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(magnitude) = &self.magnitude {
            write!(f, "{magnitude}")?;
        }

        match self.power {
            0 => Ok(()),
            1 => write!(f, "x"),
            p => write!(f, "x^{p}"),
        }
    }
}

/// Formats an absolute coefficient value.
///
/// - Values above [`SCIENTIFIC_THRESHOLD`] use scientific notation with 2 decimals.
/// - Anything else is rounded to 3 significant digits, with trailing zeros removed.
///
/// # Example
/// ```
/// # use polyreg::display::format_magnitude;
/// assert_eq!(format_magnitude(2.0), "2");
/// assert_eq!(format_magnitude(0.123456), "0.123");
/// assert_eq!(format_magnitude(12.345), "12.3");
/// assert_eq!(format_magnitude(1000.0), "1000");
/// assert_eq!(format_magnitude(12345.0), "1.23e4");
/// ```
pub fn format_magnitude<T: Value>(value: T) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    if value.abs() > T::constant(SCIENTIFIC_THRESHOLD) {
        return format!("{value:.prec$e}", prec = SCIENTIFIC_PRECISION);
    }

    if value == T::zero() {
        return "0".to_string();
    }

    // Position of the leading digit decides how many decimals 3 significant digits need
    let leading = value.abs().log10().floor().to_i32().unwrap_or(0);
    let decimals = SIGNIFICANT_DIGITS - 1 - leading;

    if decimals <= 0 {
        // e.g. 1000 at 3 significant digits: round to the nearest ten
        let scale = T::constant(10f64.powi(-decimals));
        let rounded = (value / scale).round() * scale;
        return format!("{rounded:.0}");
    }

    #[allow(clippy::cast_sign_loss)]
    let formatted = format!("{value:.prec$}", prec = decimals as usize);
    trim_decimal_zeros(formatted)
}

/// Removes trailing zeros after a decimal point, and the point itself if nothing is left.
fn trim_decimal_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

/// Builds the displayable terms of a polynomial, highest power first.
///
/// Coefficients too small to display are skipped, so the result may be empty.
///
/// # Example
/// ```
/// # use polyreg::display::{terms, Sign};
/// let t = terms(&[2.0, 0.0, -1.0]);
/// assert_eq!(t.len(), 2);
/// assert_eq!(t[0].power, 2);
/// assert_eq!(t[0].sign, Sign::Negative);
/// ```
pub fn terms<T: Value>(coefficients: &[T]) -> Vec<Term> {
    coefficients
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(power, &coef)| Term::new(coef, power))
        .collect()
}

/// Writes the full polynomial expression into the provided buffer.
///
/// The output is prefixed with `"f(x) = "` and terms are separated by spaces, with proper signs
/// inserted.
///
/// # Coefficients
/// - `coefficients[i]` corresponds to the coefficient for `x^i`.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
pub fn format_polynomial<B: std::fmt::Write + ?Sized, T: Value>(
    buffer: &mut B,
    coefficients: &[T],
) -> std::fmt::Result {
    let mut terms = terms(coefficients).into_iter();

    write!(buffer, "f(x) = ")?;
    let Some(first) = terms.next() else {
        return write!(buffer, "0");
    };

    // No leading '+'
    if first.sign == Sign::Negative {
        write!(buffer, "{}", first.sign.char())?;
    }
    write!(buffer, "{first}")?;

    for term in terms {
        write!(buffer, " {} {term}", term.sign.char())?;
    }

    Ok(())
}

/// Returns the formula for a coefficient vector as a `String`.
///
/// See [`format_polynomial`].
#[must_use]
pub fn formula<T: Value>(coefficients: &[T]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = format_polynomial(&mut out, coefficients);
    out
}

//! Numeric types and iteration utilities for polynomial curves.
//!
//! This module defines the [`Value`] trait, which abstracts the floating point
//! types that can be used in polynomial fitting and evaluation.
//!
//! # Traits
//!
//! - [`Value`]: Extends `num_traits::Float` to provide:
//!   - A canonical `two()` constant.
//!   - `constant` for turning `f64` tolerances into the working type.
//! - [`CoordExt`]: Accessors for the `x` and `y` halves of a set of points.
//!
//! # Iterators
//!
//! - [`SteppedValues`]: A floating-point range iterator with a specified step,
//!   useful for generating evaluation points for polynomials.
//!
//! # Example
//!
//! ```rust
//! use polyreg::value::{SteppedValues, Value};
//!
//! // 0.0 to 1.0 in steps of 0.25
//! let xs: Vec<f64> = SteppedValues::new(0.0..=1.0, 0.25).collect();
//! assert_eq!(xs, [0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! assert_eq!(f64::two(), 2.0);
//! ```
use std::ops::RangeInclusive;

/// A 2-D data point `(x, y)`.
pub type Point<T = f64> = (T, T);

/// Numeric type for curves
pub trait Value:
    num_traits::Float
    + num_traits::FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + std::fmt::LowerExp
    + Send
    + Sync
    + 'static
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Converts an `f64` constant, such as a tolerance, to the target type.
    ///
    /// Results in `NaN` if the value cannot be represented.
    #[must_use]
    fn constant(n: f64) -> Self {
        Self::from_f64(n).unwrap_or_else(Self::nan)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::from_usize(n).unwrap_or_else(Self::infinity)
    }
}

impl<T> Value for T where
    T: num_traits::Float
        + num_traits::FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + std::fmt::LowerExp
        + Send
        + Sync
        + 'static
{
}

/// Iterator over a range of floating-point values with a specified step.
///
/// This iterator yields values starting from `start` up to and including `end`,
/// incrementing by `step` on each iteration.
pub struct SteppedValues<T: Value> {
    range: RangeInclusive<T>,
    step: T,
    index: T,
}
impl<T: Value> SteppedValues<T> {
    /// Creates a new iterator over stepped values in a range
    ///
    /// Will yield values starting from `range.start` up to and including `range.end`.
    /// A step that is not strictly positive yields nothing.
    pub fn new(range: RangeInclusive<T>, step: T) -> Self {
        Self {
            range,
            step,
            index: T::zero(),
        }
    }
}
impl<T: Value> Iterator for SteppedValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step <= T::zero() || self.step.is_nan() {
            return None;
        }

        let value = *self.range.start() + self.index * self.step;
        if value <= *self.range.end() {
            self.index = self.index + T::one();
            Some(value)
        } else {
            None
        }
    }
}

/// Extension trait for accessing the `x` and `y` coordinates of a set of points.
///
/// # Examples
///
/// ```
/// # use polyreg::value::CoordExt;
/// let data = [(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.as_slice().y(), vec![-2.0, 3.0, 1.0]);
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Returns the inclusive range of x-coordinates, or `None` if there are none.
    fn x_range(&self) -> Option<RangeInclusive<T>> {
        let bounds = self.x_iter().fold(None, |acc: Option<(T, T)>, x| {
            Some(match acc {
                Some((min, max)) => (min.min(x), max.max(x)),
                None => (x, x),
            })
        });
        bounds.map(|(start, end)| start..=end)
    }
}
impl<T: Value> CoordExt<T> for [Point<T>] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for Vec<Point<T>> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        let range = SteppedValues::new(0.0..=1.0, 0.1);
        let values: Vec<_> = range.collect();
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn stepped_values_rejects_bad_steps() {
        assert_eq!(SteppedValues::new(0.0..=1.0, 0.0).count(), 0);
        assert_eq!(SteppedValues::new(0.0..=1.0, -1.0).count(), 0);
        assert_eq!(SteppedValues::new(0.0..=1.0, f64::NAN).count(), 0);
    }

    #[test]
    fn coord_ext_ranges() {
        let data = vec![(3.0, 1.0), (-1.0, 2.0), (2.0, 0.5)];
        assert_eq!(data.x(), vec![3.0, -1.0, 2.0]);
        assert_eq!(data.x_range(), Some(-1.0..=3.0));

        let empty: Vec<(f64, f64)> = vec![];
        assert_eq!(empty.x_range(), None);
    }

    #[test]
    fn casts() {
        assert_eq!(f32::constant(0.5), 0.5f32);
        assert_eq!(f64::from_positive_int(20), 20.0);
    }
}

//! Reading points from raw text
//!
//! The text format is one point per line, `x,y`:
//! ```text
//! 1, 2
//! 2, 4.1
//!
//! 3,5.9
//! ```
//! - Whitespace around each field is ignored.
//! - Blank lines are skipped.
//! - `\n` and `\r\n` line endings are both accepted.
//!
//! Any malformed line rejects the whole input; no partial list is returned.
use crate::{
    error::{Error, Result},
    value::Point,
};

/// Parses raw text into a list of points.
///
/// # Errors
/// Returns [`Error::Parse`] naming the first bad line (1-based) if a line does not have exactly
/// two comma-separated fields, or if either field is not a finite number.
///
/// # Example
/// ```
/// # use polyreg::parse::parse_points;
/// let points = parse_points("1,2\r\n 2 , 4.5\n\n3,-1e2\n").unwrap();
/// assert_eq!(points, vec![(1.0, 2.0), (2.0, 4.5), (3.0, -100.0)]);
///
/// let err = parse_points("1,2\n2,abc").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid point on line 2 (`2,abc`): y is not a number");
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        points.push(parse_line(line).map_err(|reason| Error::Parse {
            line: i + 1,
            content: line.to_string(),
            reason,
        })?);
    }

    tracing::trace!(points = points.len(), "parsed input");
    Ok(points)
}

/// Parses a single trimmed, non-empty line.
fn parse_line(line: &str) -> std::result::Result<Point, String> {
    let mut fields = line.split(',');
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected two comma-separated values, `x,y`".to_string());
    };

    Ok((parse_field(x, "x")?, parse_field(y, "y")?))
}

fn parse_field(field: &str, name: &str) -> std::result::Result<f64, String> {
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("{name} is missing"));
    }

    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("{name} is not finite")),
        Err(_) => Err(format!("{name} is not a number")),
    }
}

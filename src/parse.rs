//! Reader for the `;`-separated tabular input format.
//!
//! Cells are separated by `;` and decimals may use either `,` or `.` as the
//! separator. Blank lines are ignored.
//!
//! - distance matrix: one row per line, `0;2,5;3`
//! - demands: one `point;quantity` pair per line, `1;12,5`

use std::io::BufRead;

use crate::error::ParseError;
use crate::models::DemandMap;

const SEPARATOR: char = ';';

/// Reads a decimal that may use `,` as the decimal separator.
///
/// # Examples
///
/// ```
/// use savings_routing::parse::parse_decimal;
///
/// assert_eq!(parse_decimal("12,5"), Some(12.5));
/// assert_eq!(parse_decimal(" 3.25 "), Some(3.25));
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}

/// Reads a vehicle capacity given as a single decimal.
pub fn parse_capacity(text: &str) -> Result<f64, ParseError> {
    parse_decimal(text).ok_or_else(|| ParseError::InvalidNumber {
        line: 1,
        column: 1,
        value: text.to_string(),
    })
}

/// Reads the rows of a distance matrix.
///
/// Shape is not checked here; see
/// [`DistanceMatrix::from_rows`](crate::distance::DistanceMatrix::from_rows).
///
/// # Examples
///
/// ```
/// use savings_routing::parse::parse_matrix;
///
/// let rows = parse_matrix("0;2,5\n2,5;0\n".as_bytes()).unwrap();
/// assert_eq!(rows, vec![vec![0.0, 2.5], vec![2.5, 0.0]]);
/// ```
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = clean(&line, index);
        if text.is_empty() {
            continue;
        }

        let row = text
            .split(SEPARATOR)
            .enumerate()
            .map(|(column, cell)| {
                parse_decimal(cell).ok_or_else(|| ParseError::InvalidNumber {
                    line: index + 1,
                    column: column + 1,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads `point;quantity` lines into a demand map.
///
/// Fields after the second are ignored. A point listed twice is an error.
///
/// # Examples
///
/// ```
/// use savings_routing::parse::parse_demands;
///
/// let demands = parse_demands("1;5\n2;7,5\n".as_bytes()).unwrap();
/// assert_eq!(demands.get(2), Some(7.5));
/// ```
pub fn parse_demands<R: BufRead>(reader: R) -> Result<DemandMap, ParseError> {
    let mut demands = DemandMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = clean(&line, index);
        if text.is_empty() {
            continue;
        }

        let line_no = index + 1;
        let mut fields = text.split(SEPARATOR);
        let (Some(point), Some(quantity)) = (fields.next(), fields.next()) else {
            return Err(ParseError::MissingField { line: line_no });
        };

        let point: usize = point.trim().parse().map_err(|_| ParseError::InvalidPoint {
            line: line_no,
            value: point.to_string(),
        })?;
        let quantity = parse_decimal(quantity).ok_or_else(|| ParseError::InvalidNumber {
            line: line_no,
            column: 2,
            value: quantity.to_string(),
        })?;

        if demands.insert(point, quantity).is_some() {
            return Err(ParseError::DuplicatePoint {
                line: line_no,
                point,
            });
        }
    }
    Ok(demands)
}

fn clean(line: &str, index: usize) -> &str {
    let line = if index == 0 {
        line.trim_start_matches('\u{feff}')
    } else {
        line
    };
    line.trim()
}

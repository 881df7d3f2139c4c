//! TSPLIB `NODE_COORD_SECTION` reader.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Instance, Point, MAX_COORDINATE};
use crate::solver::check_dimension;

/// Parses a TSPLIB problem with two-dimensional node coordinates.
///
/// Recognized header keys are `NAME`, `DIMENSION` and `EDGE_WEIGHT_TYPE`,
/// written as `KEY: value` or `KEY : value`; other keys are skipped.
/// Coordinates follow `NODE_COORD_SECTION` as `id x y` lines and end at
/// `EOF`, at the next section keyword, or at the end of input.
///
/// # Errors
///
/// - [`Error::Parse`] for a missing or invalid `DIMENSION`, a malformed
///   coordinate line, or a coordinate that is not finite or exceeds
///   [`MAX_COORDINATE`] in magnitude.
/// - [`Error::DimensionMismatch`] if the number of coordinate lines differs
///   from `DIMENSION`.
///
/// # Examples
///
/// ```
/// use u_tsp::tsplib;
///
/// let text = "NAME: tri\nDIMENSION: 3\nEDGE_WEIGHT_TYPE: EUC_2D\n\
///             NODE_COORD_SECTION\n1 0 0\n2 3 0\n3 3 4\nEOF\n";
/// let inst = tsplib::parse(text).unwrap();
/// assert_eq!(inst.name(), "tri");
/// assert_eq!(inst.len(), 3);
/// assert_eq!(inst.points()[2].y(), 4.0);
/// ```
pub fn parse(input: &str) -> Result<Instance> {
    let mut name = String::new();
    let mut dimension: Option<usize> = None;
    let mut points = Vec::new();
    let mut in_coords = false;
    let mut last_line = 0;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == "EOF" {
            break;
        }

        if in_coords && !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            points.push(parse_coord(line, line_no)?);
            continue;
        }
        in_coords = false;

        let (key, value) = match line.split_once(':') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => (line, ""),
        };
        match key {
            "NAME" => name = value.to_string(),
            "DIMENSION" => {
                let n = value
                    .parse()
                    .map_err(|_| Error::parse(line_no, format!("invalid DIMENSION: {value:?}")))?;
                dimension = Some(n);
            }
            "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                log::warn!("edge weight type {value} treated as EUC_2D");
            }
            "NODE_COORD_SECTION" => in_coords = true,
            _ => log::trace!("skipping header line {line_no}: {key}"),
        }
    }

    let expected = dimension.ok_or_else(|| Error::parse(last_line, "missing DIMENSION"))?;
    check_dimension(&points, expected)?;
    Ok(Instance::new(name, points))
}

/// Reads and parses a TSPLIB problem from a byte stream.
pub fn read<R: Read>(mut reader: R) -> Result<Instance> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}

/// Reads and parses a TSPLIB problem file.
pub fn read_path(path: impl AsRef<Path>) -> Result<Instance> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}

fn parse_coord(line: &str, line_no: usize) -> Result<Point> {
    let mut fields = line.split_whitespace();
    let mut next = |what: &str| {
        fields
            .next()
            .ok_or_else(|| Error::parse(line_no, format!("missing {what}, expected `id x y`")))
    };

    let id_s = next("id")?;
    let x_s = next("x coordinate")?;
    let y_s = next("y coordinate")?;

    let id = id_s
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid node id: {id_s}")))?;
    let x = parse_axis(x_s, "x", line_no)?;
    let y = parse_axis(y_s, "y", line_no)?;
    Ok(Point::new(id, x, y))
}

/// Parses one coordinate, rejecting `nan`, `inf` and magnitudes past
/// [`MAX_COORDINATE`].
fn parse_axis(text: &str, axis: &str, line_no: usize) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid {axis} coordinate: {text}")))?;
    if !value.is_finite() {
        return Err(Error::parse(line_no, format!("non-finite {axis} coordinate: {text}")));
    }
    if value.abs() > MAX_COORDINATE {
        return Err(Error::parse(
            line_no,
            format!("{axis} coordinate {text} exceeds ±{MAX_COORDINATE:e}"),
        ));
    }
    Ok(value)
}

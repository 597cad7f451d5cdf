//! Text format reader/writer for stored maps.
//!
//! ## Format layout
//!
//! ```text
//! Grid dimensions: <W>, <H>
//! Input length: <N>
//! Iterations: <E>
//! Weights:
//!     <w>, <w>, ...      (W*H lines, N numbers each, neuron-index order)
//! end weights
//! ```
//!
//! Header lines may appear in any order before `Weights:`; the iterations
//! line is optional and unrecognized lines are skipped. Matching is
//! case-insensitive.

use crate::error::{Result, TeuvoError};
use crate::som::SelfOrganizingMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{BufRead, Write};

static DIMENSIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:grid)?\s*dimensions\s*:\s*(\d+)\s*,\s*(\d+)\s*$").unwrap()
});
static INPUT_LENGTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:input)?\s*length\s*:\s*(\d+)\s*$").unwrap());
static ITERATIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*iterations\s*:\s*(\d+)\s*$").unwrap());
static WEIGHTS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*weights\s*:\s*$").unwrap());
static END_WEIGHTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*end\s*weights\s*$").unwrap());
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?[0-9]*\.?[0-9]+(?:[Ee][+-]?[0-9]+)?").unwrap());

/// The contents of a parsed map file.
#[derive(Debug, Clone)]
pub struct MapFile {
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Input vector length.
    pub input_length: usize,
    /// Expected iteration count, 0 when the file carries none.
    pub iterations: usize,
    /// Neuron index -> weight vector.
    pub weights: Vec<Vec<f64>>,
}

impl MapFile {
    /// Builds a training engine from the parsed contents.
    pub fn into_map(self) -> Result<SelfOrganizingMap> {
        SelfOrganizingMap::from_weights(
            self.weights,
            self.width,
            self.height,
            self.input_length,
            self.iterations,
        )
    }
}

/// Text format reader/writer for map files.
pub struct MapFormat;

impl MapFormat {
    /// Writes a map to a destination in the text format.
    pub fn write<W: Write>(map: &SelfOrganizingMap, destination: &mut W) -> Result<()> {
        let (width, height) = map.grid_size();
        writeln!(destination, "Grid dimensions: {}, {}", width, height)?;
        writeln!(destination, "Input length: {}", map.input_length())?;
        writeln!(destination, "Iterations: {}", map.expected_iterations())?;
        writeln!(destination, "Weights:")?;
        for neuron in 0..map.neuron_count() {
            let row: Vec<String> = map
                .weight_vector(neuron)
                .iter()
                .map(|w| w.to_string())
                .collect();
            writeln!(destination, "\t{}", row.join(", "))?;
        }
        writeln!(destination, "end weights")?;
        Ok(())
    }

    /// Parses a map file from a buffered source.
    pub fn read<R: BufRead>(source: R) -> Result<MapFile> {
        let mut lines = source.lines();

        let mut dimensions: Option<(usize, usize)> = None;
        let mut input_length: Option<usize> = None;
        let mut iterations = 0usize;

        // Header: match known lines until the weights marker, skip the rest.
        loop {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(TeuvoError::InvalidMapFormat(
                        "missing weights section".to_string(),
                    ))
                }
            };

            if WEIGHTS_HEADER_RE.is_match(&line) {
                break;
            }
            if let Some(captures) = DIMENSIONS_RE.captures(&line) {
                dimensions = Some((parse_usize(&captures[1])?, parse_usize(&captures[2])?));
            } else if let Some(captures) = INPUT_LENGTH_RE.captures(&line) {
                input_length = Some(parse_usize(&captures[1])?);
            } else if let Some(captures) = ITERATIONS_RE.captures(&line) {
                iterations = parse_usize(&captures[1])?;
            }
        }

        let (width, height) = dimensions.ok_or_else(|| {
            TeuvoError::InvalidMapFormat(
                "grid dimensions must appear before the weight matrix".to_string(),
            )
        })?;
        let input_length = input_length.ok_or_else(|| {
            TeuvoError::InvalidMapFormat(
                "input length must appear before the weight matrix".to_string(),
            )
        })?;

        // Weight matrix: exactly width * height rows of input_length numbers.
        let neuron_count = width * height;
        let mut weights = Vec::with_capacity(neuron_count);
        while weights.len() < neuron_count {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(TeuvoError::InvalidMapFormat(format!(
                        "expected {} weight rows, found {}",
                        neuron_count,
                        weights.len()
                    )))
                }
            };
            if END_WEIGHTS_RE.is_match(&line) {
                return Err(TeuvoError::InvalidMapFormat(format!(
                    "weights terminated after {} of {} rows",
                    weights.len(),
                    neuron_count
                )));
            }

            let row: Vec<f64> = NUMBER_RE
                .find_iter(&line)
                .map(|m| {
                    m.as_str().parse::<f64>().map_err(|e| {
                        TeuvoError::InvalidMapFormat(format!("bad weight value: {e}"))
                    })
                })
                .collect::<Result<_>>()?;
            if row.len() != input_length {
                return Err(TeuvoError::InvalidMapFormat(format!(
                    "weight row {} has {} values, expected {}",
                    weights.len(),
                    row.len(),
                    input_length
                )));
            }
            weights.push(row);
        }

        Ok(MapFile {
            width,
            height,
            input_length,
            iterations,
            weights,
        })
    }
}

fn parse_usize(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|e| TeuvoError::InvalidMapFormat(format!("bad integer: {e}")))
}

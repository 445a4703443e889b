//! Parser for the puzzle input text.
//!
//! The input has two sections. First the present shapes, each introduced by
//! an `N:` header and drawn as rows of `#` (part of the shape) and `.`
//! (not):
//!
//! ```text
//! 0:
//! ###
//! ##.
//! ##.
//! ```
//!
//! Then the regions, one per line. `12x5: 1 0 1 0 2 2` is a region 12 units
//! wide and 5 units long that needs one present of shape 0, one of shape 2,
//! and two each of shapes 4 and 5.

use thiserror::Error;

use crate::shapes::{CatalogError, Cell, Region, ShapeCatalog};

/// Errors raised while parsing the puzzle input. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Shape headers must count up from 0 in input order, since demands
    /// refer to shapes by that index.
    #[error("line {line}: shape header {found} out of order, expected {expected}")]
    ShapeOutOfOrder {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unexpected character {found:?} in shape row")]
    UnexpectedMarker { line: usize, found: char },
    #[error("line {line}: expected WIDTHxHEIGHT before ':', got {found:?}")]
    MalformedRegionSize { line: usize, found: String },
    #[error("line {line}: invalid number: {source}")]
    InvalidNumber {
        line: usize,
        source: std::num::ParseIntError,
    },
    #[error("line {line}: expected a shape header or region line, got {found:?}")]
    UnexpectedLine { line: usize, found: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A fully parsed puzzle: the shape catalog and the regions to check.
#[derive(Debug, Clone)]
pub struct PuzzleInput {
    pub catalog: ShapeCatalog,
    pub regions: Vec<Region>,
}

fn parse_number<T>(line: usize, text: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    text.trim()
        .parse()
        .map_err(|source| ParseError::InvalidNumber { line, source })
}

/// Parses the full puzzle input text.
pub fn parse_input(text: &str) -> Result<PuzzleInput, ParseError> {
    let mut shapes: Vec<Vec<Cell>> = Vec::new();
    let mut regions = Vec::new();

    let mut lines = text.lines().enumerate().peekable();
    while let Some((number, line)) = lines.next() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        // a shape header is "N:"; region lines carry an 'x' in the size
        if let Some(header) = line.strip_suffix(':').filter(|h| !h.contains('x')) {
            let found: usize = parse_number(number + 1, header)?;
            if found != shapes.len() {
                return Err(ParseError::ShapeOutOfOrder {
                    line: number + 1,
                    expected: shapes.len(),
                    found,
                });
            }

            // shape rows follow until a blank line or the next header
            let mut cells = Vec::new();
            let mut row = 0;
            while let Some(&(row_number, row_line)) = lines.peek() {
                let row_line = row_line.trim_end();
                if row_line.is_empty() || row_line.contains(':') {
                    break;
                }
                lines.next();
                for (col, ch) in row_line.chars().enumerate() {
                    match ch {
                        '#' => cells.push((row, col as i32)),
                        '.' => {}
                        found => {
                            return Err(ParseError::UnexpectedMarker {
                                line: row_number + 1,
                                found,
                            })
                        }
                    }
                }
                row += 1;
            }
            shapes.push(cells);
        } else if let Some((size, counts)) = line.split_once(':') {
            let Some((width, height)) = size.split_once('x') else {
                return Err(ParseError::MalformedRegionSize {
                    line: number + 1,
                    found: size.to_string(),
                });
            };
            let width = parse_number(number + 1, width)?;
            let height = parse_number(number + 1, height)?;
            let shape_counts = counts
                .split_whitespace()
                .map(|count| parse_number(number + 1, count))
                .collect::<Result<Vec<usize>, _>>()?;
            regions.push(Region::new(width, height, shape_counts));
        } else {
            return Err(ParseError::UnexpectedLine {
                line: number + 1,
                found: line.to_string(),
            });
        }
    }

    let catalog = ShapeCatalog::new(shapes)?;
    Ok(PuzzleInput { catalog, regions })
}

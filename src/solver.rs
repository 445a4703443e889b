//! Backtracking feasibility search for present placement.
//!
//! Places the demanded shape instances one at a time, largest first, trying
//! every precomputed orientation at every in-bounds translation. Occupied
//! cells live in a flat boolean grid that is marked before each recursive
//! step and restored exactly on backtrack, so a failed branch leaves no
//! trace behind.

use std::cmp::Reverse;

use thiserror::Error;

use crate::grid::cell_index;
use crate::shapes::{Cell, PlacedShape, Region, ShapeCatalog};

/// Errors raised by a feasibility check.
///
/// Infeasibility is not an error; it is the `false` / `None` verdict.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("region dimensions {width}x{height} are not positive")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("region demands shape {shape}, but the catalog has {catalog_len} shapes")]
    UnknownShape { shape: usize, catalog_len: usize },
}

/// Reports whether every demanded present fits into the region at once.
///
/// Boolean wrapper around [`solve`]; see there for the search itself.
pub fn is_feasible(catalog: &ShapeCatalog, region: &Region) -> Result<bool, SolveError> {
    Ok(solve(catalog, region)?.is_some())
}

/// Searches for a placement of every demanded shape instance in the region.
///
/// Returns the first complete witness found: one placed instance per
/// demanded present, every cell inside the region, no two instances
/// overlapping. Returns `None` when no such placement exists; a partial
/// packing never counts as success. Orientations and translations are
/// visited in a fixed order, so the same input always yields the same
/// witness.
///
/// A region that demands nothing is trivially feasible. When the demanded
/// shapes cover more cells than the region has, the search is skipped
/// entirely (area bound).
pub fn solve(
    catalog: &ShapeCatalog,
    region: &Region,
) -> Result<Option<Vec<PlacedShape>>, SolveError> {
    if region.width <= 0 || region.height <= 0 {
        return Err(SolveError::InvalidDimensions {
            width: region.width,
            height: region.height,
        });
    }

    // one entry per demanded instance
    let mut instances: Vec<usize> = Vec::with_capacity(region.demand());
    for (shape, &count) in region.shape_counts.iter().enumerate() {
        if count > 0 && shape >= catalog.len() {
            return Err(SolveError::UnknownShape {
                shape,
                catalog_len: catalog.len(),
            });
        }
        instances.extend(std::iter::repeat(shape).take(count));
    }

    if instances.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let area = region.width as usize * region.height as usize;
    let demanded_cells: usize = instances.iter().map(|&shape| catalog.cell_count(shape)).sum();
    if demanded_cells > area {
        return Ok(None);
    }

    // large shapes have the fewest legal positions, so place them first
    instances.sort_by_key(|&shape| Reverse(catalog.cell_count(shape)));

    let mut occupied = vec![false; area];
    let mut placed = Vec::with_capacity(instances.len());
    if place_remaining(catalog, region, &instances, &mut occupied, &mut placed) {
        Ok(Some(placed))
    } else {
        Ok(None)
    }
}

/// Recursively places `instances[placed.len()..]`.
///
/// Invariant: `placed` and `occupied` always describe the same partial
/// packing, both on entry and on every return.
fn place_remaining(
    catalog: &ShapeCatalog,
    region: &Region,
    instances: &[usize],
    occupied: &mut [bool],
    placed: &mut Vec<PlacedShape>,
) -> bool {
    let Some(&shape) = instances.get(placed.len()) else {
        // every demanded instance is down
        return true;
    };

    for orientation in catalog.orientations(shape) {
        // canonical cells start at the origin, so max + 1 is the bounding box
        let rows = orientation.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = orientation.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;

        for row in 0..=region.height - rows {
            for col in 0..=region.width - cols {
                let cells: Vec<Cell> = orientation
                    .iter()
                    .map(|&(r, c)| (r + row, c + col))
                    .collect();
                if cells
                    .iter()
                    .any(|&cell| occupied[cell_index(region.width, cell)])
                {
                    continue;
                }

                for &cell in &cells {
                    occupied[cell_index(region.width, cell)] = true;
                }
                placed.push(PlacedShape {
                    shape,
                    cells: cells.clone(),
                });

                if place_remaining(catalog, region, instances, occupied, placed) {
                    return true;
                }

                // undo this placement exactly before trying the next position
                placed.pop();
                for &cell in &cells {
                    occupied[cell_index(region.width, cell)] = false;
                }
            }
        }
    }

    false
}

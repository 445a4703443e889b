//! Present shape and region definitions.
//!
//! Each shape is a set of unit cell positions on a 2D grid, normalized so
//! the minimum row and column sit at the origin. A shape is identified by
//! its index in the catalog, assigned in input order.

use thiserror::Error;

use crate::geometry::{all_orientations, normalize_to_origin};

/// A 2D coordinate representing a unit cell position as (row, column).
pub type Cell = (i32, i32);

/// One rotated/reflected variant of a shape, in canonical form: translated
/// to the origin and sorted lexicographically by (row, column).
pub type Orientation = Vec<Cell>;

/// Errors raised while building a [`ShapeCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A shape with no occupied cells cannot be placed; reject it up front
    /// instead of treating it as always-placeable.
    #[error("shape {0} has no occupied cells")]
    EmptyShape(usize),
    /// Cells within a shape must be unique.
    #[error("shape {shape} lists cell ({row}, {col}) more than once", row = .cell.0, col = .cell.1)]
    DuplicateCell { shape: usize, cell: Cell },
}

/// The immutable shape table shared by every region check.
///
/// Construction normalizes each shape and precomputes its full orientation
/// set once; after that the catalog is never mutated, so one catalog can be
/// shared by reference across any number of independent region checks.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Orientation>,
    orientations: Vec<Vec<Orientation>>,
}

impl ShapeCatalog {
    /// Builds a catalog from one cell set per shape, in index order.
    ///
    /// Rejects empty shapes and repeated cells within a shape.
    pub fn new(shapes: Vec<Vec<Cell>>) -> Result<Self, CatalogError> {
        let mut canonical = Vec::with_capacity(shapes.len());

        for (shape, cells) in shapes.into_iter().enumerate() {
            if cells.is_empty() {
                return Err(CatalogError::EmptyShape(shape));
            }
            let cells = normalize_to_origin(cells);
            // normalize_to_origin sorts, so duplicates end up adjacent
            if let Some(pair) = cells.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(CatalogError::DuplicateCell {
                    shape,
                    cell: pair[0],
                });
            }
            canonical.push(cells);
        }

        let orientations = canonical
            .iter()
            .map(|cells| all_orientations(cells))
            .collect();

        Ok(Self {
            shapes: canonical,
            orientations,
        })
    }

    /// Number of shapes in the catalog.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The canonical cells of one shape.
    pub fn cells(&self, shape: usize) -> &[Cell] {
        &self.shapes[shape]
    }

    /// Number of occupied cells in one shape.
    pub fn cell_count(&self, shape: usize) -> usize {
        self.shapes[shape].len()
    }

    /// The precomputed distinct orientations of one shape, in a fixed order.
    pub fn orientations(&self, shape: usize) -> &[Orientation] {
        &self.orientations[shape]
    }
}

/// A rectangular area under one tree, with the demanded count of presents
/// per shape index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Width in unit cells; columns range over `0..width`.
    pub width: i32,
    /// Height (the puzzle calls it length) in unit cells; rows range over
    /// `0..height`.
    pub height: i32,
    /// Demanded instance count per shape index, in catalog order.
    pub shape_counts: Vec<usize>,
}

impl Region {
    pub fn new(width: i32, height: i32, shape_counts: Vec<usize>) -> Self {
        Self {
            width,
            height,
            shape_counts,
        }
    }

    /// Total number of demanded present instances.
    pub fn demand(&self) -> usize {
        self.shape_counts.iter().sum()
    }
}

/// A shape instance placed at absolute cells within a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShape {
    /// Catalog index of the placed shape.
    pub shape: usize,
    /// The cells this instance occupies, in region coordinates.
    pub cells: Vec<Cell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_normalizes_translated_shapes() {
        let catalog = ShapeCatalog::new(vec![vec![(5, 7), (5, 8), (6, 7)]]).unwrap();
        assert_eq!(catalog.cells(0), &[(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn catalog_rejects_empty_shape() {
        let result = ShapeCatalog::new(vec![vec![(0, 0)], vec![]]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyShape(1));
    }

    #[test]
    fn catalog_rejects_duplicate_cell() {
        let result = ShapeCatalog::new(vec![vec![(2, 3), (2, 4), (2, 3)]]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCell {
                shape: 0,
                cell: (0, 0),
            }
        );
    }

    #[test]
    fn catalog_precomputes_orientations() {
        let catalog = ShapeCatalog::new(vec![vec![(0, 0), (0, 1)]]).unwrap();
        assert_eq!(
            catalog.orientations(0),
            &[vec![(0, 0), (0, 1)], vec![(0, 0), (1, 0)]]
        );
    }

    #[test]
    fn region_demand_sums_counts() {
        let region = Region::new(12, 5, vec![1, 0, 1, 0, 3, 2]);
        assert_eq!(region.demand(), 7);
    }
}

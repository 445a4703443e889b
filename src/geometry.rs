//! 2D rotation and reflection utilities.
//!
//! A grid shape has 8 possible orientations in the plane (the dihedral
//! group of the square): 4 rotations times 2 reflections.

use rustc_hash::FxHashSet;

use crate::shapes::{Cell, Orientation};

/// All 8 symmetry transforms of the square grid.
///
/// Organized as the 4 rotations of the shape followed by the 4 rotations of
/// its mirror image. Rotating by 90 degrees maps (r, c) to (c, -r); the
/// mirror flips the column axis. Applying entry 1 four times in a row
/// returns the identity.
pub const TRANSFORMS: [fn(Cell) -> Cell; 8] = [
    // rotations of the shape itself
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (c, -r),  // 90 degrees
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (-c, r),  // 270 degrees
    // rotations of the mirror image
    |(r, c)| (r, -c),
    |(r, c)| (-c, -r),
    |(r, c)| (-r, c),
    |(r, c)| (c, r),
];

/// Generates all unique orientations of a shape.
///
/// Applies all 8 transforms to the shape, normalizes each result so that
/// the minimum row and column are at the origin, then removes duplicates.
/// Symmetric shapes will have fewer than 8 unique orientations; a square
/// has exactly one. The result is sorted so callers visit orientations in
/// a fixed order.
pub fn all_orientations(cells: &[Cell]) -> Vec<Orientation> {
    let mut unique: FxHashSet<Orientation> = FxHashSet::default();

    for transform in TRANSFORMS {
        let transformed: Vec<Cell> = cells.iter().map(|&cell| transform(cell)).collect();
        unique.insert(normalize_to_origin(transformed));
    }

    let mut orientations: Vec<Orientation> = unique.into_iter().collect();
    orientations.sort_unstable();
    orientations
}

/// Translates cells so the minimum row and column values are both zero,
/// then sorts them lexicographically by (row, column).
///
/// This normalization ensures that two shapes that differ only by
/// translation will be recognized as identical.
pub fn normalize_to_origin(mut cells: Vec<Cell>) -> Orientation {
    let min_row = cells.iter().map(|(r, _)| *r).min().unwrap();
    let min_col = cells.iter().map(|(_, c)| *c).min().unwrap();

    for (r, c) in &mut cells {
        *r -= min_row;
        *c -= min_col;
    }

    cells.sort_unstable();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The L-tetromino has no symmetry, so all 8 orientations are distinct.
    const L_TETROMINO: &[Cell] = &[(0, 0), (1, 0), (2, 0), (2, 1)];

    #[test]
    fn rotation_applied_four_times_is_identity() {
        let rotate = TRANSFORMS[1];
        for cell in [(0, 0), (2, 5), (-3, 1)] {
            let mut current = cell;
            for _ in 0..4 {
                current = rotate(current);
            }
            assert_eq!(current, cell, "rotation closure failed for {cell:?}");
        }
    }

    #[test]
    fn normalization_is_translation_invariant() {
        let base = normalize_to_origin(vec![(0, 1), (1, 0), (1, 1)]);
        let shifted = normalize_to_origin(vec![(4, -2), (5, -3), (5, -2)]);
        assert_eq!(base, shifted);
    }

    #[test]
    fn orientation_generation_is_deterministic() {
        let first = all_orientations(L_TETROMINO);
        let second = all_orientations(L_TETROMINO);
        assert_eq!(first, second);
    }

    #[test]
    fn orientation_count_divides_group_order() {
        let shapes: &[&[Cell]] = &[
            &[(0, 0)],                         // single cell
            &[(0, 0), (0, 1)],                 // domino
            &[(0, 0), (1, 0), (1, 1)],         // L-tromino
            &[(0, 1), (0, 2), (1, 0), (1, 1)], // S-tetromino
            &[(0, 0), (0, 1), (1, 0), (1, 1)], // square
            L_TETROMINO,
        ];
        let expected = [1, 2, 4, 4, 1, 8];

        for (cells, count) in shapes.iter().zip(expected) {
            let orientations = all_orientations(cells);
            assert_eq!(
                orientations.len(),
                count,
                "wrong orientation count for {cells:?}"
            );
        }
    }

    #[test]
    fn transforms_preserve_cell_count() {
        for orientation in all_orientations(L_TETROMINO) {
            assert_eq!(orientation.len(), L_TETROMINO.len());
        }
    }

    #[test]
    fn domino_orientations_are_row_and_column() {
        let orientations = all_orientations(&[(3, 3), (3, 4)]);
        assert_eq!(
            orientations,
            vec![vec![(0, 0), (0, 1)], vec![(0, 0), (1, 0)]]
        );
    }
}

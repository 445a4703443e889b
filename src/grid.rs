//! Region grid indexing and text rendering.
//!
//! A region is represented as a flat array in row-major order where each
//! cell holds a 1-based instance number or 0 for empty.

use crate::shapes::{Cell, PlacedShape};

/// Converts a (row, column) cell to a row-major linear index.
#[inline(always)]
pub fn cell_index(width: i32, (row, col): Cell) -> usize {
    row as usize * width as usize + col as usize
}

/// Converts a placement (list of placed instances) to a flat grid.
///
/// Each cell contains a 1-based instance number, or 0 for empty.
pub fn placements_to_grid(width: i32, height: i32, placements: &[PlacedShape]) -> Vec<u8> {
    let mut grid = vec![0u8; width as usize * height as usize];

    for (instance, placement) in placements.iter().enumerate() {
        for &cell in &placement.cells {
            grid[cell_index(width, cell)] = instance as u8 + 1;
        }
    }

    grid
}

/// Formats a placement as a human-readable string.
///
/// One line per region row; each placed instance shows as a capital letter
/// (A for the first instance, wrapping around after Z), empty cells as '.'.
pub fn format_placements(width: i32, height: i32, placements: &[PlacedShape]) -> String {
    let grid = placements_to_grid(width, height, placements);

    let mut output = String::new();
    for row in 0..height {
        for col in 0..width {
            let display_char = match grid[cell_index(width, (row, col))] {
                0 => '.',
                instance => char::from(b'A' + (instance - 1) % 26),
            };
            output.push(display_char);
        }
        output.push('\n');
    }

    output
}

/// Formats a shape's cells as a `#`/`.` grid covering its bounding box.
///
/// Expects canonical cells (minimum row and column at zero), as stored in
/// the catalog.
pub fn format_shape(cells: &[Cell]) -> String {
    let rows = cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
    let cols = cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);

    let mut filled = vec![false; rows as usize * cols as usize];
    for &cell in cells {
        filled[cell_index(cols, cell)] = true;
    }

    let mut output = String::new();
    for row in 0..rows {
        for col in 0..cols {
            output.push(if filled[cell_index(cols, (row, col))] {
                '#'
            } else {
                '.'
            });
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_is_row_major() {
        assert_eq!(cell_index(12, (0, 0)), 0);
        assert_eq!(cell_index(12, (0, 11)), 11);
        assert_eq!(cell_index(12, (1, 0)), 12);
        assert_eq!(cell_index(12, (4, 11)), 59);
    }

    #[test]
    fn placements_render_as_letters() {
        let placements = vec![
            PlacedShape {
                shape: 0,
                cells: vec![(0, 0), (0, 1)],
            },
            PlacedShape {
                shape: 0,
                cells: vec![(1, 1), (1, 2)],
            },
        ];
        assert_eq!(format_placements(3, 2, &placements), "AA.\n.BB\n");
    }

    #[test]
    fn shape_renders_to_its_art() {
        let cells = vec![(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (2, 1), (2, 2)];
        assert_eq!(format_shape(&cells), "###\n#..\n###\n");
    }
}

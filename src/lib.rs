//! Present Packing Feasibility Checker
//!
//! Determines, for each rectangular region under a Christmas tree, whether
//! all of the demanded present shapes can be placed on the region's unit
//! grid at once. Presents may be rotated and flipped freely but must sit on
//! the grid, stay inside the region, and never overlap.

pub mod geometry;
pub mod grid;
pub mod parse;
pub mod shapes;
pub mod solver;

pub use parse::{parse_input, ParseError, PuzzleInput};
pub use shapes::{CatalogError, Cell, PlacedShape, Region, ShapeCatalog};
pub use solver::{is_feasible, solve, SolveError};

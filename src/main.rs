//! Present Packing Feasibility Checker
//!
//! Reads a puzzle input describing present shapes and the regions under the
//! trees, and reports how many regions can fit all of their listed
//! presents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use presents::{grid, parse_input, solver, PuzzleInput};

/// Checks which regions can fit all of their demanded presents.
#[derive(Parser)]
#[command(name = "presents")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle input file.
    input: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Count the regions that can fit all of their presents (the default).
    Count,
    /// Render one witness placement for each region that fits.
    Show,
    /// Print each shape and the number of distinct orientations it has.
    Shapes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let text = match std::fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let puzzle = match parse_input(&text) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Failed to parse {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Command::Show) => run_show(&puzzle),
        Some(Command::Shapes) => {
            run_shapes(&puzzle);
            Ok(())
        }
        Some(Command::Count) | None => run_count(&puzzle),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Counts the feasible regions and prints the total.
fn run_count(puzzle: &PuzzleInput) -> Result<(), solver::SolveError> {
    let mut feasible = 0;
    for region in &puzzle.regions {
        if solver::is_feasible(&puzzle.catalog, region)? {
            feasible += 1;
        }
    }
    println!(
        "{} of {} regions can fit their presents",
        feasible,
        puzzle.regions.len()
    );
    Ok(())
}

/// Renders one witness placement per region, or reports that none exists.
fn run_show(puzzle: &PuzzleInput) -> Result<(), solver::SolveError> {
    for (index, region) in puzzle.regions.iter().enumerate() {
        println!("Region {} ({}x{}):", index, region.width, region.height);
        match solver::solve(&puzzle.catalog, region)? {
            Some(placements) => {
                print!(
                    "{}",
                    grid::format_placements(region.width, region.height, &placements)
                );
            }
            None => println!("does not fit"),
        }
        println!();
    }
    Ok(())
}

/// Prints each shape with its cell and distinct-orientation counts.
fn run_shapes(puzzle: &PuzzleInput) {
    for shape in 0..puzzle.catalog.len() {
        println!(
            "{}: {} cells, {} orientations",
            shape,
            puzzle.catalog.cell_count(shape),
            puzzle.catalog.orientations(shape).len()
        );
        print!("{}", grid::format_shape(puzzle.catalog.cells(shape)));
        println!();
    }
}

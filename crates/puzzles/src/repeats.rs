use crate::prelude::*;
use puzzles_core::repeats;

pub const PUZZLE: Puzzle = Puzzle {
    name: "repeats",
    example: repeats::EXAMPLE,
    expected: repeats::EXAMPLE_ANSWERS,
    solve: repeats::solve,
};

#[derive(Debug, clap::Parser)]
#[command(name = "repeats")]
#[command(about = "Sum numbers made of a repeated digit block within ranges")]
pub struct App {
    #[clap(flatten)]
    options: SolveOptions,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    crate::solver::run(&PUZZLE, app.options, global)
}

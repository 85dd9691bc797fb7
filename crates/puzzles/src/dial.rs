use crate::prelude::{eprintln, *};
use puzzles_core::dial;

pub const PUZZLE: Puzzle = Puzzle {
    name: "dial",
    example: dial::EXAMPLE,
    expected: dial::EXAMPLE_ANSWERS,
    solve: dial::solve,
};

#[derive(Debug, clap::Parser)]
#[command(name = "dial")]
#[command(about = "Count how often a 100-position dial reaches zero")]
pub struct App {
    #[clap(flatten)]
    options: SolveOptions,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Dial size: {}, starting at {}", dial::DIAL_SIZE, dial::START_POSITION);
    }

    crate::solver::run(&PUZZLE, app.options, global)
}

use crate::prelude::{eprintln, println, *};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Options shared by every puzzle subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct SolveOptions {
    /// Input file; `-` or nothing reads from stdin
    #[clap(env = "PUZZLES_INPUT")]
    input: Option<PathBuf>,

    /// Solve the bundled example instead of the input
    #[arg(long)]
    example: bool,

    /// Skip checking the solver against the bundled example first
    #[arg(long)]
    no_check: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    json: bool,

    /// Output as a table
    #[arg(long)]
    table: bool,
}

/// Everything the shell needs to know about one puzzle.
pub struct Puzzle {
    pub name: &'static str,
    pub example: &'static str,
    pub expected: (u64, u64),
    pub solve: fn(&str) -> puzzles_core::Result<(u64, u64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub part1: u64,
    pub part2: u64,
}

impl From<(u64, u64)> for Answers {
    fn from((part1, part2): (u64, u64)) -> Self {
        Self { part1, part2 }
    }
}

/// Read the puzzle input from `path`, or from stdin for `None` / `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
            Ok(input)
        }
    }
}

/// Run the solver against the bundled example and compare with the known answers.
pub fn check_example(puzzle: &Puzzle) -> Result<Answers> {
    let actual = (puzzle.solve)(puzzle.example).map_err(Error::from)?;
    if actual != puzzle.expected {
        return Err(Error::ExampleMismatch {
            puzzle: puzzle.name,
            expected: puzzle.expected,
            actual,
        }
        .into());
    }
    Ok(actual.into())
}

/// Solve `input` with `puzzle`.
pub fn solve(puzzle: &Puzzle, input: &str) -> Result<Answers> {
    let answers = (puzzle.solve)(input).map_err(Error::from)?;
    log::debug!("{} answers: {:?}", puzzle.name, answers);
    Ok(answers.into())
}

/// Subcommand entry point shared by every puzzle.
pub fn run(puzzle: &Puzzle, options: SolveOptions, global: crate::Global) -> Result<()> {
    if !options.no_check {
        let answers = check_example(puzzle)?;
        if global.verbose {
            eprintln!(
                "{} {} example: {} / {}",
                "ok".green().bold(),
                puzzle.name,
                answers.part1,
                answers.part2
            );
        }
    }

    let input = if options.example {
        puzzle.example.to_string()
    } else {
        read_input(options.input.as_deref())?
    };

    if global.verbose {
        eprintln!("{} bytes of input", input.len().to_string().cyan());
    }

    let answers = solve(puzzle, &input)?;

    if options.json {
        output_json(&answers)?;
    } else if options.table {
        output_table(&answers);
    } else {
        output_plain(&answers);
    }

    Ok(())
}

fn output_json(answers: &Answers) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(answers)?);
    Ok(())
}

fn answers_table(answers: &Answers) -> prettytable::Table {
    let mut table = new_answers_table();
    table.add_row(prettytable::row!["1", answers.part1]);
    table.add_row(prettytable::row!["2", answers.part2]);
    table
}

fn output_table(answers: &Answers) {
    answers_table(answers).printstd();
}

fn output_plain(answers: &Answers) {
    println!("{}", answers.part1);
    println!("{}", answers.part2);
}

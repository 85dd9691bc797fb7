pub use crate::error::Error;
pub use crate::solver::{Answers, Puzzle, SolveOptions};

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, Result};
pub use colored::Colorize;

/// Table with a `Part | Answer` header, used by `--table` output.
pub fn new_answers_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .separator(
            prettytable::format::LinePosition::Title,
            prettytable::format::LineSeparator::new('-', '+', '+', '+'),
        )
        .padding(1, 1)
        .build();

    table.set_format(format);
    table.set_titles(prettytable::row!["Part", "Answer"]);

    table
}

use crate::prelude::*;
use clap::Parser;

mod dial;
mod error;
mod prelude;
mod repeats;
mod solver;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Solve the dial tracker and repeated-block puzzles"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "PUZZLES_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Count how often a 100-position dial reaches zero
    Dial(crate::dial::App),

    /// Sum numbers made of a repeated digit block within ranges
    Repeats(crate::repeats::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Dial(sub_app) => crate::dial::run(sub_app, app.global),
        SubCommands::Repeats(sub_app) => crate::repeats::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

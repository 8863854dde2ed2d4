mod cli;
mod grade;
mod table;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            roster,
            responses,
            answer_key,
            points,
            json,
            output,
            dist_output,
        } => {
            if let Err(err) = grade::run(
                &roster,
                &responses,
                &answer_key,
                &points,
                json,
                output.as_deref(),
                dist_output.as_deref(),
            ) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

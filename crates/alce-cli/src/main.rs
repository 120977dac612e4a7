/*!
Command line tools for alce.
*/

mod commands;

use clap::Parser;
use commands::Command;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Alce {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();

    let args = Alce::parse();
    match commands::run(args.command) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

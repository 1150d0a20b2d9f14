use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use logtally_core::analysis::AnalyzeError;
use logtally_core::cli::{self, AnalyzeArgs};
use logtally_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "Count API calls per endpoint, minute and status code in an access log",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let args = Cli::parse();

    init_logging();

    match args.command {
        Some(Command::Config { cmd }) => {
            if let Err(e) = cli::config::run(cmd) {
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }

        None => {
            let result = std::env::current_dir()
                .context("failed to read the working directory")
                .and_then(|cwd| cli::run_analyze(&args.analyze, &cwd));

            if let Err(e) = result {
                if let Some(AnalyzeError::MissingInputPath) = e.downcast_ref::<AnalyzeError>() {
                    eprintln!("Error: Log file path not provided.");
                    eprintln!("{}", Cli::command().render_usage());
                    std::process::exit(2);
                }

                eprintln!("Error occurred: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

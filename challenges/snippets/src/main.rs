use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use snippets::TaskError;

#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "Small teaching snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Object model demonstrations
    ObjectModel {
        /// Problem name to run
        problem: String,
    },
    /// Dynamic Programming problems (input is read from stdin)
    DynamicProgramming {
        /// Problem name to run
        problem: String,
    },
    /// Run the recorded data cases of a problem
    Verify {
        /// Category, e.g. dynamic_programming
        category: String,
        /// Problem name to verify
        problem: String,
    },
    /// List every category and problem
    List,
}

fn execute(command: Commands) -> Result<bool, TaskError> {
    match command {
        Commands::ObjectModel { problem } => {
            snippets::object_model::tasks().run(&problem)?;
        }
        Commands::DynamicProgramming { problem } => {
            snippets::dynamic_programming::tasks().run(&problem)?;
        }
        Commands::Verify { category, problem } => {
            return snippets::find_group(&category)?.verify(&problem);
        }
        Commands::List => {
            for group in snippets::groups() {
                for name in group.names() {
                    println!("{} {}", group.category(), name);
                }
            }
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only task output. Filter via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "submission-check")]
#[command(version, about = "Pre-upload checker for zipped robot submissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one or more submission archives
    ///
    /// A submission must contain team_name.txt and robot/robot.py inside a
    /// robot/ folder, with no other top-level folder, and must not exceed
    /// the size limit (10 MB unless configured otherwise).
    Check {
        /// Paths to submission zip files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Config file (defaults to ./submission-check.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the size limit, in bytes
        #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
        max_size: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            paths,
            config,
            max_size,
            json,
        } => commands::check::run(commands::check::CheckArgs {
            paths,
            config,
            max_size,
            json,
        }),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "submission-check", &mut io::stdout());
            Ok(())
        }
    }
}

use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use hey_calc::{JobFile, Operand};

/// Add two values, or greet someone by name
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the sum of X and Y. Numbers add numerically, text concatenates
    Calc {
        #[clap(allow_hyphen_values = true)]
        x: String,
        #[clap(allow_hyphen_values = true)]
        y: String,
    },
    /// Print `Hey, <NAME>!`
    Greet {
        #[clap(allow_hyphen_values = true)]
        name: String,
    },
    /// Run the jobs in a job file
    Run {
        /// Path to the job file
        #[clap(short = 'J', long, default_value = "./Jobfile.toml")]
        jobfile: String,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logger(args.verbose);
    let start_time = Instant::now();
    if let Err(e) = main_internal(args) {
        eprintln!("Error: {e:?}");
        error_message("failed, please see errors above.");
        return ExitCode::FAILURE;
    }

    log::debug!("done in {:.2?}", start_time.elapsed());
    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    match args.command {
        Command::Calc { x, y } => {
            let x = Operand::parse(&x);
            let y = Operand::parse(&y);
            log::debug!("operands: {x:?}, {y:?}");
            let sum = hey_calc::try_calculate(x, y).context("failed to calculate")?;
            let mut out = std::io::stdout().lock();
            writeln!(out, "{sum}").context("failed to write result")?;
            out.flush().context("failed to flush stdout")?;
        }
        Command::Greet { name } => {
            hey_calc::greet_stdout(&name).context("failed to write greeting")?;
        }
        Command::Run { jobfile } => {
            let jobfile = JobFile::load(&jobfile)?;
            let mut out = std::io::stdout().lock();
            jobfile.run(&mut out).context("failed to run job file")?;
            out.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn error_message(message: impl std::fmt::Display) {
    eprintln!("\x1b[1;31m[hey-calc]\x1b[0m {message}");
}

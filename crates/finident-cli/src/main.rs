mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Installs a stderr subscriber whose level follows `-v`; `--quiet` silences it.
fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.format, cli.no_color, cli.quiet);
    match &cli.command {
        Command::Account { country, input } => {
            let values = cmd::collect_values(input, cli.max_file_size)?;
            cmd::account::run(&values, *country, &config)
        }
        Command::Routing { country, input } => {
            let values = cmd::collect_values(input, cli.max_file_size)?;
            cmd::routing::run(&values, *country, &config)
        }
        Command::Swift {
            country,
            allow_test,
            input,
        } => {
            let values = cmd::collect_values(input, cli.max_file_size)?;
            cmd::swift::run(&values, *country, *allow_test, &config)
        }
        Command::Card {
            min_length,
            max_length,
            input,
        } => {
            let values = cmd::collect_values(input, cli.max_file_size)?;
            cmd::card::run(&values, *min_length, *max_length, &config)
        }
        Command::Countries => cmd::countries::run(cli.format),
    }
}

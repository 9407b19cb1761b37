//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use finident_core::{CountryCode, MAX_CARD_LENGTH, MIN_CARD_LENGTH};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints one line per value plus indented error lines; `Json`
/// prints one NDJSON object per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Where the values to check come from.
///
/// Either positional values (`-` reads one value per line from stdin) or a
/// file with one value per line. Blank lines are skipped.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Values to check, or `-` to read one value per line from stdin.
    #[arg(value_name = "VALUE", required_unless_present = "input")]
    pub values: Vec<String>,

    /// Read values from FILE, one per line (`-` for stdin).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "values")]
    pub input: Option<PathOrStdin>,
}

/// All subcommands supported by `finident`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate IBANs and domestic account numbers (BBAN).
    Account {
        /// Jurisdiction the account is expected to belong to (`ALL` for any).
        #[arg(long, short = 'c', value_name = "CC")]
        country: Option<CountryCode>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate ABA routing transit numbers.
    Routing {
        /// Jurisdiction context; anything other than `US` or `ALL` is rejected.
        #[arg(long, short = 'c', value_name = "CC")]
        country: Option<CountryCode>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate SWIFT/BIC codes.
    Swift {
        /// Country the BIC is expected to be registered in.
        #[arg(long, short = 'c', value_name = "CC")]
        country: Option<CountryCode>,

        /// Accept test and training BICs (location code ending in `0`).
        #[arg(long)]
        allow_test: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate payment card numbers (PAN).
    Card {
        /// Minimum accepted number of digits.
        #[arg(long, default_value_t = MIN_CARD_LENGTH)]
        min_length: usize,

        /// Maximum accepted number of digits.
        #[arg(long, default_value_t = MAX_CARD_LENGTH)]
        max_length: usize,

        #[command(flatten)]
        input: InputArgs,
    },

    /// List the registered IBAN and domestic account-number rules.
    Countries,
}

/// Root CLI struct for the `finident` binary.
#[derive(Parser, Debug)]
#[command(
    name = "finident",
    version,
    about = "Validate and normalize financial identifiers"
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress the summary line and all logging (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Raise the log level on stderr; repeat for more (`-vv`, `-vvv`).
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `FINIDENT_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "FINIDENT_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

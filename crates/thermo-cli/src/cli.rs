use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "thermokit developers",
    version,
    about = "thermokit - Statistical thermochemistry (entropy, enthalpy, Gibbs free energy) from Gaussian frequency calculations, with quasi-RRHO treatment of soft modes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to evaluate species in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every Gaussian log in a folder and write SI and kcal/mol tables.
    Batch(BatchArgs),
    /// Print partition functions, contributions and energies of a single log.
    Species(SpeciesArgs),
    /// Export the vibrational frequencies of a log as a CSV row.
    Frequencies(FrequenciesArgs),
    /// Tabulate zero-point and electronic energies (eV) of every log in a folder.
    Summary(SummaryArgs),
}

/// Conditions and treatment shared by `batch` and `species`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConditionArgs {
    /// Temperature in degrees Celsius [default: 120].
    #[arg(short, long, value_name = "CELSIUS", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Pressure in atmospheres [default: 1].
    #[arg(short, long, value_name = "ATM")]
    pub pressure: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Evaluate soft modes as plain harmonic oscillators, overriding the config file.
    #[arg(long)]
    pub no_qrrho: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S qrrho.cutoff-wavenumber=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Folder containing the Gaussian `.log` files.
    #[arg(required = true, value_name = "DIR")]
    pub dir: PathBuf,

    /// Folder receiving the report folders [default: DIR].
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub conditions: ConditionArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseArg {
    /// Ideal gas: translation, non-linear rigid rotor and vibrations.
    Gas,
    /// Surface-bound: vibrations only.
    Adsorbed,
}

/// Arguments for the `species` subcommand.
#[derive(Args, Debug)]
pub struct SpeciesArgs {
    /// Gaussian `.log` file of the species.
    #[arg(required = true, value_name = "LOG")]
    pub log: PathBuf,

    /// Treatment of the species. Inferred from the file name when omitted.
    #[arg(long, value_enum)]
    pub phase: Option<PhaseArg>,

    #[command(flatten)]
    pub conditions: ConditionArgs,
}

/// Arguments for the `frequencies` subcommand.
#[derive(Args, Debug)]
pub struct FrequenciesArgs {
    /// Gaussian `.log` file to read.
    #[arg(required = true, value_name = "LOG")]
    pub log: PathBuf,

    /// Output CSV file [default: <LOG stem>_frequencies.csv next to the log].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Folder containing the Gaussian `.log` files.
    #[arg(required = true, value_name = "DIR")]
    pub dir: PathBuf,

    /// Output CSV file [default: DIR/energy_summary.csv].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "pfprint",
    about = "Interaction fingerprints for docking poses",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the one-hot interaction table (one row per pose)
    #[command(visible_alias = "t")]
    Table(TableArgs),

    /// Write the interactions of every pose in long form
    #[command(visible_alias = "c")]
    Contacts(ContactsArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Table(args) => &args.io,
            Command::Contacts(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Receptor structure (PDBQT)
    #[arg(short, long, value_name = "FILE")]
    pub receptor: PathBuf,

    /// Docking result(s) (PDBQT), repeatable
    #[arg(
        short,
        long,
        value_name = "FILE",
        required = true,
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    pub input: Vec<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Interaction criteria options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Interaction Criteria")]
pub struct CriteriaOptions {
    /// Custom interaction criteria (TOML file)
    #[arg(long, value_name = "FILE")]
    pub criteria: Option<PathBuf>,

    /// Skip atom pairs with degenerate geometry instead of failing
    #[arg(long)]
    pub skip_degenerate: bool,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub criteria: CriteriaOptions,
}

#[derive(Args)]
pub struct ContactsArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub criteria: CriteriaOptions,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Tab-separated values
    Tsv,
}

pub fn parse() -> Cli {
    Cli::parse()
}

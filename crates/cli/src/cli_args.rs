//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `cf` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use command_forwarder_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cf", "-c", "tools.json", "git", "status", "--short"]);
/// assert_eq!(args.arguments, ["git", "status", "--short"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0, version, about = "Forwards arguments to commands defined in a verb tree.")]
pub struct Args {
    /// Path to the verb configuration file (JSON or YAML).
    ///
    /// If not provided, `config.json` in the current directory is used.
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<String>,

    /// Resolve the action and print what would run, without running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Print help listings without colors.
    #[arg(long, action)]
    pub no_color: bool,

    /// The words to match against the verb tree.
    ///
    /// Once an action matches, every remaining word is forwarded to it
    /// unchanged, including words that look like flags.
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub arguments: Vec<String>,
}

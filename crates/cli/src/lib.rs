//! Command Forwarder CLI Library
//!
//! This crate provides the command-line interface for command-forwarder. It
//! parses the command line, loads the verb tree, dispatches the given words
//! and either runs the matched action or shows help for where matching
//! stopped.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`forwarding`]: The load, dispatch and run workflow
//! - [`presenter`]: Help listings and error output
//!
//! # Examples
//!
//! The CLI binary (`cf`) is used like this:
//!
//! ```bash
//! # Run the `list` action of `git remote`, forwarding `--verbose`
//! cf git remote list --verbose
//!
//! # Use a specific configuration
//! cf -c ~/tools.json docker ps -a
//!
//! # Print the command that would run
//! cf --dry-run git status
//! ```

pub mod cli_args;
pub mod forwarding;
pub mod presenter;

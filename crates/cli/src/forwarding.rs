//! The `cf` workflow: load the tree, dispatch the words, run the action.

use std::borrow::Cow;
use std::io::Write;
use std::process::{ExitCode, ExitStatus};

use itertools::Itertools;
use log::{debug, info};

use command_forwarder_core::dispatch::dispatch;
use command_forwarder_core::error::Result;
use command_forwarder_core::{config, execution, file_handling};

use crate::cli_args::Args;
use crate::presenter::Presenter;

/// Maps a finished child to this process's exit code.
///
/// A child killed by a signal has no code and maps to a plain failure.
pub fn exit_code_for(status: ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }

    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

/// Quotes a word for display so the printed command line reads back as the
/// same argument list in a POSIX shell.
///
/// Words made only of characters a shell leaves alone are returned as-is.
pub fn quote_argument(word: &str) -> Cow<'_, str> {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        return Cow::Borrowed(word);
    }

    Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
}

/// Runs one invocation.
///
/// Help listings go to `out`; dispatch failures are reported through the
/// presenter and end in [`ExitCode::FAILURE`] rather than an error.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or validated, if
/// the action cannot be started, or if writing output fails.
pub fn forward<W: Write, E: Write>(
    args: &Args,
    presenter: &Presenter,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{}`", config_path);

    let root = file_handling::load_verb_tree(&config_path)?;

    let resolution = match dispatch(&root, &args.arguments) {
        Ok(resolution) => resolution,
        Err(error) => {
            presenter.report_dispatch_error(out, err, &error)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let (path, leftover) = resolution.split(&args.arguments);
    info!(
        "Matched `{}` to action `{}`",
        path.iter().join(" "),
        resolution.action.name()
    );

    if args.dry_run {
        writeln!(
            out,
            "Executing command:\n{}",
            std::iter::once(resolution.action.command())
                .chain(leftover.iter().map(String::as_str))
                .map(quote_argument)
                .join(" ")
        )?;
        writeln!(out, "Dry run is specified, exiting without executing.")?;
        return Ok(ExitCode::SUCCESS);
    }

    let status = execution::execute_action(resolution.action, leftover)?;
    debug!("Action `{}` exited with {}", resolution.action.name(), status);

    Ok(exit_code_for(status))
}


#[cfg(all(test, unix))]
mod exit_code_tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_exit_code_for_success() {
        assert_eq!(exit_code_for(ExitStatus::from_raw(0)), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_for_failure_code() {
        // Raw wait status encodes the exit code in the second byte.
        assert_eq!(exit_code_for(ExitStatus::from_raw(3 << 8)), ExitCode::from(3));
    }

    #[test]
    fn test_exit_code_for_signal() {
        assert_eq!(exit_code_for(ExitStatus::from_raw(9)), ExitCode::FAILURE);
    }
}

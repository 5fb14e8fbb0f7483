use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::error::{Error, Result};
use crate::tree::Action;

/// Spawns the action's command with `arguments` and waits for it to exit.
///
/// The arguments are passed to the process as-is, without a shell. The child
/// shares this process's stdin, stdout and stderr.
///
/// # Arguments
///
/// * `action` - The resolved action whose command is spawned
/// * `arguments` - Tokens left over after the action's name
///
/// # Returns
///
/// The exit status of the finished child.
///
/// # Errors
///
/// Returns [`Error::Execution`] if the process cannot be started or waited on.
/// A non-zero exit is not an error; inspect the returned status.
pub fn execute_action<S: AsRef<str>>(action: &Action, arguments: &[S]) -> Result<ExitStatus> {
    let mut command = Command::new(action.command());
    command
        .args(arguments.iter().map(AsRef::as_ref))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!(
        "Executing action `{}`: {} with {} argument(s)",
        action.name(),
        action.command(),
        arguments.len()
    );

    command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|e| Error::execution_error(action.name(), e))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn action(command: &str) -> Action {
        Action::new("test".to_string(), String::new(), command.to_string())
    }

    #[test]
    fn test_execute_successful_command() {
        let status = execute_action(&action("true"), &[] as &[&str]).unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_execute_failing_command() {
        let status = execute_action(&action("false"), &[] as &[&str]).unwrap();
        assert!(!status.success());
    }

    #[test]
    fn test_arguments_are_forwarded() {
        let status = execute_action(&action("test"), &["abc", "=", "abc"]).unwrap();
        assert!(status.success());

        let status = execute_action(&action("test"), &["abc", "=", "xyz"]).unwrap();
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_missing_executable_is_an_execution_error() {
        let result = execute_action(&action("/this/command/does/not/exist"), &["x"]);
        match result {
            Err(Error::Execution { action, .. }) => assert_eq!(action, "test"),
            other => panic!("Expected execution error, got {other:?}"),
        }
    }
}

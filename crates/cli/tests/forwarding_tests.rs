//! End-to-end tests of the `cf` workflow against temporary config files.

use clap::Parser;
use command_forwarder_cli::cli_args::Args;
use command_forwarder_cli::forwarding::forward;
use command_forwarder_cli::presenter::Presenter;
use command_forwarder_core::error::Error;
use std::io::Write;
use std::process::ExitCode;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"{
  "verbs": [
    {
      "name": "fruit",
      "description": "Fruit commands",
      "actions": [
        { "name": "apple", "command": "echo" },
        { "name": "fail", "command": "false" },
        { "name": "ok", "command": "true" },
        { "name": "ghost", "command": "/this/command/does/not/exist" }
      ]
    }
  ]
}"#;

fn config_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

fn run(config: &NamedTempFile, words: &[&str]) -> (Result<ExitCode, Error>, String, String) {
    let mut command_line = vec!["cf", "-c", config.path().to_str().unwrap()];
    command_line.extend_from_slice(words);
    let args = Args::parse_from(command_line);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = forward(&args, &Presenter::new(false), &mut out, &mut err);

    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_dry_run_prints_command_with_leftover() {
    let config = config_file(CONFIG);
    let (result, out, err) = run(&config, &["--dry-run", "FRUIT", "Apple", "x", "--flag"]);

    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    assert!(out.contains("Executing command:\necho x --flag\n"));
    assert!(err.is_empty());
}

#[test]
fn test_dry_run_quotes_arguments() {
    let config = config_file(CONFIG);
    let (result, out, _) = run(&config, &["-d", "fruit", "apple", "a b", "", "it's"]);

    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    assert!(out.contains("Executing command:\necho 'a b' '' 'it'\\''s'\n"));
}

#[test]
fn test_unmatched_word_shows_help() {
    let config = config_file(CONFIG);
    let (result, out, err) = run(&config, &["fruit", "banana"]);

    assert_eq!(result.unwrap(), ExitCode::FAILURE);
    assert!(out.starts_with("fruit - Help Text\nFruit commands\n"));
    assert!(out.contains("- apple\n"));
    assert!(err.contains("argument 'banana' did not match any verbs or actions"));
}

#[test]
fn test_verb_without_action_shows_help() {
    let config = config_file(CONFIG);
    let (result, out, err) = run(&config, &["fruit"]);

    assert_eq!(result.unwrap(), ExitCode::FAILURE);
    assert!(out.starts_with("fruit - Help Text"));
    assert!(err.contains("out of arguments"));
}

#[test]
fn test_unknown_top_level_word_shows_root_help() {
    let config = config_file(CONFIG);
    let (result, out, _) = run(&config, &["vegetable"]);

    assert_eq!(result.unwrap(), ExitCode::FAILURE);
    assert!(out.starts_with("Available verbs\n"));
    assert!(out.contains("- fruit - Fruit commands\n"));
}

#[test]
fn test_missing_config_is_an_error() {
    let args = Args::parse_from(["cf", "-c", "/this/path/does/not/exist.json", "fruit"]);
    let result = forward(&args, &Presenter::new(false), &mut Vec::new(), &mut Vec::new());
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_invalid_config_is_an_error() {
    let config = config_file(r#"{"verbs": [{"name": "fruit"}, {"name": "Fruit"}]}"#);
    let (result, out, _) = run(&config, &["fruit"]);

    let error = result.unwrap_err();
    assert!(error.is_validation());
    assert!(out.is_empty());
}

#[cfg(unix)]
#[test]
fn test_runs_action_and_propagates_status() {
    let config = config_file(CONFIG);

    let (result, _, _) = run(&config, &["fruit", "ok"]);
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);

    let (result, _, _) = run(&config, &["fruit", "fail"]);
    assert_eq!(result.unwrap(), ExitCode::from(1));
}

#[cfg(unix)]
#[test]
fn test_unstartable_action_is_an_execution_error() {
    let config = config_file(CONFIG);
    let (result, _, _) = run(&config, &["fruit", "ghost"]);

    match result {
        Err(Error::Execution { action, .. }) => assert_eq!(action, "ghost"),
        other => panic!("Expected execution error, got {other:?}"),
    }
}

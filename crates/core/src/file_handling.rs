//! Loading the command tree from a configuration file.

use std::fs;

use log::debug;

use crate::definitions::parse_raw_config;
use crate::error::{Error, Result};
use crate::tree::Verb;
use crate::validation;

/// Parses and compiles a configuration document.
///
/// # Arguments
///
/// * `document` - The JSON or YAML configuration text
/// * `source` - Names the document in error messages, usually its path
///
/// # Returns
///
/// The synthetic root verb of the validated tree.
///
/// # Errors
///
/// Returns an error if the document cannot be parsed or fails validation.
pub fn read_verb_tree(document: &str, source: &str) -> Result<Verb> {
    let raw_config = parse_raw_config(document).map_err(|e| {
        Error::document_error(
            "reading".to_string(),
            "config".to_string(),
            source.to_string(),
            e,
        )
    })?;

    validation::compile(&raw_config)
}

/// Loads and validates the command tree from a configuration file.
///
/// # Arguments
///
/// * `config_path` - Path of the configuration file, already expanded
///
/// # Returns
///
/// The synthetic root verb of the validated tree.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The document is malformed or a field has the wrong type
/// - The configuration fails validation
///
/// # Examples
///
/// ```no_run
/// use command_forwarder_core::file_handling::load_verb_tree;
///
/// let root = load_verb_tree("config.json")?;
/// for verb in root.verbs() {
///     println!("{}", verb.name());
/// }
/// # Ok::<(), command_forwarder_core::error::Error>(())
/// ```
pub fn load_verb_tree(config_path: &str) -> Result<Verb> {
    let document = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;
    debug!("Read {} bytes from `{}`", document.len(), config_path);

    read_verb_tree(&document, config_path)
}

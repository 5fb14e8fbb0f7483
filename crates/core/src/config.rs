//! Configuration path resolution.

/// Config file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path with shell expansions like
/// `~` resolved. Otherwise uses [`DEFAULT_CONFIG_FILE`] relative to the
/// current working directory.
///
/// # Arguments
///
/// * `config_path_arg` - Optional path given with `-c`/`--config`
///
/// # Returns
///
/// The path to read the configuration from.
///
/// # Examples
///
/// ```
/// use command_forwarder_core::config::get_config_path;
///
/// assert_eq!(get_config_path(None), "config.json");
/// assert_eq!(get_config_path(Some("/etc/cf.json")), "/etc/cf.json");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    match config_path_arg {
        Some(config_path) => shellexpand::tilde(config_path).to_string(),
        None => DEFAULT_CONFIG_FILE.to_string(),
    }
}

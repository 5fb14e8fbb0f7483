//! Compiles a [`RawConfig`] into an immutable [`Verb`] tree.
//!
//! Each level is compiled bottom-up: a verb's children are fully validated
//! before the verb itself is built. Entries without a name, and actions
//! without a command, are dropped with a warning. A name that collides with
//! a sibling (verbs and actions share one case-insensitive namespace) rejects
//! the whole configuration.

use std::collections::HashSet;

use log::{debug, warn};

use crate::definitions::{RawAction, RawConfig, RawVerb};
use crate::error::{Error, Result};
use crate::tree::{fold_name, Action, Verb};

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn describe_location(location: &str) -> String {
    if location.is_empty() {
        "the root".to_string()
    } else {
        format!("verb `{location}`")
    }
}

fn child_location(location: &str, name: &str) -> String {
    if location.is_empty() {
        name.to_string()
    } else {
        format!("{location} {name}")
    }
}

/// Validates one sibling list. `location` is the token path of the owning verb.
fn compile_level(
    location: &str,
    raw_verbs: &[RawVerb],
    raw_actions: &[RawAction],
) -> Result<(Vec<Verb>, Vec<Action>)> {
    let mut used_names: HashSet<String> = HashSet::new();
    let mut verbs = Vec::with_capacity(raw_verbs.len());
    let mut actions = Vec::with_capacity(raw_actions.len());

    for (index, raw_verb) in raw_verbs.iter().enumerate() {
        let Some(name) = non_blank(raw_verb.name.as_ref()) else {
            warn!(
                "Skipping verb #{} under {} without a name.",
                index + 1,
                describe_location(location)
            );
            continue;
        };

        if !used_names.insert(fold_name(name)) {
            return Err(Error::duplicate_name(name, location));
        }

        let (child_verbs, child_actions) = compile_level(
            &child_location(location, name),
            raw_verb.verbs.as_deref().unwrap_or_default(),
            raw_verb.actions.as_deref().unwrap_or_default(),
        )?;

        if child_verbs.is_empty() && child_actions.is_empty() {
            debug!("Verb `{}` has no verbs or actions.", child_location(location, name));
        }

        verbs.push(Verb::new(
            name.to_string(),
            non_blank(raw_verb.description.as_ref())
                .unwrap_or_default()
                .to_string(),
            child_verbs,
            child_actions,
        ));
    }

    for (index, raw_action) in raw_actions.iter().enumerate() {
        let Some(name) = non_blank(raw_action.name.as_ref()) else {
            warn!(
                "Skipping action #{} under {} without a name.",
                index + 1,
                describe_location(location)
            );
            continue;
        };

        if used_names.contains(&fold_name(name)) {
            return Err(Error::duplicate_name(name, location));
        }

        let Some(command) = non_blank(raw_action.command.as_ref()) else {
            warn!(
                "Skipping action `{}` without a command.",
                child_location(location, name)
            );
            continue;
        };

        used_names.insert(fold_name(name));
        actions.push(Action::new(
            name.to_string(),
            non_blank(raw_action.description.as_ref())
                .unwrap_or_default()
                .to_string(),
            command.to_string(),
        ));
    }

    Ok((verbs, actions))
}

/// Compiles a raw configuration into the root [`Verb`] of a command tree.
///
/// The input is left untouched and no partial tree is ever returned.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration has no `verbs` list
/// - Two siblings share a name (case-insensitive), anywhere in the tree
/// - No top-level verb is left after dropping invalid entries
pub fn compile(raw_config: &RawConfig) -> Result<Verb> {
    let Some(raw_verbs) = raw_config.verbs.as_deref() else {
        return Err(Error::MissingVerbs);
    };

    let (verbs, _) = compile_level("", raw_verbs, &[])?;

    if verbs.is_empty() {
        return Err(Error::EmptyConfiguration);
    }

    debug!("Compiled {} top-level verb(s).", verbs.len());
    Ok(Verb::root(verbs))
}

//! Resolves a token sequence to an [`Action`] by walking a [`Verb`] tree.
//!
//! Dispatch is a single forward pass: each token either resolves an action
//! of the current verb, descends into one of its child verbs, or fails.
//! Actions are checked before verbs at every level.

use std::fmt::{Display, Formatter};

use log::debug;
use thiserror::Error;

use crate::tree::{Action, Verb};

/// A successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub action: &'a Action,
    /// Tokens consumed to reach the action, including the action's own token.
    pub consumed: usize,
}

impl Resolution<'_> {
    /// Splits the dispatched tokens into the path that was matched and the
    /// leftover tokens to forward to the action.
    pub fn split<'t, S>(&self, tokens: &'t [S]) -> (&'t [S], &'t [S]) {
        tokens.split_at(self.consumed.min(tokens.len()))
    }
}

/// Why a dispatch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchFailure {
    /// A token matched neither an action nor a verb of the current verb.
    Unmatched { token: String },
    /// The tokens ran out while positioned on a verb.
    OutOfTokens,
}

impl Display for DispatchFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchFailure::Unmatched { token } => write!(
                formatter,
                "No match found (argument '{token}' did not match any verbs or actions)."
            ),
            DispatchFailure::OutOfTokens => formatter.write_str("No match found (out of arguments)."),
        }
    }
}

/// A failed dispatch, carrying the verb the cursor was on when it failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct DispatchError<'a> {
    pub verb: &'a Verb,
    pub reason: DispatchFailure,
}

/// Walks `tokens` down from `root` and returns the first action reached.
///
/// Any verb can be passed as `root`, so dispatch can start part way down a
/// tree. The tree is only read.
///
/// # Arguments
///
/// * `root` - The verb to start matching from
/// * `tokens` - Command-line words, matched case-insensitively
///
/// # Returns
///
/// The action reached and how many tokens led to it.
///
/// # Errors
///
/// Returns a [`DispatchError`] if a token matches nothing at its level, or if
/// the tokens are used up on a verb. An empty token sequence fails the same
/// way, with `root` as the context.
pub fn dispatch<'a, S: AsRef<str>>(
    root: &'a Verb,
    tokens: &[S],
) -> Result<Resolution<'a>, DispatchError<'a>> {
    let mut current = root;
    let mut consumed = 0;

    for token in tokens {
        let token = token.as_ref();
        consumed += 1;

        if let Some(action) = current.find_action(token) {
            debug!(
                "Token `{token}` resolved action `{}` after {consumed} token(s).",
                action.name()
            );
            return Ok(Resolution { action, consumed });
        }

        let Some(verb) = current.find_verb(token) else {
            return Err(DispatchError {
                verb: current,
                reason: DispatchFailure::Unmatched {
                    token: token.to_string(),
                },
            });
        };

        debug!("Token `{token}` matched verb `{}`.", verb.name());
        current = verb;
    }

    Err(DispatchError {
        verb: current,
        reason: DispatchFailure::OutOfTokens,
    })
}

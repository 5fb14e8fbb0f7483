//! Help output shown when the words given do not lead to an action.
//!
//! Lists the subtree of the verb where dispatch stopped, verbs in yellow and
//! actions in cyan, followed by the failure message.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

use command_forwarder_core::dispatch::{DispatchError, DispatchFailure};
use command_forwarder_core::tree::Verb;

const VERB_COLOR: Color = Color::Yellow;
const ACTION_COLOR: Color = Color::Cyan;
const ERROR_COLOR: Color = Color::Red;

/// Most names offered after an unmatched word.
const MAX_SUGGESTIONS: usize = 3;

pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_colored<W: Write>(&self, out: &mut W, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            queue!(out, Print(text))
        }
    }

    fn write_entry<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        description: &str,
        color: Color,
    ) -> io::Result<()> {
        self.write_colored(out, name, color)?;
        if !description.is_empty() {
            write!(out, " - {description}")?;
        }
        writeln!(out)
    }

    fn write_children<W: Write>(&self, out: &mut W, verb: &Verb, indentation: &str) -> io::Result<()> {
        let nested = format!("{indentation}  ");

        for child in verb.verbs() {
            write!(out, "{indentation}- ")?;
            self.write_entry(out, child.name(), child.description(), VERB_COLOR)?;
            self.write_children(out, child, &nested)?;
        }

        for action in verb.actions() {
            write!(out, "{indentation}- ")?;
            self.write_entry(out, action.name(), action.description(), ACTION_COLOR)?;
        }

        Ok(())
    }

    /// Writes the help listing for `verb`: its name and description, then
    /// every verb and action below it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_help<W: Write>(&self, out: &mut W, verb: &Verb) -> io::Result<()> {
        if verb.is_root() {
            writeln!(out, "Available verbs")?;
        } else {
            self.write_colored(out, verb.name(), VERB_COLOR)?;
            writeln!(out, " - Help Text")?;
            if !verb.description().is_empty() {
                writeln!(out, "{}", verb.description())?;
            }
        }
        writeln!(out)?;

        self.write_children(out, verb, "")?;
        out.flush()
    }

    /// Writes a failure message on its own line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        self.write_colored(out, message, ERROR_COLOR)?;
        writeln!(out)?;
        out.flush()
    }

    /// Reports a failed dispatch: help for the verb it stopped on goes to
    /// `out`, the failure message and any suggestions go to `err`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to either output fails.
    pub fn report_dispatch_error<W: Write, E: Write>(
        &self,
        out: &mut W,
        err: &mut E,
        error: &DispatchError<'_>,
    ) -> io::Result<()> {
        self.write_help(out, error.verb)?;
        writeln!(out)?;
        out.flush()?;

        self.write_error(err, &error.to_string())?;

        if let DispatchFailure::Unmatched { token } = &error.reason {
            let suggestions = suggest(error.verb, token);
            if !suggestions.is_empty() {
                writeln!(err, "Did you mean: {}?", suggestions.iter().join(", "))?;
            }
        } else if !error.verb.is_root() {
            writeln!(
                err,
                "`{}` is a verb. Are you missing an argument?",
                error.verb.name()
            )?;
        }

        err.flush()
    }
}

/// Names of the children of `verb` that look like `token`, best match first.
///
/// Only used for display; dispatch never matches on these.
pub fn suggest<'a>(verb: &'a Verb, token: &str) -> Vec<&'a str> {
    let matcher = SkimMatcherV2::default().ignore_case();

    verb.child_names()
        .filter_map(|name| {
            matcher
                .fuzzy_match(name, token)
                .map(|score| (score, name))
        })
        .sorted_by(|(left, _), (right, _)| right.cmp(left))
        .map(|(_, name)| name)
        .take(MAX_SUGGESTIONS)
        .collect()
}

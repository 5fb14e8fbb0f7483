//! The compiled command tree.
//!
//! A [`Verb`] groups further verbs and [`Action`]s; an action is bound to an
//! executable. Trees are only produced by [`crate::validation::compile`] and
//! are never modified afterwards, so every field is read through accessors.

fn folded_chars(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Case folding used for every name comparison.
///
/// Lower-cases one character at a time, so the result depends neither on
/// the process locale nor on a letter's position in the word (`Σ` is always
/// `σ`, never the final form `ς`).
pub(crate) fn fold_name(name: &str) -> String {
    folded_chars(name).collect()
}

/// Compares two names the same way the validator's name sets do.
pub fn names_match(left: &str, right: &str) -> bool {
    folded_chars(left).eq(folded_chars(right))
}

/// A named terminal node bound to an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    description: String,
    command: String,
}

impl Action {
    pub(crate) fn new(name: String, description: String, command: String) -> Self {
        Self {
            name,
            description,
            command,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The executable path or name to spawn.
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// A named group of verbs and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    name: String,
    description: String,
    verbs: Vec<Verb>,
    actions: Vec<Action>,
}

impl Verb {
    pub(crate) fn new(
        name: String,
        description: String,
        verbs: Vec<Verb>,
        actions: Vec<Action>,
    ) -> Self {
        Self {
            name,
            description,
            verbs,
            actions,
        }
    }

    /// The synthetic, unnamed verb owning the top level of a configuration.
    pub(crate) fn root(verbs: Vec<Verb>) -> Self {
        Self::new(String::new(), String::new(), verbs, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Finds a direct child action by exact, case-insensitive name.
    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions
            .iter()
            .find(|action| names_match(action.name(), name))
    }

    /// Finds a direct child verb by exact, case-insensitive name.
    pub fn find_verb(&self, name: &str) -> Option<&Verb> {
        self.verbs.iter().find(|verb| names_match(verb.name(), name))
    }

    /// Names of all direct children, verbs first.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.verbs
            .iter()
            .map(Verb::name)
            .chain(self.actions.iter().map(Action::name))
    }
}

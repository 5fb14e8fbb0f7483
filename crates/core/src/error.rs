use thiserror::Error;

use crate::definitions::DocumentError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Document {
        action: String,
        file_description: String,
        path: String,
        original: DocumentError,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Configuration contains no verbs.")]
    MissingVerbs,

    #[error("Configuration contains no usable verbs after dropping invalid entries.")]
    EmptyConfiguration,

    #[error("Duplicate name `{}` under {}. Names must be unique among verbs and actions at the same level (case-insensitive).", .name, .parent)]
    DuplicateName { name: String, parent: String },

    #[error("Failed to execute action `{}`: {}", .action, .original)]
    Execution {
        action: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn document_error(
        action: String,
        file_description: String,
        path: String,
        original: DocumentError,
    ) -> Self {
        Self::Document {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn duplicate_name(name: &str, parent: &str) -> Self {
        let parent = if parent.is_empty() {
            "the root".to_string()
        } else {
            format!("verb `{parent}`")
        };

        Self::DuplicateName {
            name: name.to_string(),
            parent,
        }
    }

    pub fn execution_error(action: &str, original: std::io::Error) -> Self {
        Self::Execution {
            action: action.to_string(),
            original,
        }
    }

    /// Whether this error was raised while compiling the configuration into a tree.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingVerbs | Self::EmptyConfiguration | Self::DuplicateName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_mentions_root() {
        let error = Error::duplicate_name("build", "");
        assert_eq!(
            error.to_string(),
            "Duplicate name `build` under the root. Names must be unique among verbs and actions at the same level (case-insensitive)."
        );
    }

    #[test]
    fn test_duplicate_name_mentions_parent_verb() {
        let error = Error::duplicate_name("apple", "fruit");
        assert!(error.to_string().contains("under verb `fruit`"));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::MissingVerbs.is_validation());
        assert!(Error::EmptyConfiguration.is_validation());
        assert!(Error::duplicate_name("a", "b").is_validation());
        assert!(!Error::execution_error(
            "apple",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
        )
        .is_validation());
    }
}

//! Command Forwarder Core Library
//!
//! This crate provides the core functionality for command-forwarder, a tool
//! that matches a sequence of words against a tree of named verbs and runs
//! the action the words lead to, forwarding the remaining words to it as
//! arguments.
//!
//! # Key Features
//!
//! - **Command Definitions**: Parse loosely structured JSON/YAML configurations
//! - **Validation**: Compile configurations into an immutable, well-formed tree
//! - **Dispatch**: Resolve a token sequence to an action, with context on failure
//! - **Execution**: Run the resolved action with the leftover tokens
//! - **Error Handling**: Error types for every failure mode
//!
//! # Examples
//!
//! Resolving an action from a configuration:
//!
//! ```
//! use command_forwarder_core::dispatch::dispatch;
//! use command_forwarder_core::file_handling::read_verb_tree;
//!
//! let root = read_verb_tree(
//!     r#"{"verbs": [{"name": "fruit", "actions": [{"name": "apple", "command": "echo"}]}]}"#,
//!     "example",
//! )?;
//!
//! let tokens = ["fruit", "apple", "x"];
//! let resolution = dispatch(&root, &tokens).expect("apple should resolve");
//! assert_eq!(resolution.action.name(), "apple");
//! assert_eq!(resolution.split(&tokens).1, ["x"]);
//! # Ok::<(), command_forwarder_core::error::Error>(())
//! ```

pub mod config;
pub mod definitions;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod tree;
pub mod validation;

//! # questionnaire
//!
//! Short, typed helpers for one-off interactive CLI questions.
//!
//! Every helper builds a single question, generates a unique name for it,
//! merges the caller's overrides onto sensible defaults, hands it to a
//! [`PromptEngine`] and returns the one answer it asked for.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::{NumberOptions, Questionnaire};
//! use questionnaire_requestty::RequesttyEngine;
//!
//! let mut q = Questionnaire::new(RequesttyEngine::new());
//!
//! let hungry = q.yes_or_no("Are you hungry yet?", false)?;
//! let name = q.ask("What is your username?", Default::default())?;
//! let framework = q.select_one("Favorite framework", &["Vue", "React"], Default::default())?;
//! let age = q.ask_for_number("How old are you?", NumberOptions::default())?;
//! ```
//!
//! ## Engines
//!
//! Engines implement [`PromptEngine`]:
//! - `questionnaire-requestty` - terminal prompts via requestty
//! - [`ScriptedEngine`] - replays canned replies, for tests

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod name;
pub use name::NameGenerator;

mod options;
pub use options::{
    CheckboxOptions, EditorOptions, ExpandOptions, InputOptions, ListOptions, Merge,
    NumberOptions, PasswordOptions, RawListOptions,
};

mod number;
pub use number::number_guard;

mod choice;
pub use choice::Choice;

mod facade;
pub use facade::{Questionnaire, parse_true_or_false};

// Scripted engine for exercising questions without a terminal
mod scripted_engine;
pub use scripted_engine::{Reply, ScriptedEngine, ScriptedEngineError};

/// Result type returned by the questionnaire helpers.
pub type Result<T, E = QuestionnaireError> = std::result::Result<T, E>;

//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types shared by the façade and the engines:
//! - `Question` and `QuestionKind` - One-off question descriptors and their kinds
//! - `Answers`, `AnswerValue` and `QuestionName` - The engine's answer map and its keys
//! - `Validator` and `Filter` - Caller-supplied callbacks carried by descriptors
//! - `PromptEngine` - The trait implemented by interactive engines

mod question_name;
pub use question_name::QuestionName;

mod callbacks;
pub use callbacks::{Filter, Validator};

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod number;
pub use number::{INVALID_NUMBER, parse_number};

mod question;
pub use question::{
    CheckboxChoice, CheckboxQuestion, ConfirmQuestion, EditorQuestion, ExpandChoice,
    ExpandQuestion, InputQuestion, ListQuestion, NumberQuestion, PasswordQuestion, Question,
    QuestionKind, RawListQuestion,
};

mod error;
pub use error::QuestionnaireError;

mod traits;
pub use traits::PromptEngine;

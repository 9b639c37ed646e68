//! Scripted engine for exercising questions without user interaction.
//!
//! `ScriptedEngine` answers questions from a queue of canned replies, in the
//! order they were added. A reply rejected by the question's validator is
//! recorded and the next reply is tried, just like a user typing again.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{NumberOptions, Questionnaire, ScriptedEngine};
//!
//! let engine = ScriptedEngine::new()
//!     .with_text("forty-two")
//!     .with_text("42");
//!
//! let mut q = Questionnaire::new(engine);
//! let answer = q.ask_for_number("Answer?", NumberOptions::default()).unwrap();
//!
//! assert_eq!(answer, 42.0);
//! assert_eq!(q.engine().rejections(), ["A valid number is expected!"]);
//! ```

use std::collections::VecDeque;

use questionnaire_types::{
    AnswerValue, Answers, PromptEngine, Question, QuestionKind, QuestionName,
};
use tracing::debug;

/// A canned reply, standing in for what a user would type or select.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Typed text (input, number, password and editor questions).
    Text(String),

    /// A yes/no answer (confirm questions).
    Confirm(bool),

    /// Index of the picked choice (raw list and list questions).
    Select(usize),

    /// Shortcut key of the picked choice (expand questions).
    Key(char),

    /// Indices of the checked choices, in selection order (checkbox questions).
    Selections(Vec<usize>),

    /// Just press enter and take whatever the question preselects.
    Default,
}

/// Error type for ScriptedEngine.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedEngineError {
    #[error("No scripted reply left for question: {0}")]
    Exhausted(QuestionName),

    #[error("Scripted reply {reply:?} cannot answer {kind} question {name}")]
    Unanswerable {
        name: QuestionName,
        kind: &'static str,
        reply: Reply,
    },
}

/// An engine that plays back pre-configured replies.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    replies: VecDeque<Reply>,
    asked: Vec<Question>,
    rejections: Vec<String>,
}

impl ScriptedEngine {
    /// Create an engine with no replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push_back(reply);
        self
    }

    /// Queue typed text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_reply(Reply::Text(text.into()))
    }

    /// Queue a yes/no answer.
    pub fn with_confirm(self, answer: bool) -> Self {
        self.with_reply(Reply::Confirm(answer))
    }

    /// Queue a list selection.
    pub fn with_selection(self, index: usize) -> Self {
        self.with_reply(Reply::Select(index))
    }

    /// Queue an expand shortcut key.
    pub fn with_key(self, key: char) -> Self {
        self.with_reply(Reply::Key(key))
    }

    /// Queue checkbox selections.
    pub fn with_selections(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.with_reply(Reply::Selections(indices.into_iter().collect()))
    }

    /// Queue a bare enter key press.
    pub fn with_default(self) -> Self {
        self.with_reply(Reply::Default)
    }

    /// Every question submitted so far, in order.
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }

    /// Validator messages for every rejected reply, in order.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Replies not consumed yet.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl PromptEngine for ScriptedEngine {
    type Error = ScriptedEngineError;

    fn submit(&mut self, question: Question) -> Result<Answers, Self::Error> {
        self.asked.push(question.clone());
        let (name, _, kind) = question.into_parts();

        loop {
            let reply = self
                .replies
                .pop_front()
                .ok_or_else(|| ScriptedEngineError::Exhausted(name.clone()))?;

            match answer(&kind, &reply) {
                Some(Ok(value)) => return Ok(Answers::single(name, value)),
                Some(Err(message)) => {
                    debug!(name = %name, %message, "Scripted reply rejected");
                    self.rejections.push(message);
                }
                None => {
                    return Err(ScriptedEngineError::Unanswerable {
                        name,
                        kind: kind.type_tag(),
                        reply,
                    });
                }
            }
        }
    }
}

/// Answer `kind` with `reply`. `None` if the reply does not fit the question,
/// `Some(Err)` if the question's validator rejects it.
fn answer(kind: &QuestionKind, reply: &Reply) -> Option<Result<AnswerValue, String>> {
    match (kind, reply) {
        (QuestionKind::Confirm(_), Reply::Confirm(b)) => Some(Ok(AnswerValue::Bool(*b))),
        (QuestionKind::Confirm(confirm), Reply::Default) => {
            Some(Ok(AnswerValue::Bool(confirm.default)))
        }

        (QuestionKind::Input(input), Reply::Text(text)) => {
            let value = match &input.default {
                Some(default) if text.is_empty() => default.clone(),
                _ => text.clone(),
            };
            Some(input.check(&value).map(|()| AnswerValue::String(value)))
        }
        (QuestionKind::Input(input), Reply::Default) => {
            let value = input.default.clone().unwrap_or_default();
            Some(input.check(&value).map(|()| AnswerValue::String(value)))
        }

        (QuestionKind::Password(password), Reply::Text(text)) => {
            Some(password.check(text).map(|()| AnswerValue::String(text.clone())))
        }

        (QuestionKind::Editor(editor), Reply::Text(text)) => {
            Some(editor.check(text).map(|()| AnswerValue::String(text.clone())))
        }
        (QuestionKind::Editor(editor), Reply::Default) => {
            let value = editor.default.clone().unwrap_or_default();
            Some(editor.check(&value).map(|()| AnswerValue::String(value)))
        }

        (QuestionKind::Number(number), Reply::Text(text)) => {
            Some(number.finish(text).map(AnswerValue::Number))
        }
        (QuestionKind::Number(number), Reply::Default) => {
            Some(number.finish("").map(AnswerValue::Number))
        }

        (QuestionKind::RawList(list), Reply::Select(index)) => {
            list.finish(*index).map(|s| Ok(AnswerValue::String(s)))
        }
        (QuestionKind::RawList(list), Reply::Default) => list
            .finish(list.default_index().unwrap_or(0))
            .map(|s| Ok(AnswerValue::String(s))),

        (QuestionKind::List(list), Reply::Select(index)) => {
            list.finish(*index).map(|s| Ok(AnswerValue::String(s)))
        }
        (QuestionKind::List(list), Reply::Default) => list
            .finish(list.default_index().unwrap_or(0))
            .map(|s| Ok(AnswerValue::String(s))),

        (QuestionKind::Expand(expand), Reply::Key(key)) => {
            expand.finish(*key).map(|s| Ok(AnswerValue::String(s)))
        }
        (QuestionKind::Expand(expand), Reply::Default) => expand
            .default
            .and_then(|key| expand.finish(key))
            .map(|s| Ok(AnswerValue::String(s))),

        (QuestionKind::Checkbox(checkbox), Reply::Selections(indices)) => {
            if indices.iter().any(|&i| i >= checkbox.choices.len()) {
                return None;
            }
            Some(checkbox.finish(indices).map(AnswerValue::Strings))
        }
        (QuestionKind::Checkbox(checkbox), Reply::Default) => {
            let indices: Vec<usize> = checkbox
                .initially_checked()
                .iter()
                .enumerate()
                .filter_map(|(i, &checked)| checked.then_some(i))
                .collect();
            Some(checkbox.finish(&indices).map(AnswerValue::Strings))
        }

        _ => None,
    }
}

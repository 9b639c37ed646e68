//! Requestty implementation of the PromptEngine trait.

use questionnaire::{
    AnswerValue, Answers, CheckboxQuestion, ConfirmQuestion, EditorQuestion, ExpandQuestion,
    InputQuestion, ListQuestion, NumberQuestion, PasswordQuestion, PromptEngine, Question,
    QuestionKind, QuestionName, RawListQuestion,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for the Requestty engine.
#[derive(Debug, Error)]
pub enum RequesttyError {
    /// User cancelled the question (e.g., pressed Ctrl+C).
    #[error("Question cancelled by user")]
    Cancelled,

    /// An error occurred during prompting.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Unexpected answer type received.
    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: String, got: String },
}

impl RequesttyError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<requestty::ErrorKind> for RequesttyError {
    fn from(err: requestty::ErrorKind) -> Self {
        match err {
            requestty::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::PromptError(err.to_string()),
        }
    }
}

fn missing_choice(selected: &str) -> RequesttyError {
    RequesttyError::PromptError(format!("No choice for selection {selected}"))
}

// requestty panics on these, so they are turned into errors up front.
fn check_expand_keys(expand: &ExpandQuestion) -> Result<(), RequesttyError> {
    let mut seen = Vec::with_capacity(expand.choices.len());

    for choice in &expand.choices {
        let key = choice.key.to_ascii_lowercase();
        if key == 'h' {
            return Err(RequesttyError::PromptError(format!(
                "Key 'h' is reserved for help (choice '{}')",
                choice.name
            )));
        }
        if seen.contains(&key) {
            return Err(RequesttyError::PromptError(format!(
                "Duplicate key '{key}' (choice '{}')",
                choice.name
            )));
        }
        seen.push(key);
    }

    if let Some(default) = expand.default
        && !seen.contains(&default.to_ascii_lowercase())
    {
        return Err(RequesttyError::PromptError(format!(
            "Default key '{default}' is not among the choices"
        )));
    }

    Ok(())
}

// Written the way `parse_number` reads it back.
fn render_number(n: f64) -> String {
    if n.is_infinite() {
        let sign = if n.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        n.to_string()
    }
}

fn unexpected(expected: &str, got: &requestty::Answer) -> RequesttyError {
    RequesttyError::UnexpectedAnswerType {
        expected: expected.to_string(),
        got: format!("{got:?}"),
    }
}

/// Requestty engine for interactive CLI prompts.
///
/// Validators run inside requestty, so a rejected input is reported next to
/// the prompt and the user can correct it in place.
#[derive(Debug, Default, Clone)]
pub struct RequesttyEngine;

impl RequesttyEngine {
    /// Create a new Requestty engine.
    pub const fn new() -> Self {
        Self
    }

    fn ask_confirm(
        &self,
        name: &QuestionName,
        message: &str,
        confirm: &ConfirmQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let q = requestty::Question::confirm(name.as_str())
            .message(message)
            .default(confirm.default)
            .build();

        match requestty::prompt_one(q)? {
            requestty::Answer::Bool(b) => Ok(AnswerValue::Bool(b)),
            other => Err(unexpected("Bool", &other)),
        }
    }

    fn ask_input(
        &self,
        name: &QuestionName,
        message: &str,
        input: &InputQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let mut q = requestty::Question::input(name.as_str()).message(message);

        if let Some(default) = &input.default {
            q = q.default(default.clone());
        }

        let check = input.clone();
        let validate_fn = move |value: &str, _: &requestty::Answers| -> Result<(), String> {
            match &check.default {
                Some(default) if value.is_empty() => check.check(default),
                _ => check.check(value),
            }
        };

        match requestty::prompt_one(q.validate(validate_fn).build())? {
            requestty::Answer::String(s) => Ok(AnswerValue::String(s)),
            other => Err(unexpected("String", &other)),
        }
    }

    fn ask_number(
        &self,
        name: &QuestionName,
        message: &str,
        number: &NumberQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        // Rendered as text input so the number check's own message is shown.
        let mut q = requestty::Question::input(name.as_str()).message(message);

        if let Some(default) = number.default {
            q = q.default(render_number(default));
        }

        let check = number.clone();
        let validate_fn = move |value: &str, _: &requestty::Answers| -> Result<(), String> {
            check.finish(value).map(|_| ())
        };

        match requestty::prompt_one(q.validate(validate_fn).build())? {
            requestty::Answer::String(s) => number
                .finish(&s)
                .map(AnswerValue::Number)
                .map_err(RequesttyError::PromptError),
            other => Err(unexpected("String", &other)),
        }
    }

    fn ask_password(
        &self,
        name: &QuestionName,
        message: &str,
        password: &PasswordQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let mut q = requestty::Question::password(name.as_str()).message(message);

        if let Some(mask) = password.mask {
            q = q.mask(mask);
        }

        let check = password.clone();
        let validate_fn = move |value: &str, _: &requestty::Answers| -> Result<(), String> {
            check.check(value)
        };

        match requestty::prompt_one(q.validate(validate_fn).build())? {
            requestty::Answer::String(s) => Ok(AnswerValue::String(s)),
            other => Err(unexpected("String", &other)),
        }
    }

    fn ask_editor(
        &self,
        name: &QuestionName,
        message: &str,
        editor: &EditorQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let mut q = requestty::Question::editor(name.as_str()).message(message);

        if let Some(default) = &editor.default {
            q = q.default(default.clone());
        }
        if let Some(extension) = &editor.extension {
            q = q.extension(extension.clone());
        }

        let check = editor.clone();
        let validate_fn = move |value: &str, _: &requestty::Answers| -> Result<(), String> {
            check.check(value)
        };

        match requestty::prompt_one(q.validate(validate_fn).build())? {
            requestty::Answer::String(s) => Ok(AnswerValue::String(s)),
            other => Err(unexpected("String", &other)),
        }
    }

    fn ask_raw_list(
        &self,
        name: &QuestionName,
        message: &str,
        list: &RawListQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let mut q = requestty::Question::raw_select(name.as_str())
            .message(message)
            .choices(list.choices.clone())
            .should_loop(list.should_loop);

        if let Some(default) = list.default_index() {
            q = q.default(default);
        }

        match requestty::prompt_one(q.build())? {
            requestty::Answer::ListItem(item) => list
                .finish(item.index)
                .map(AnswerValue::String)
                .ok_or_else(|| missing_choice(&item.index.to_string())),
            other => Err(unexpected("ListItem", &other)),
        }
    }

    fn ask_list(
        &self,
        name: &QuestionName,
        message: &str,
        list: &ListQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let mut q = requestty::Question::select(name.as_str())
            .message(message)
            .choices(list.choices.clone())
            .should_loop(list.should_loop);

        if let Some(default) = list.default_index() {
            q = q.default(default);
        }

        match requestty::prompt_one(q.build())? {
            requestty::Answer::ListItem(item) => list
                .finish(item.index)
                .map(AnswerValue::String)
                .ok_or_else(|| missing_choice(&item.index.to_string())),
            other => Err(unexpected("ListItem", &other)),
        }
    }

    fn ask_expand(
        &self,
        name: &QuestionName,
        message: &str,
        expand: &ExpandQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        check_expand_keys(expand)?;

        let choices: Vec<(char, String)> = expand
            .choices
            .iter()
            .map(|c| (c.key, c.name.clone()))
            .collect();

        let mut q = requestty::Question::expand(name.as_str())
            .message(message)
            .choices(choices);

        if let Some(key) = expand.default {
            q = q.default(key);
        }

        match requestty::prompt_one(q.build())? {
            requestty::Answer::ExpandItem(item) => expand
                .choices
                .iter()
                .find(|c| c.key.eq_ignore_ascii_case(&item.key))
                .and_then(|c| expand.finish(c.key))
                .map(AnswerValue::String)
                .ok_or_else(|| missing_choice(&item.key.to_string())),
            other => Err(unexpected("ExpandItem", &other)),
        }
    }

    fn ask_checkbox(
        &self,
        name: &QuestionName,
        message: &str,
        checkbox: &CheckboxQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        // Loop until the selection passes or the user cancels
        loop {
            let choices: Vec<(String, bool)> = checkbox
                .choices
                .iter()
                .map(|c| c.name.clone())
                .zip(checkbox.initially_checked())
                .collect();

            let check = checkbox.clone();
            let validate_fn =
                move |checked: &[bool], _: &requestty::Answers| -> Result<(), String> {
                    check.finish(&checked_indices(checked)).map(|_| ())
                };

            let q = requestty::Question::multi_select(name.as_str())
                .message(message)
                .choices_with_default(choices)
                .should_loop(checkbox.should_loop)
                .validate(validate_fn)
                .build();

            let indices: Vec<usize> = match requestty::prompt_one(q)? {
                requestty::Answer::ListItems(items) => {
                    items.iter().map(|item| item.index).collect()
                }
                other => return Err(unexpected("ListItems", &other)),
            };

            match checkbox.finish(&indices) {
                Ok(values) => return Ok(AnswerValue::Strings(values)),
                Err(msg) => {
                    warn!(name = %name, %msg, "Checkbox selection rejected");
                    println!("Error: {msg}");
                    continue;
                }
            }
        }
    }
}

fn checked_indices(checked: &[bool]) -> Vec<usize> {
    checked
        .iter()
        .enumerate()
        .filter_map(|(i, &is_checked)| is_checked.then_some(i))
        .collect()
}

impl PromptEngine for RequesttyEngine {
    type Error = RequesttyError;

    fn submit(&mut self, question: Question) -> Result<Answers, Self::Error> {
        let (name, message, kind) = question.into_parts();
        debug!(name = %name, kind = kind.type_tag(), "Prompting");

        let value = match &kind {
            QuestionKind::Confirm(confirm) => self.ask_confirm(&name, &message, confirm),
            QuestionKind::Input(input) => self.ask_input(&name, &message, input),
            QuestionKind::Number(number) => self.ask_number(&name, &message, number),
            QuestionKind::Password(password) => self.ask_password(&name, &message, password),
            QuestionKind::Editor(editor) => self.ask_editor(&name, &message, editor),
            QuestionKind::RawList(list) => self.ask_raw_list(&name, &message, list),
            QuestionKind::List(list) => self.ask_list(&name, &message, list),
            QuestionKind::Expand(expand) => self.ask_expand(&name, &message, expand),
            QuestionKind::Checkbox(checkbox) => self.ask_checkbox(&name, &message, checkbox),
        }?;

        Ok(Answers::single(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use questionnaire::{ExpandChoice, parse_number};

    fn expand(keys: &[char]) -> ExpandQuestion {
        ExpandQuestion::new(
            keys.iter()
                .map(|&key| ExpandChoice::new(key, format!("Choice {key}")))
                .collect(),
        )
    }

    #[test]
    fn test_expand_keys_accepted() {
        let mut question = expand(&['o', 's', 'A']);
        question.default = Some('s');
        assert!(check_expand_keys(&question).is_ok());
    }

    #[test]
    fn test_expand_help_key_rejected() {
        for key in ['h', 'H'] {
            let err = check_expand_keys(&expand(&['o', key])).unwrap_err();
            assert!(matches!(err, RequesttyError::PromptError(msg) if msg.contains("reserved")));
        }
    }

    #[test]
    fn test_expand_duplicate_key_rejected() {
        let err = check_expand_keys(&expand(&['o', 's', 'O'])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Prompt error: Duplicate key 'o' (choice 'Choice O')"
        );
    }

    #[test]
    fn test_expand_unknown_default_rejected() {
        let mut question = expand(&['o', 's']);
        question.default = Some('x');

        let err = check_expand_keys(&question).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Prompt error: Default key 'x' is not among the choices"
        );
    }

    #[test]
    fn test_expand_key_error_reaches_the_caller() {
        let err = questionnaire::QuestionnaireError::engine(
            check_expand_keys(&expand(&['h'])).unwrap_err(),
        );
        assert!(matches!(
            err.engine_error::<RequesttyError>(),
            Some(RequesttyError::PromptError(_))
        ));
    }

    #[test]
    fn test_number_default_reads_back() {
        for n in [8080.0, -3.5, 0.25, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_number(&render_number(n)), Some(n));
        }
        assert_eq!(render_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_error_types() {
        let err = RequesttyError::Cancelled;
        assert_eq!(err.to_string(), "Question cancelled by user");
        assert!(err.is_cancelled());

        let err = RequesttyError::PromptError("test error".to_string());
        assert_eq!(err.to_string(), "Prompt error: test error");
        assert!(!err.is_cancelled());

        let err = RequesttyError::UnexpectedAnswerType {
            expected: "String".to_string(),
            got: "Bool".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected answer type: expected String, got Bool"
        );
    }

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err = RequesttyError::from(requestty::ErrorKind::Interrupted);
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_cancellation_survives_the_questionnaire_error() {
        let err = questionnaire::QuestionnaireError::engine(RequesttyError::Cancelled);
        assert!(
            err.engine_error::<RequesttyError>()
                .is_some_and(RequesttyError::is_cancelled)
        );
    }

    #[test]
    fn test_checked_indices() {
        assert_eq!(checked_indices(&[true, false, true]), vec![0, 2]);
        assert!(checked_indices(&[false, false]).is_empty());
    }
}

use std::collections::HashMap;

use crate::{AnswerValue, QuestionName};

/// Error type for answer access operations.
///
/// Either variant means an engine broke the contract of answering every
/// question under the name it was asked with.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    MissingAnswer(QuestionName),

    #[error("Type mismatch for question '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: QuestionName,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers returned by a prompt engine, keyed by question name.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: HashMap<QuestionName, AnswerValue>,
}

impl Answers {
    /// Create an empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Create an answer map holding a single answer.
    pub fn single(name: impl Into<QuestionName>, value: impl Into<AnswerValue>) -> Self {
        let mut answers = Self::new();
        answers.insert(name, value);
        answers
    }

    /// Insert an answer for the given question.
    pub fn insert(&mut self, name: impl Into<QuestionName>, value: impl Into<AnswerValue>) {
        self.values.insert(name.into(), value.into());
    }

    // === Typed extraction ===

    /// Remove the answer for the given question, failing if it is absent.
    pub fn take(&mut self, name: &QuestionName) -> Result<AnswerValue, AnswerError> {
        self.values
            .remove(name)
            .ok_or_else(|| AnswerError::MissingAnswer(name.clone()))
    }

    /// Remove a boolean answer.
    pub fn take_bool(&mut self, name: &QuestionName) -> Result<bool, AnswerError> {
        match self.take(name)? {
            AnswerValue::Bool(b) => Ok(b),
            other => Err(mismatch(name, "Bool", &other)),
        }
    }

    /// Remove a text answer.
    pub fn take_string(&mut self, name: &QuestionName) -> Result<String, AnswerError> {
        match self.take(name)? {
            AnswerValue::String(s) => Ok(s),
            other => Err(mismatch(name, "String", &other)),
        }
    }

    /// Remove a numeric answer.
    pub fn take_number(&mut self, name: &QuestionName) -> Result<f64, AnswerError> {
        match self.take(name)? {
            AnswerValue::Number(n) => Ok(n),
            other => Err(mismatch(name, "Number", &other)),
        }
    }

    /// Remove a list answer.
    pub fn take_strings(&mut self, name: &QuestionName) -> Result<Vec<String>, AnswerError> {
        match self.take(name)? {
            AnswerValue::Strings(items) => Ok(items),
            other => Err(mismatch(name, "Strings", &other)),
        }
    }
}

fn mismatch(name: &QuestionName, expected: &'static str, actual: &AnswerValue) -> AnswerError {
    AnswerError::TypeMismatch {
        name: name.clone(),
        expected,
        actual: actual.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_take() {
        let name = QuestionName::new("q1");
        let mut answers = Answers::single(name.clone(), "Alice");

        assert_eq!(answers.take_string(&name).unwrap(), "Alice");
        assert!(matches!(
            answers.take(&name),
            Err(AnswerError::MissingAnswer(_))
        ));
    }

    #[test]
    fn missing_answer_error() {
        let mut answers = Answers::single("q1", true);

        let result = answers.take_bool(&QuestionName::new("q2"));
        assert!(matches!(result, Err(AnswerError::MissingAnswer(name)) if name.as_str() == "q2"));
    }

    #[test]
    fn type_mismatch_error() {
        let name = QuestionName::new("q1");
        let mut answers = Answers::single(name.clone(), 42.0);

        let err = answers.take_string(&name).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch for question 'q1': expected String, got Number"
        );
    }

    #[test]
    fn take_strings() {
        let name = QuestionName::new("q1");
        let mut answers = Answers::new();
        answers.insert(name.clone(), vec!["a".to_string(), "b".to_string()]);

        assert_eq!(answers.take_strings(&name).unwrap(), vec!["a", "b"]);
    }
}

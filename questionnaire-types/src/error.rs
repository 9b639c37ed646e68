use crate::AnswerError;

/// Error type for questionnaire operations.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// The prompt engine failed (closed input stream, Ctrl+C, terminal error, ...).
    ///
    /// The engine's own error is kept as-is; use [`QuestionnaireError::engine_error`]
    /// to get it back.
    #[error("Prompt engine error: {0}")]
    Engine(#[source] anyhow::Error),

    /// The engine did not answer under the generated question name.
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// The selected label is not one of the offered choices.
    #[error("Answer '{answer}' is not one of the offered choices")]
    UnknownChoice { answer: String },
}

impl QuestionnaireError {
    /// Create an engine error from any error type.
    pub fn engine(err: impl Into<anyhow::Error>) -> Self {
        Self::Engine(err.into())
    }

    /// Get the engine's error back, if this is an engine failure of type `E`.
    pub fn engine_error<E>(&self) -> Option<&E>
    where
        E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Self::Engine(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

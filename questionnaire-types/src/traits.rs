use crate::{Answers, Question};

/// Trait for interactive engines that answer one-off questions.
///
/// An engine renders the control matching the question's kind, validates the
/// input with the question's validator (asking again on rejection), applies any
/// filter, and returns the answer under the question's name.
pub trait PromptEngine {
    /// The error type for this engine.
    type Error: Into<anyhow::Error>;

    /// Ask a single question and wait for the answer.
    ///
    /// # Returns
    /// * `Ok(answers)` holding at least the entry for `question.name()`
    /// * `Err` on cancellation or engine failure
    ///
    /// Validation is handled internally — this only returns once the input passed
    /// the question's validator (or on error/cancellation).
    fn submit(&mut self, question: Question) -> Result<Answers, Self::Error>;
}

impl<E: PromptEngine + ?Sized> PromptEngine for &mut E {
    type Error = E::Error;

    fn submit(&mut self, question: Question) -> Result<Answers, Self::Error> {
        (**self).submit(question)
    }
}

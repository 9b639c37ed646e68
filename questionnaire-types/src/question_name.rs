use std::fmt;

/// The key a question is asked under, e.g. `"q3_9f2c41ab"`.
///
/// Engines return answers keyed by this name. The façade generates a fresh one
/// for every question, so callers never have to pick names themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestionName {
    name: String,
}

impl QuestionName {
    /// Create a name from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QuestionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for QuestionName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for QuestionName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

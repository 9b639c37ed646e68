/// A single answer value produced by a prompt engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// A yes/no answer (from Confirm questions).
    Bool(bool),

    /// A text answer (from Input, Password, Editor and the single-select kinds).
    String(String),

    /// A parsed number (from Number questions).
    Number(f64),

    /// The values of the checked choices (from Checkbox questions).
    Strings(Vec<String>),
}

impl AnswerValue {
    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::String(_) => "String",
            Self::Number(_) => "Number",
            Self::Strings(_) => "Strings",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        Self::Strings(items)
    }
}

use crate::{Filter, INVALID_NUMBER, QuestionName, Validator, parse_number};

/// A single one-off question handed to a prompt engine.
#[derive(Debug, Clone)]
pub struct Question {
    /// The key the engine must answer this question under.
    name: QuestionName,

    /// The prompt text shown to the user.
    message: String,

    /// The kind of control to render, with its kind-specific options.
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(
        name: impl Into<QuestionName>,
        message: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
        }
    }

    /// Get the question name.
    pub fn name(&self) -> &QuestionName {
        &self.name
    }

    /// Get the prompt text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Split the question into name, message and kind.
    pub fn into_parts(self) -> (QuestionName, String, QuestionKind) {
        (self.name, self.message, self.kind)
    }
}

/// The kind of question, determining which control the engine renders.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Yes/no confirmation.
    Confirm(ConfirmQuestion),

    /// Single-line text input.
    Input(InputQuestion),

    /// Numbered list, answered by typing an index or moving the cursor.
    RawList(RawListQuestion),

    /// Menu list navigated with the arrow keys.
    List(ListQuestion),

    /// Compact list where each choice has a one-letter shortcut.
    Expand(ExpandQuestion),

    /// Multi-select list.
    Checkbox(CheckboxQuestion),

    /// Numeric input.
    Number(NumberQuestion),

    /// Hidden or masked text input.
    Password(PasswordQuestion),

    /// Multi-line text written in an external editor.
    Editor(EditorQuestion),
}

impl QuestionKind {
    /// The engine type name for this kind, e.g. `"rawlist"`.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Confirm(_) => "confirm",
            Self::Input(_) => "input",
            Self::RawList(_) => "rawlist",
            Self::List(_) => "list",
            Self::Expand(_) => "expand",
            Self::Checkbox(_) => "checkbox",
            Self::Number(_) => "number",
            Self::Password(_) => "password",
            Self::Editor(_) => "editor",
        }
    }

    /// Check if this kind presents a list of choices.
    pub fn has_choices(&self) -> bool {
        matches!(
            self,
            Self::RawList(_) | Self::List(_) | Self::Expand(_) | Self::Checkbox(_)
        )
    }
}

fn check_text(validate: Option<&Validator<str>>, input: &str) -> Result<(), String> {
    validate.map_or(Ok(()), |v| v.check(input))
}

fn filtered(filter: Option<&Filter<String>>, value: String) -> String {
    match filter {
        Some(f) => f.apply(value),
        None => value,
    }
}

/// Configuration for a yes/no question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmQuestion {
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl ConfirmQuestion {
    /// Create with the given default answer.
    pub fn new(default: bool) -> Self {
        Self { default }
    }
}

/// Configuration for a text input question.
#[derive(Debug, Clone, Default)]
pub struct InputQuestion {
    /// Optional default value.
    pub default: Option<String>,

    /// Optional validator run on the typed text.
    pub validate: Option<Validator<str>>,
}

impl InputQuestion {
    /// Create a new input question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the validator, if any.
    pub fn check(&self, input: &str) -> Result<(), String> {
        check_text(self.validate.as_ref(), input)
    }
}

/// Configuration for a numbered list question.
#[derive(Debug, Clone)]
pub struct RawListQuestion {
    /// The labels to choose from, in display order.
    pub choices: Vec<String>,

    /// Index of the preselected choice.
    pub default: Option<usize>,

    /// Whether the cursor wraps around at the ends of the list.
    pub should_loop: bool,

    /// Transformation applied to the chosen label.
    pub filter: Option<Filter<String>>,
}

impl RawListQuestion {
    /// Create a new raw list question over the given labels.
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            choices,
            default: None,
            should_loop: true,
            filter: None,
        }
    }

    /// Index of the preselected choice. A default past the end is ignored.
    pub fn default_index(&self) -> Option<usize> {
        self.default.filter(|&index| index < self.choices.len())
    }

    /// The answer for the choice at `index`, after the filter.
    pub fn finish(&self, index: usize) -> Option<String> {
        let label = self.choices.get(index)?.clone();
        Some(filtered(self.filter.as_ref(), label))
    }
}

/// Configuration for a menu list question.
#[derive(Debug, Clone)]
pub struct ListQuestion {
    /// The labels to choose from, in display order.
    pub choices: Vec<String>,

    /// Label of the preselected choice.
    pub default: Option<String>,

    /// Whether the cursor wraps around at the ends of the list.
    pub should_loop: bool,

    /// Transformation applied to the chosen label.
    pub filter: Option<Filter<String>>,
}

impl ListQuestion {
    /// Create a new list question over the given labels.
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            choices,
            default: None,
            should_loop: true,
            filter: None,
        }
    }

    /// Position of the default label, if it is one of the choices.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.default.as_deref()?;
        self.choices.iter().position(|c| c == default)
    }

    /// The answer for the choice at `index`, after the filter.
    pub fn finish(&self, index: usize) -> Option<String> {
        let label = self.choices.get(index)?.clone();
        Some(filtered(self.filter.as_ref(), label))
    }
}

/// A choice in an expand question.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandChoice {
    /// Shortcut key typed to pick this choice.
    pub key: char,

    /// Label shown to the user.
    pub name: String,

    /// Answer returned when picked; the label is used when absent.
    pub value: Option<String>,
}

impl ExpandChoice {
    /// Create a choice with a shortcut key and label.
    pub fn new(key: char, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            value: None,
        }
    }

    /// Set the value returned when this choice is picked.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The answer this choice produces.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.name)
    }
}

/// Configuration for an expand question.
#[derive(Debug, Clone)]
pub struct ExpandQuestion {
    /// The choices, in display order.
    pub choices: Vec<ExpandChoice>,

    /// Shortcut key of the preselected choice.
    pub default: Option<char>,

    /// Transformation applied to the chosen value.
    pub filter: Option<Filter<String>>,
}

impl ExpandQuestion {
    /// Create a new expand question.
    pub fn new(choices: Vec<ExpandChoice>) -> Self {
        Self {
            choices,
            default: None,
            filter: None,
        }
    }

    /// The answer for the choice with shortcut `key`, after the filter.
    pub fn finish(&self, key: char) -> Option<String> {
        let choice = self.choices.iter().find(|c| c.key == key)?;
        Some(filtered(self.filter.as_ref(), choice.value().to_string()))
    }
}

/// A choice in a checkbox question.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxChoice {
    /// Label shown to the user.
    pub name: String,

    /// Answer returned when checked; the label is used when absent.
    pub value: Option<String>,

    /// Whether the choice starts out checked.
    pub checked: bool,
}

impl CheckboxChoice {
    /// Create an unchecked choice with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            checked: false,
        }
    }

    /// Set the value returned when this choice is checked.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set whether the choice starts out checked.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// The answer this choice produces.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.name)
    }
}

/// Configuration for a checkbox (multi-select) question.
#[derive(Debug, Clone)]
pub struct CheckboxQuestion {
    /// The choices, in display order.
    pub choices: Vec<CheckboxChoice>,

    /// Values that start out checked, in addition to choices marked `checked`.
    pub default: Vec<String>,

    /// Whether the cursor wraps around at the ends of the list.
    pub should_loop: bool,

    /// Transformation applied to the selected values.
    pub filter: Option<Filter<Vec<String>>>,

    /// Validator run on the selected values, after the filter.
    pub validate: Option<Validator<[String]>>,
}

impl CheckboxQuestion {
    /// Create a new checkbox question.
    pub fn new(choices: Vec<CheckboxChoice>) -> Self {
        Self {
            choices,
            default: Vec::new(),
            should_loop: true,
            filter: None,
            validate: None,
        }
    }

    /// Initial checked state of every choice.
    pub fn initially_checked(&self) -> Vec<bool> {
        self.choices
            .iter()
            .map(|c| c.checked || self.default.iter().any(|d| d == c.value()))
            .collect()
    }

    /// Turn selected choice indices into the final answer.
    ///
    /// Values keep the order of `indices`. The filter runs first, then the
    /// validator; `Err` carries the validator's message.
    pub fn finish(&self, indices: &[usize]) -> Result<Vec<String>, String> {
        let values: Vec<String> = indices
            .iter()
            .filter_map(|&i| self.choices.get(i))
            .map(|c| c.value().to_string())
            .collect();

        let values = match &self.filter {
            Some(f) => f.apply(values),
            None => values,
        };

        if let Some(validate) = &self.validate {
            validate.check(&values)?;
        }

        Ok(values)
    }
}

/// Configuration for a numeric question.
#[derive(Debug, Clone)]
pub struct NumberQuestion {
    /// Answer used when the user submits empty input.
    pub default: Option<f64>,

    /// Validator run on the typed text.
    pub validate: Validator<str>,
}

impl NumberQuestion {
    /// Create a numeric question with the given text validator.
    pub fn new(validate: Validator<str>) -> Self {
        Self {
            default: None,
            validate,
        }
    }

    /// Turn typed text into the final answer.
    ///
    /// Empty input takes the default when one is set. Otherwise the validator
    /// runs and the text is parsed.
    pub fn finish(&self, input: &str) -> Result<f64, String> {
        if let Some(default) = self.default
            && input.trim().is_empty()
        {
            return Ok(default);
        }

        self.validate.check(input)?;
        parse_number(input).ok_or_else(|| INVALID_NUMBER.to_string())
    }
}

/// Configuration for a password question.
#[derive(Debug, Clone, Default)]
pub struct PasswordQuestion {
    /// Character echoed for each typed character; input is fully hidden when absent.
    pub mask: Option<char>,

    /// Optional validator run on the typed text.
    pub validate: Option<Validator<str>>,
}

impl PasswordQuestion {
    /// Create a new password question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the validator, if any.
    pub fn check(&self, input: &str) -> Result<(), String> {
        check_text(self.validate.as_ref(), input)
    }
}

/// Configuration for an editor question.
#[derive(Debug, Clone, Default)]
pub struct EditorQuestion {
    /// Text the editor opens with.
    pub default: Option<String>,

    /// Extension of the temporary file, e.g. `".md"`.
    pub extension: Option<String>,

    /// Optional validator run on the saved text.
    pub validate: Option<Validator<str>>,
}

impl EditorQuestion {
    /// Create a new editor question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the validator, if any.
    pub fn check(&self, input: &str) -> Result<(), String> {
        check_text(self.validate.as_ref(), input)
    }
}

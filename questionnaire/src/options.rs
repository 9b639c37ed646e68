//! Per-kind override configurations and how they merge onto question defaults.
//!
//! Every field is optional. `None` keeps the default built by the helper,
//! `Some` replaces it. The one exception is the numeric validator, which is
//! composed with the built-in number check instead of replacing it.

use questionnaire_types::{
    CheckboxQuestion, EditorQuestion, ExpandQuestion, Filter, InputQuestion, ListQuestion,
    NumberQuestion, PasswordQuestion, RawListQuestion, Validator,
};

use crate::number_guard;

/// Merge caller overrides onto a default question configuration.
pub trait Merge {
    /// The question configuration the overrides apply to.
    type Target;

    /// Apply the overrides, field by field. Overrides win.
    fn merge(self, base: Self::Target) -> Self::Target;
}

/// Overrides for free-text questions.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    pub default: Option<String>,
    pub validate: Option<Validator<str>>,
}

impl InputOptions {
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(
        mut self,
        check: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Validator::new(check));
        self
    }
}

impl Merge for InputOptions {
    type Target = InputQuestion;

    fn merge(self, base: InputQuestion) -> InputQuestion {
        InputQuestion {
            default: self.default.or(base.default),
            validate: self.validate.or(base.validate),
        }
    }
}

/// Overrides for editor questions.
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
    pub default: Option<String>,
    /// Extension of the temporary file, e.g. `".md"`, for editor syntax highlighting.
    pub extension: Option<String>,
    pub validate: Option<Validator<str>>,
}

impl EditorOptions {
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_validator(
        mut self,
        check: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Validator::new(check));
        self
    }
}

impl Merge for EditorOptions {
    type Target = EditorQuestion;

    fn merge(self, base: EditorQuestion) -> EditorQuestion {
        EditorQuestion {
            default: self.default.or(base.default),
            extension: self.extension.or(base.extension),
            validate: self.validate.or(base.validate),
        }
    }
}

/// Overrides for menu list questions.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Label of the preselected choice.
    pub default: Option<String>,
    pub should_loop: Option<bool>,
    pub filter: Option<Filter<String>>,
}

impl ListOptions {
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_loop(mut self, should_loop: bool) -> Self {
        self.should_loop = Some(should_loop);
        self
    }

    pub fn with_filter(mut self, apply: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.filter = Some(Filter::new(apply));
        self
    }
}

impl Merge for ListOptions {
    type Target = ListQuestion;

    fn merge(self, base: ListQuestion) -> ListQuestion {
        ListQuestion {
            choices: base.choices,
            default: self.default.or(base.default),
            should_loop: self.should_loop.unwrap_or(base.should_loop),
            filter: self.filter.or(base.filter),
        }
    }
}

/// Overrides for numbered list questions.
#[derive(Debug, Clone, Default)]
pub struct RawListOptions {
    /// Index of the preselected choice.
    pub default: Option<usize>,
    pub should_loop: Option<bool>,
    pub filter: Option<Filter<String>>,
}

impl RawListOptions {
    pub fn with_default(mut self, default: usize) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_loop(mut self, should_loop: bool) -> Self {
        self.should_loop = Some(should_loop);
        self
    }

    pub fn with_filter(mut self, apply: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.filter = Some(Filter::new(apply));
        self
    }
}

impl Merge for RawListOptions {
    type Target = RawListQuestion;

    fn merge(self, base: RawListQuestion) -> RawListQuestion {
        RawListQuestion {
            choices: base.choices,
            default: self.default.or(base.default),
            should_loop: self.should_loop.unwrap_or(base.should_loop),
            filter: self.filter.or(base.filter),
        }
    }
}

/// Overrides for expand questions.
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Shortcut key of the preselected choice.
    pub default: Option<char>,
    pub filter: Option<Filter<String>>,
}

impl ExpandOptions {
    pub fn with_default(mut self, key: char) -> Self {
        self.default = Some(key);
        self
    }

    pub fn with_filter(mut self, apply: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.filter = Some(Filter::new(apply));
        self
    }
}

impl Merge for ExpandOptions {
    type Target = ExpandQuestion;

    fn merge(self, base: ExpandQuestion) -> ExpandQuestion {
        ExpandQuestion {
            choices: base.choices,
            default: self.default.or(base.default),
            filter: self.filter.or(base.filter),
        }
    }
}

/// Overrides for checkbox questions.
#[derive(Debug, Clone, Default)]
pub struct CheckboxOptions {
    /// Values that start out checked.
    pub default: Option<Vec<String>>,
    pub should_loop: Option<bool>,
    pub filter: Option<Filter<Vec<String>>>,
    pub validate: Option<Validator<[String]>>,
}

impl CheckboxOptions {
    pub fn with_default<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_loop(mut self, should_loop: bool) -> Self {
        self.should_loop = Some(should_loop);
        self
    }

    pub fn with_filter(
        mut self,
        apply: impl Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Filter::new(apply));
        self
    }

    pub fn with_validator(
        mut self,
        check: impl Fn(&[String]) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Validator::new(check));
        self
    }
}

impl Merge for CheckboxOptions {
    type Target = CheckboxQuestion;

    fn merge(self, base: CheckboxQuestion) -> CheckboxQuestion {
        CheckboxQuestion {
            choices: base.choices,
            default: self.default.unwrap_or(base.default),
            should_loop: self.should_loop.unwrap_or(base.should_loop),
            filter: self.filter.or(base.filter),
            validate: self.validate.or(base.validate),
        }
    }
}

/// Overrides for numeric questions.
#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    pub default: Option<f64>,
    /// Runs on the parsed number, only after the built-in number check passed.
    pub validate: Option<Validator<f64>>,
}

impl NumberOptions {
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validator(
        mut self,
        check: impl Fn(&f64) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Validator::new(check));
        self
    }
}

impl Merge for NumberOptions {
    type Target = NumberQuestion;

    fn merge(self, base: NumberQuestion) -> NumberQuestion {
        NumberQuestion {
            default: self.default.or(base.default),
            validate: match self.validate {
                Some(caller) => number_guard(Some(caller)),
                None => base.validate,
            },
        }
    }
}

/// Overrides for password questions.
#[derive(Debug, Clone, Default)]
pub struct PasswordOptions {
    pub mask: Option<char>,
    pub validate: Option<Validator<str>>,
}

impl PasswordOptions {
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_validator(
        mut self,
        check: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Validator::new(check));
        self
    }
}

impl Merge for PasswordOptions {
    type Target = PasswordQuestion;

    fn merge(self, base: PasswordQuestion) -> PasswordQuestion {
        PasswordQuestion {
            mask: self.mask.or(base.mask),
            validate: self.validate.or(base.validate),
        }
    }
}

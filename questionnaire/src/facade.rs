use questionnaire_types::{
    Answers, CheckboxChoice, CheckboxQuestion, ConfirmQuestion, EditorQuestion, ExpandChoice,
    ExpandQuestion, InputQuestion, ListQuestion, NumberQuestion, PasswordQuestion, PromptEngine,
    Question, QuestionKind, QuestionName, QuestionnaireError, RawListQuestion,
};
use tracing::debug;

use crate::{
    CheckboxOptions, Choice, EditorOptions, ExpandOptions, InputOptions, ListOptions, Merge,
    NameGenerator, NumberOptions, PasswordOptions, RawListOptions, Result, number_guard,
};

const TRUE_TOKENS: [&str; 2] = ["true", "t"];
const YES_TOKENS: [&str; 2] = ["yes", "y"];

/// Interpret a reply to a `(true/false)` question.
///
/// An empty reply yields `default`. Anything else is trimmed and lower-cased
/// and is `true` only for `true`/`t`, or `yes`/`y` when `allow_yes_or_no` is set.
pub fn parse_true_or_false(reply: &str, default: bool, allow_yes_or_no: bool) -> bool {
    if reply.is_empty() {
        return default;
    }

    let reply = reply.trim().to_lowercase();
    let reply = reply.as_str();
    TRUE_TOKENS.contains(&reply) || (allow_yes_or_no && YES_TOKENS.contains(&reply))
}

/// One-off question helpers on top of a [`PromptEngine`].
///
/// Each helper asks exactly one question under a freshly generated name and
/// returns that question's answer. Engine failures are passed through as
/// [`QuestionnaireError::Engine`].
#[derive(Debug)]
pub struct Questionnaire<E> {
    engine: E,
    names: NameGenerator,
}

impl<E: PromptEngine> Questionnaire<E> {
    /// Create a questionnaire asking through `engine`.
    pub fn new(engine: E) -> Self {
        Self::with_names(engine, NameGenerator::new())
    }

    /// Create a questionnaire with a custom name generator.
    pub fn with_names(engine: E, names: NameGenerator) -> Self {
        Self { engine, names }
    }

    /// The engine questions are asked through.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Give back the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    fn submit(
        &mut self,
        message: impl Into<String>,
        kind: QuestionKind,
    ) -> Result<(QuestionName, Answers)> {
        let name = self.names.generate();
        debug!(name = %name, kind = kind.type_tag(), "Submitting question");

        let answers = self
            .engine
            .submit(Question::new(name.clone(), message, kind))
            .map_err(QuestionnaireError::engine)?;

        debug!(name = %name, "Question answered");
        Ok((name, answers))
    }

    /// Ask a yes/no question.
    ///
    /// ```rust,ignore
    /// let hungry = q.yes_or_no("Are you hungry yet?", false)?;
    /// ```
    pub fn yes_or_no(&mut self, message: impl Into<String>, default: bool) -> Result<bool> {
        let (name, mut answers) =
            self.submit(message, QuestionKind::Confirm(ConfirmQuestion::new(default)))?;
        Ok(answers.take_bool(&name)?)
    }

    /// Like [`yes_or_no`](Self::yes_or_no), but typed out: `(true/false)` is
    /// appended to the message and the reply is read with [`parse_true_or_false`].
    pub fn true_or_false(
        &mut self,
        message: impl Into<String>,
        default: bool,
        allow_yes_or_no: bool,
    ) -> Result<bool> {
        let reply = self.ask(
            format!("{} (true/false)", message.into()),
            InputOptions::default(),
        )?;
        Ok(parse_true_or_false(&reply, default, allow_yes_or_no))
    }

    /// Ask for a line of text.
    ///
    /// ```rust,ignore
    /// let username = q.ask("What is your username?", InputOptions::default())?;
    /// ```
    pub fn ask(&mut self, message: impl Into<String>, extend: InputOptions) -> Result<String> {
        let input = extend.merge(InputQuestion::new());
        let (name, mut answers) = self.submit(message, QuestionKind::Input(input))?;
        Ok(answers.take_string(&name)?)
    }

    /// Pick one label from a numbered list.
    pub fn ask_with_options<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        options: &[S],
        extend: RawListOptions,
    ) -> Result<String> {
        let list = extend.merge(RawListQuestion::new(labels(options)));
        let (name, mut answers) = self.submit(message, QuestionKind::RawList(list))?;
        Ok(answers.take_string(&name)?)
    }

    /// Same as [`ask_with_options`](Self::ask_with_options), but returns the
    /// position of the picked label in `options`.
    pub fn ask_with_options_and_return_index<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        options: &[S],
        extend: RawListOptions,
    ) -> Result<usize> {
        let answer = self.ask_with_options(message, options, extend)?;
        position_of(options, answer)
    }

    /// Pick one label from a menu list.
    ///
    /// ```rust,ignore
    /// let framework = q.select_one("Framework", &["Vue", "React"], ListOptions::default())?;
    /// ```
    pub fn select_one<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        list: &[S],
        extend: ListOptions,
    ) -> Result<String> {
        let list = extend.merge(ListQuestion::new(labels(list)));
        let (name, mut answers) = self.submit(message, QuestionKind::List(list))?;
        Ok(answers.take_string(&name)?)
    }

    /// Same as [`select_one`](Self::select_one), but returns the position of
    /// the picked label in `list`.
    pub fn select_one_index<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        list: &[S],
        extend: ListOptions,
    ) -> Result<usize> {
        let answer = self.select_one(message, list, extend)?;
        position_of(list, answer)
    }

    /// Pick one choice by its shortcut key.
    pub fn ask_with_detailed_options(
        &mut self,
        message: impl Into<String>,
        options: Vec<ExpandChoice>,
        extend: ExpandOptions,
    ) -> Result<String> {
        let expand = extend.merge(ExpandQuestion::new(options));
        let (name, mut answers) = self.submit(message, QuestionKind::Expand(expand))?;
        Ok(answers.take_string(&name)?)
    }

    /// Check any number of choices. Returns the values of the checked ones.
    pub fn checkbox(
        &mut self,
        message: impl Into<String>,
        choices: Vec<CheckboxChoice>,
        extend: CheckboxOptions,
    ) -> Result<Vec<String>> {
        let checkbox = extend.merge(CheckboxQuestion::new(choices));
        let (name, mut answers) = self.submit(message, QuestionKind::Checkbox(checkbox))?;
        Ok(answers.take_strings(&name)?)
    }

    /// Check any number of choices given as plain labels or full choices.
    ///
    /// ```rust,ignore
    /// let picked = q.choose("Favorite frameworks", ["Vue", "React"], CheckboxOptions::default())?;
    /// ```
    pub fn choose<I>(
        &mut self,
        message: impl Into<String>,
        choices: I,
        extend: CheckboxOptions,
    ) -> Result<Vec<String>>
    where
        I: IntoIterator,
        I::Item: Into<Choice>,
    {
        let choices = choices
            .into_iter()
            .map(|choice| choice.into().into_checkbox_choice())
            .collect();
        self.checkbox(message, choices, extend)
    }

    /// Ask for a number. Input that is not a number is rejected before any
    /// caller validator sees it.
    pub fn ask_for_number(
        &mut self,
        message: impl Into<String>,
        extend: NumberOptions,
    ) -> Result<f64> {
        let number = extend.merge(NumberQuestion::new(number_guard(None)));
        let (name, mut answers) = self.submit(message, QuestionKind::Number(number))?;
        Ok(answers.take_number(&name)?)
    }

    /// Ask for a password. With `hide` set, input is echoed as `*` unless
    /// `extend` already picks a mask.
    pub fn ask_for_password(
        &mut self,
        message: impl Into<String>,
        mut extend: PasswordOptions,
        hide: bool,
    ) -> Result<String> {
        if hide && extend.mask.is_none() {
            extend.mask = Some('*');
        }

        let password = extend.merge(PasswordQuestion::new());
        let (name, mut answers) = self.submit(message, QuestionKind::Password(password))?;
        Ok(answers.take_string(&name)?)
    }

    /// [`ask_for_password`](Self::ask_for_password) with `hide` set.
    pub fn ask_for_password_hidden(
        &mut self,
        message: impl Into<String>,
        extend: PasswordOptions,
    ) -> Result<String> {
        self.ask_for_password(message, extend, true)
    }

    /// Open an editor and return the saved text.
    pub fn editor(
        &mut self,
        message: impl Into<String>,
        extend: EditorOptions,
    ) -> Result<String> {
        let editor = extend.merge(EditorQuestion::new());
        let (name, mut answers) = self.submit(message, QuestionKind::Editor(editor))?;
        Ok(answers.take_string(&name)?)
    }
}

fn labels<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    list.iter().map(|s| s.as_ref().to_string()).collect()
}

// Duplicate labels resolve to their first occurrence.
fn position_of<S: AsRef<str>>(list: &[S], answer: String) -> Result<usize> {
    match list.iter().position(|s| s.as_ref() == answer) {
        Some(index) => Ok(index),
        None => Err(QuestionnaireError::UnknownChoice { answer }),
    }
}

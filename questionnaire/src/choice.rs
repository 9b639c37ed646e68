use questionnaire_types::CheckboxChoice;

/// A choice passed to [`Questionnaire::choose`](crate::Questionnaire::choose).
///
/// Plain labels and full checkbox choices can be mixed freely; labels become
/// unchecked choices whose value is the label itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// Just a label.
    Label(String),

    /// A checkbox choice with its own value and checked state.
    Detailed(CheckboxChoice),
}

impl Choice {
    /// Resolve into the checkbox choice the engine will render.
    pub fn into_checkbox_choice(self) -> CheckboxChoice {
        match self {
            Self::Label(label) => CheckboxChoice::new(label),
            Self::Detailed(choice) => choice,
        }
    }
}

impl From<&str> for Choice {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Choice {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<&String> for Choice {
    fn from(label: &String) -> Self {
        Self::Label(label.clone())
    }
}

impl From<CheckboxChoice> for Choice {
    fn from(choice: CheckboxChoice) -> Self {
        Self::Detailed(choice)
    }
}

use questionnaire_types::{INVALID_NUMBER, Validator, parse_number};

/// Build the text validator for numeric questions.
///
/// Text that does not parse as a number is rejected with
/// `"A valid number is expected!"` and never reaches `caller`. Text that
/// parses is handed to `caller` as a number, whose verdict is final.
pub fn number_guard(caller: Option<Validator<f64>>) -> Validator<str> {
    Validator::new(move |input: &str| {
        let number = parse_number(input).ok_or_else(|| INVALID_NUMBER.to_string())?;
        match &caller {
            Some(validate) => validate.check(&number),
            None => Ok(()),
        }
    })
}

use std::fmt;
use std::sync::Arc;

/// A caller-supplied check run on a typed answer before it is accepted.
///
/// `Err(message)` rejects the input; engines show the message and ask again.
/// `T` is the type being checked: `str` for typed text, `[String]` for
/// checkbox selections, `f64` for parsed numbers.
pub struct Validator<T: ?Sized> {
    check: Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>,
}

impl<T: ?Sized> Validator<T> {
    /// Wrap a validation closure.
    pub fn new(check: impl Fn(&T) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }

    /// Run the validation.
    pub fn check(&self, value: &T) -> Result<(), String> {
        (self.check)(value)
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// A caller-supplied transformation applied to an answer before it is returned.
pub struct Filter<T> {
    apply: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Filter<T> {
    /// Wrap a filter closure.
    pub fn new(apply: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
        Self {
            apply: Arc::new(apply),
        }
    }

    /// Transform a value.
    pub fn apply(&self, value: T) -> T {
        (self.apply)(value)
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_checks_text() {
        let not_empty = Validator::<str>::new(|s| {
            if s.is_empty() {
                Err("Required".to_string())
            } else {
                Ok(())
            }
        });

        assert_eq!(not_empty.check(""), Err("Required".to_string()));
        assert_eq!(not_empty.check("x"), Ok(()));
    }

    #[test]
    fn validator_clone_shares_closure() {
        let at_least_two = Validator::<[String]>::new(|items| {
            if items.len() < 2 {
                Err("Pick two".to_string())
            } else {
                Ok(())
            }
        });
        let cloned = at_least_two.clone();

        assert!(cloned.check(&["a".to_string()]).is_err());
        assert!(cloned.check(&["a".to_string(), "b".to_string()]).is_ok());
    }

    #[test]
    fn filter_transforms() {
        let upper = Filter::new(|s: String| s.to_uppercase());
        assert_eq!(upper.apply("vue".to_string()), "VUE");
    }

    #[test]
    fn debug_is_opaque() {
        let upper = Filter::new(|s: String| s);
        assert_eq!(format!("{upper:?}"), "Filter(..)");
    }
}

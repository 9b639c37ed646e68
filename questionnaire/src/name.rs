use questionnaire_types::QuestionName;
use uuid::Uuid;

/// Source of unique question names.
///
/// Names look like `q12_3f9a0c1d`: a prefix, a per-generator counter and eight
/// random hex characters. The counter keeps consecutive names distinct; the
/// random part keeps names from separate generators apart.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefix: String,
    issued: u64,
}

impl NameGenerator {
    /// Create a generator with the default `"q"` prefix.
    pub fn new() -> Self {
        Self::with_prefix("q")
    }

    /// Create a generator whose names start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// Produce a fresh name.
    pub fn generate(&mut self) -> QuestionName {
        self.issued += 1;
        let random = Uuid::new_v4().simple().to_string();
        QuestionName::new(format!("{}{}_{}", self.prefix, self.issued, &random[..8]))
    }

    /// How many names this generator has produced.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn consecutive_names_differ() {
        let mut names = NameGenerator::new();
        let mut previous = names.generate();

        for _ in 0..10_000 {
            let next = names.generate();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn names_are_unique_across_generators() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let mut names = NameGenerator::new();
            for _ in 0..100 {
                assert!(seen.insert(names.generate()));
            }
        }
    }

    #[test]
    fn prefix_and_counter() {
        let mut names = NameGenerator::with_prefix("setup_");
        let first = names.generate();

        assert!(first.as_str().starts_with("setup_1_"));
        assert_eq!(first.as_str().len(), "setup_1_".len() + 8);
        assert_eq!(names.issued(), 1);
    }
}

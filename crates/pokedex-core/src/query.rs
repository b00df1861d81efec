//! Query text owned by the input controller.

/// Current contents of the search field.
///
/// Mutated on every keystroke; read by the submit action at the moment it
/// fires, so Enter and click always see the latest text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the lookup key for a submit, or `None` when the trimmed text
    /// is empty and the submit must be a no-op.
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_has_no_submission() {
        let mut query = QueryInput::new();
        assert_eq!(query.submission(), None);

        query.set("   \t ");
        assert_eq!(query.submission(), None);
    }

    #[test]
    fn submission_is_trimmed_and_lowercased() {
        let mut query = QueryInput::new();
        query.set("  PikaChu ");
        assert_eq!(query.submission().as_deref(), Some("pikachu"));
        assert_eq!(query.text(), "  PikaChu ");
    }

    #[test]
    fn editing_keys() {
        let mut query = QueryInput::new();
        for ch in "25x".chars() {
            query.push(ch);
        }
        query.push('\n');
        query.backspace();
        assert_eq!(query.text(), "25");

        query.clear();
        assert!(query.text().is_empty());
    }
}

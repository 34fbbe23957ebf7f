//! Authoring-time data validation.
//!
//! Validation never blocks runtime recomputation; it only collects
//! human-readable problems for a content pipeline to report.

/// Outcome of validating one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// Nothing was checked.
    #[default]
    NotValidated,
    /// All checks passed.
    Valid,
    /// At least one check failed.
    Invalid,
}

impl ValidationResult {
    /// Merge two results: any `Invalid` wins, then any `Valid`.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Invalid, _) | (_, Self::Invalid) => Self::Invalid,
            (Self::Valid, _) | (_, Self::Valid) => Self::Valid,
            _ => Self::NotValidated,
        }
    }
}

/// Collects validation errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    errors: Vec<String>,
}

impl ValidationContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True when no error was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

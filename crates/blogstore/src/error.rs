use crate::model::PostId;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// Reserved for backends with version-stamped writes. The in-memory store
    /// serializes same-id writers and never returns it.
    #[error("Concurrent modification of post {0}")]
    ConcurrencyConflict(PostId),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

impl BlogError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BlogError::Validation(ValidationErrors(vec![FieldError::new(field, reason)]))
    }

    /// Only conflicts are worth retrying; everything else is caller-correctable
    /// or a stable answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BlogError::ConcurrencyConflict(_))
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;

/// A single failing field and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every field that failed validation for one payload. Never empty when
/// carried by [`BlogError::Validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.0.push(FieldError::new(field, reason));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise the whole list as an error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(BlogError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

use thiserror::Error;

/// Errors produced when validating client-supplied records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// One or more required text fields are empty after trimming.
    #[error("{0} required")]
    Required(&'static str),
}

use thiserror::Error;

/// A partial operation was applied to an empty stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} of an empty stream")]
pub struct EmptySequenceError {
  operation: &'static str
}

impl EmptySequenceError {
  pub(crate) fn new(operation: &'static str) -> Self {
    EmptySequenceError { operation }
  }

  /// The name of the operation that failed, e.g. `head`.
  pub fn operation(&self) -> &'static str { self.operation }
}

pub type Result<T> = std::result::Result<T, EmptySequenceError>;

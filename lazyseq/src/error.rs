use thiserror::Error;

/// Everything that can go wrong when traversing or building a sequence.
#[derive(Debug,Clone,PartialEq,Eq,Error)]
pub enum SeqError {

  /// An argument had the wrong shape, e.g. a negative or fractional index.
  #[error("type error: {0}")]
  Type(String),

  /// Index past the end of a finite sequence.
  #[error("index {index} out of range for sequence of length {length}")]
  Range { index: usize, length: usize },

  /// A finite-only operation was called on an infinite stream.
  #[error("`{0}` is not supported on an infinite stream")]
  Unsupported(&'static str),

  /// `first` or `rest` of the empty sequence.
  #[error("`{0}` called on an empty sequence")]
  EmptyAccess(&'static str),

  /// A stream tail demanded itself while it was being computed.
  #[error("stream tail forced while it was already being forced")]
  Reentrant,

  /// The tail of an infinite stream turned out to be finite.
  #[error("infinite stream ran out of elements")]
  Exhausted,

  /// A user supplied tail computation failed.
  #[error("{0}")]
  Failed(String),
}

impl SeqError {
  pub fn failed(msg: impl Into<String>) -> Self { SeqError::Failed(msg.into()) }

  pub fn type_error(msg: impl Into<String>) -> Self {
    let msg = msg.into();
    tracing::debug!(%msg, "rejected argument");
    SeqError::Type(msg)
  }
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;

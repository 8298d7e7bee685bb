//! Error types for pagewire operations.

use thiserror::Error;

/// Errors that can occur while loading a page or compiling element bindings.
///
/// Runtime event handling never returns errors: a missing element leaves its
/// controller inert and a malformed href is skipped per item.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid document location: {0}")]
    Location(#[from] url::ParseError),

    #[error("invalid selector `{0}`")]
    Selector(String),
}

pub type Result<T> = std::result::Result<T, Error>;

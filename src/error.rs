use std::path::PathBuf;
use thiserror::Error;

/// The two failure kinds of option parsing. Callers branch on the variant:
/// `InvalidArgument` is a usage error, `PathNotFound` a bad target.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum OptionsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("'{}' is not a directory or does not exist", .0.display())]
    PathNotFound(PathBuf),
}

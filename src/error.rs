use thiserror::Error;

use sgr::StyleParseError;

#[derive(Error, Debug)]
pub enum SplashError {
    #[error("Theme file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger was already installed")]
    Logger(#[from] log::SetLoggerError),

    #[error("line {line}: expected `name = style`, found {text:?}")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: style name is empty")]
    EmptyName { line: usize },

    #[error("line {line}: style '{name}' is already defined")]
    DuplicateName { line: usize, name: String },

    #[error("line {line}: invalid style for '{name}': {source}")]
    InvalidStyle {
        line: usize,
        name: String,
        #[source]
        source: StyleParseError,
    },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SplashError>;

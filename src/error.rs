use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for moncat operations
#[derive(Error, Diagnostic, Debug)]
pub enum MonError {
    #[error("Monster directory not found: {}", path.display())]
    #[diagnostic(
        code(moncat::directory_not_found),
        help("Pass an existing directory or set `directory` in moncat.yaml")
    )]
    DirectoryNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    #[diagnostic(code(moncat::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(moncat::io))]
    Io { path: PathBuf, message: String },

    #[error("line {line}: `{property}` expects {expected}, found `{value}`")]
    #[diagnostic(code(moncat::numeric))]
    NumericConversion {
        property: String,
        value: String,
        expected: &'static str,
        line: u32,
    },

    #[error("line {line}: malformed `{property}` value: {message}")]
    #[diagnostic(code(moncat::syntax))]
    Syntax {
        property: String,
        message: String,
        line: u32,
    },

    #[error("Missing required property `{property}`")]
    #[diagnostic(
        code(moncat::missing_property),
        help("Every monster file must declare its RaceNumber")
    )]
    MissingProperty { property: &'static str },

    #[error(
        "Duplicate race id {race_id}: declared by {} and {}",
        first.display(),
        second.display()
    )]
    #[diagnostic(code(moncat::duplicate_key))]
    DuplicateKey {
        race_id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{}: {cause}", path.display())]
    #[diagnostic(code(moncat::file))]
    InFile { path: PathBuf, cause: Box<MonError> },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(moncat::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(moncat::command))]
    Command {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl MonError {
    /// Attach the offending file to an error raised while loading it.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        MonError::InFile {
            path: path.into(),
            cause: Box::new(self),
        }
    }

    /// The innermost error, skipping any file context wrappers.
    pub fn root(&self) -> &MonError {
        match self {
            MonError::InFile { cause, .. } => cause.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MonError>;

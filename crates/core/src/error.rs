use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("Terminal error: {}", .0)]
    Terminal(std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

/// Why a record in the adjustments file was skipped.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("expected 5 fields (name low high step initial), found {}", .0)]
    FieldCount(usize),

    #[error("`{}` value is not a number: `{}`", .field, .value)]
    NotANumber { field: &'static str, value: String },

    #[error("no command line follows the definition of `{}`", .0)]
    MissingCommand(String),

    #[error("command line for `{}` starts with a character that is not permitted: `{}`", .name, .line)]
    EmptyCommand { name: String, line: String },
}

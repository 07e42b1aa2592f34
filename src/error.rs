use thiserror::Error;

/// Result alias for operations in this crate
pub type LportsResult<T> = Result<T, LportsError>;

/// Errors produced while listing listening sockets
#[derive(Error, Debug)]
pub enum LportsError {
    /// The enumeration tool could not be launched or exited non-zero
    #[error("error running {command} {args:?}: {cause} ({output})")]
    Execution {
        /// The command that was invoked
        command: String,
        /// The arguments it was invoked with
        args: Vec<String>,
        /// Whatever the tool wrote to stdout before failing
        output: String,
        /// The launch failure or exit status
        cause: String,
    },

    /// A line or chunk handed to the field-filler had no usable fields
    #[error("empty field")]
    EmptyField,

    /// The query was configured in a way that cannot be executed
    #[error("configuration error {0}")]
    ConfigurationError(String),
}

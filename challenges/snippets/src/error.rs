/// Errors raised while reading a task's input.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// The input stream ended before the expected value was read.
    #[error("expected more input, reached end of stream")]
    Missing,

    /// A token could not be parsed into the expected type.
    #[error("could not parse {token:?} as {expected}")]
    Malformed {
        token: String,
        expected: &'static str,
    },

    /// A value that must be non-negative was negative.
    #[error("expected a non-negative value, got {0}")]
    Negative(String),

    /// A value was larger than the task supports.
    #[error("value {value} exceeds the supported limit of {limit}")]
    OutOfRange { value: String, limit: u64 },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while locating or running a task.
#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("unknown category {0}")]
    UnknownCategory(String),

    #[error("unknown task {category}/{problem}")]
    UnknownTask { category: String, problem: String },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

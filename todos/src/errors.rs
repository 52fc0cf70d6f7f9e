/// The error type for task validation, on add and on edit commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidTask {
    /// Task text must be between 3 and 255 characters.
    TextLength { chars: usize },
    /// Deadlines are local `YYYY-MM-DDTHH:MM` timestamps.
    DeadlineFormat { value: String },
    /// Deadlines must lie in the future.
    DeadlineInPast { value: String },
}

impl std::error::Error for InvalidTask {}

impl std::fmt::Display for InvalidTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTask::TextLength { chars } => write!(
                f,
                "Task text must be 3 to 255 characters long, got {}",
                chars
            ),
            InvalidTask::DeadlineFormat { value } => write!(
                f,
                "Deadline '{}' is not a YYYY-MM-DDTHH:MM timestamp",
                value
            ),
            InvalidTask::DeadlineInPast { value } => {
                write!(f, "Deadline '{}' is not in the future", value)
            }
        }
    }
}

/// The error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    Invalid(InvalidTask),
    NoSuchTask { index: usize, task_count: usize },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Invalid(err) => Some(err),
            StoreError::NoSuchTask { .. } => None,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Invalid(err) => write!(f, "{}", err),
            StoreError::NoSuchTask { index, task_count } => write!(
                f,
                "There is no task {}, the list has {} tasks",
                index, task_count
            ),
        }
    }
}

impl From<InvalidTask> for StoreError {
    fn from(err: InvalidTask) -> Self {
        StoreError::Invalid(err)
    }
}

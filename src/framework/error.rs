use thiserror::Error;

/// Errors raised by the dataflow framework itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Dispatcher closed")]
    DispatcherClosed,

    #[error("Task failed: {0}")]
    TaskFailed(String),
}

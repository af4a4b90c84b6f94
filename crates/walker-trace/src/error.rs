use thiserror::Error;

/// Failures while loading a trace.
///
/// Malformed *lines* are never errors — the parser drops them — so the only
/// fatal case is failing to read the input at all.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;

use thiserror::Error;

/// Errors surfaced by the conversation session.
///
/// The session never lets a remote failure escape as anything other than
/// `AssistantUnavailable`; the class of failure (connection, status,
/// malformed body, missing reply) is not distinguished past this boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no products selected")]
    EmptySelection,

    #[error("question is empty")]
    EmptyQuestion,

    #[error("assistant unavailable: {0}")]
    AssistantUnavailable(String),
}

/// Errors from the remote assistant client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("response contained no reply")]
    MissingReply,
}

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog read error: {0}")]
    Read(String),

    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// Errors from selection persistence.
///
/// A malformed persisted selection is NOT an error: stores recover it
/// silently by resetting to an empty selection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read error: {0}")]
    Read(String),

    #[error("storage write error: {0}")]
    Write(String),
}

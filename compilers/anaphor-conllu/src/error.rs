use thiserror::Error;

/// Reasons a document cannot be turned into a [`anaphor_protocol::Document`].
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConlluError {
    #[error("line {line}: expected 10 tab-separated columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid token id '{id}'")]
    InvalidId { line: usize, id: String },

    #[error("line {line}: invalid head '{head}'")]
    InvalidHead { line: usize, head: String },

    #[error("line {line}: malformed entity annotation '{value}'")]
    InvalidEntity { line: usize, value: String },

    #[error("line {line}: entity '{eid}' is closed but was never opened")]
    UnmatchedClose { line: usize, eid: String },

    #[error("line {line}: sentence ends while entity '{eid}' is still open")]
    UnclosedMention { line: usize, eid: String },

    #[error("document contains no sentences")]
    Empty,
}

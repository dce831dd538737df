use anaphor_protocol::MentionId;
use thiserror::Error;

/// Why a single pair was dropped. Never fatal for the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("mention {0} has no resolvable head")]
    UnresolvedHead(MentionId),

    #[error("mention {0} has no words")]
    EmptySpan(MentionId),
}

impl PairError {
    /// The mention that caused the failure.
    pub fn mention(&self) -> MentionId {
        match self {
            PairError::UnresolvedHead(id) | PairError::EmptySpan(id) => *id,
        }
    }
}

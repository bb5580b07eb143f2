use thiserror::Error;

use super::item::ItemId;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// The four list operations, used to pick a fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Banner text when the server gave no message of its own
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos",
            Operation::Create => "Failed to create todo",
            Operation::Update => "Failed to update todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo text cannot be empty")]
    EmptyText,

    #[error("Todo id is required")]
    MissingId,

    #[error("Todo id must be a whole number, got \"{0}\"")]
    InvalidId(String),

    #[error("Todo with id {0} not found")]
    NotFound(ItemId),

    /// Non-success status from the remote collection
    #[error("remote error (status {status:?}): {}", message.as_deref().unwrap_or("no message"))]
    Remote {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl TodoError {
    /// Local validation failures never reach the network
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TodoError::EmptyText | TodoError::MissingId | TodoError::InvalidId(_)
        )
    }

    /// Text shown in the error banner for a failure of `op`
    pub fn user_message(&self, op: Operation) -> String {
        match self {
            TodoError::EmptyText
            | TodoError::MissingId
            | TodoError::InvalidId(_)
            | TodoError::NotFound(_) => self.to_string(),
            TodoError::Remote {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            TodoError::Remote { .. } | TodoError::Transport(_) | TodoError::Decode(_) => {
                op.fallback_message().to_string()
            }
        }
    }
}

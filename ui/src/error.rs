use thiserror::Error;

/// Draft rejected before anything is queued or sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Please enter recipient email")]
    MissingRecipient,

    #[error("Please enter a message or attach a file")]
    EmptyMessage,
}

/// Failure of a single `/send` request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The backend answered but did not report the message as sent.
    #[error("backend rejected message: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// Text shown to the user. Only backend rejections carry their reason;
    /// every transport problem collapses into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(reason) => {
                format!("Failed to send: {}", reason.as_deref().unwrap_or("Unknown error"))
            }
            _ => "Error sending message".to_string(),
        }
    }
}

/// Anything that ends a send attempt without delivering it.
#[derive(Error, Debug)]
pub enum SendError {
    #[error(transparent)]
    Invalid(#[from] ComposeError),

    #[error(transparent)]
    Delivery(#[from] ApiError),
}

impl SendError {
    pub fn user_message(&self) -> String {
        match self {
            SendError::Invalid(err) => err.to_string(),
            SendError::Delivery(err) => err.user_message(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage unavailable: {0}")]
pub struct StorageError(pub String);

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameter the backend appends when redirecting back after OAuth.
pub const USER_EMAIL_PARAM: &str = "user_email";

/// Local storage key holding the signed-in sender address.
pub const IDENTITY_STORAGE_KEY: &str = "user_email";

/// Multipart field names accepted by `POST /send`.
pub mod form {
    pub const USER_EMAIL: &str = "user_email";
    pub const TO: &str = "to";
    pub const SUBJECT: &str = "subject";
    pub const MESSAGE: &str = "message";
    pub const FILE: &str = "file";
}

/// Value of `status` in a successful `/send` response.
pub const STATUS_SENT: &str = "sent";

/// JSON body returned by `POST /send`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResponse {
    pub fn is_sent(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Delivery state of one outgoing message. Moves from `Sending` to
/// exactly one of the settled states and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn is_settled(self) -> bool {
        !matches!(self, DeliveryStatus::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_response_sent() {
        let response: SendResponse =
            serde_json::from_str(r#"{"status":"sent","message":"Email sent successfully!"}"#)
                .unwrap();
        assert!(response.is_sent());
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_send_response_error_without_status() {
        let response: SendResponse =
            serde_json::from_str(r#"{"error":"User not authenticated"}"#).unwrap();
        assert!(!response.is_sent());
        assert_eq!(response.error.as_deref(), Some("User not authenticated"));
    }

    #[test]
    fn test_send_response_other_status() {
        let response: SendResponse =
            serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
        assert!(!response.is_sent());
    }

    #[test]
    fn test_delivery_status_settled() {
        assert!(!DeliveryStatus::Sending.is_settled());
        assert!(DeliveryStatus::Sent.is_settled());
        assert!(DeliveryStatus::Failed.is_settled());
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Failed).unwrap(),
            r#""failed""#
        );
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(MessageId::new(), MessageId::new());
    }
}

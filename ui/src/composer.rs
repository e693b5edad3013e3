use chrono::{DateTime, Local};
use mailchat_types::{DeliveryStatus, MessageId};

use crate::api::OutgoingEmail;
use crate::config::ClientConfig;
use crate::error::{ApiError, ComposeError};

/// A file picked for the next message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub id: MessageId,
    pub text: Option<String>,
    pub file_name: Option<String>,
    pub timestamp: String,
    status: DeliveryStatus,
}

impl OutgoingMessage {
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    // Only a message still in `Sending` can settle.
    fn settle(&mut self, status: DeliveryStatus) -> bool {
        if self.status.is_settled() {
            return false;
        }
        self.status = status;
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipient: String,
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl Draft {
    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || self.attachment.is_some()
    }
}

/// A send that has been logged and is waiting on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub id: MessageId,
    pub email: OutgoingEmail,
}

/// Formats the moment a message was queued as shown in its bubble.
pub fn display_time(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Draft plus the append-only log of messages sent from one identity.
///
/// Sending is split in two so callers never hold the composer across the
/// network call: [`Composer::begin_send`] validates the draft and logs the
/// message, [`Composer::finish_send`] applies the outcome to that message.
#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    identity: String,
    subject: String,
    attachment_placeholder: String,
    draft: Draft,
    log: Vec<OutgoingMessage>,
    in_flight: usize,
}

impl Composer {
    pub fn new(identity: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            identity: identity.into(),
            subject: config.subject.clone(),
            attachment_placeholder: config.attachment_placeholder.clone(),
            draft: Draft::default(),
            log: Vec::new(),
            in_flight: 0,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn messages(&self) -> &[OutgoingMessage] {
        &self.log
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight > 0
    }

    pub fn can_send(&self) -> bool {
        !self.is_in_flight() && self.draft.has_content()
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.draft.recipient = recipient.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.draft.attachment = Some(attachment);
    }

    pub fn remove_attachment(&mut self) {
        self.draft.attachment = None;
    }

    /// Validates the draft, appends a `Sending` entry stamped with
    /// `timestamp`, and returns the request to dispatch.
    pub fn begin_send(&mut self, timestamp: impl Into<String>) -> Result<PendingSend, ComposeError> {
        if self.draft.recipient.is_empty() {
            return Err(ComposeError::MissingRecipient);
        }
        if !self.draft.has_content() {
            return Err(ComposeError::EmptyMessage);
        }

        let text = (!self.draft.text.is_empty()).then(|| self.draft.text.clone());
        let message = OutgoingMessage {
            id: MessageId::new(),
            text: text.clone(),
            file_name: self.draft.attachment.as_ref().map(|a| a.name.clone()),
            timestamp: timestamp.into(),
            status: DeliveryStatus::Sending,
        };
        let id = message.id;
        self.log.push(message);
        self.in_flight += 1;

        let email = OutgoingEmail {
            from: self.identity.clone(),
            to: self.draft.recipient.clone(),
            subject: self.subject.clone(),
            message: text.unwrap_or_else(|| self.attachment_placeholder.clone()),
            attachment: self.draft.attachment.clone(),
        };

        Ok(PendingSend { id, email })
    }

    /// Settles the message `id` and hands the outcome back for reporting.
    /// A delivered message clears the draft text and attachment; the
    /// recipient stays for the rest of the conversation.
    pub fn finish_send(
        &mut self,
        id: MessageId,
        outcome: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        self.in_flight = self.in_flight.saturating_sub(1);

        let status = match &outcome {
            Ok(()) => DeliveryStatus::Sent,
            Err(_) => DeliveryStatus::Failed,
        };

        match self.log.iter_mut().find(|message| message.id == id) {
            Some(message) => {
                if !message.settle(status) {
                    tracing::warn!(%id, "message already settled");
                }
            }
            None => tracing::warn!(%id, "no message to settle"),
        }

        match &outcome {
            Ok(()) => {
                tracing::info!(%id, "message sent");
                self.draft.text.clear();
                self.draft.attachment = None;
            }
            Err(e) => tracing::warn!(%id, "message failed: {e}"),
        }

        outcome
    }
}

use mailchat_types::{SendResponse, form};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::composer::Attachment;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// One email as handed to the backend's `/send` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub message: String,
    pub attachment: Option<Attachment>,
}

/// Something that can deliver an [`OutgoingEmail`]. Only ever driven from
/// the single-threaded UI executor, so the futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_form(email: &OutgoingEmail) -> Form {
        let multipart = Form::new()
            .text(form::USER_EMAIL, email.from.clone())
            .text(form::TO, email.to.clone())
            .text(form::SUBJECT, email.subject.clone())
            .text(form::MESSAGE, email.message.clone());

        match &email.attachment {
            Some(attachment) => multipart.part(
                form::FILE,
                Part::bytes(attachment.bytes.clone()).file_name(attachment.name.clone()),
            ),
            None => multipart,
        }
    }
}

impl Mailer for ApiClient {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), ApiError> {
        tracing::info!(to = %email.to, attachment = email.attachment.is_some(), "dispatching email");

        let response = self
            .client
            .post(self.config.send_url())
            .multipart(Self::build_form(email))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_reply(status, &body)
    }
}

/// The backend answers either with a bare JSON object or, on some error
/// paths, with an `[object, status_code]` pair.
#[derive(Deserialize)]
#[serde(untagged)]
enum SendReply {
    Body(SendResponse),
    WithStatus(SendResponse, u16),
}

/// Maps a raw `/send` HTTP reply onto the send outcome.
pub fn interpret_reply(status: u16, body: &str) -> Result<(), ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }

    let response = match serde_json::from_str::<SendReply>(body)? {
        SendReply::Body(response) | SendReply::WithStatus(response, _) => response,
    };

    if response.is_sent() {
        Ok(())
    } else {
        Err(ApiError::Rejected(response.error))
    }
}

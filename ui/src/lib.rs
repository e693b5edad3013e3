pub mod api;
pub mod browser;
pub mod composer;
pub mod config;
pub mod error;
pub mod session;

pub use api::{ApiClient, Mailer, OutgoingEmail};
pub use composer::{Attachment, Composer, OutgoingMessage};
pub use config::ClientConfig;
pub use error::{ApiError, ComposeError, SendError, StorageError};
pub use session::{IdentityStore, Session};

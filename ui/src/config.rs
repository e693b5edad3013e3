const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOGIN_URL: &str = "https://email-chat-app-ktgy.onrender.com/login";

/// Subject line used for every message sent from the chat view.
pub const DEFAULT_SUBJECT: &str = "Message from Email Chat";

/// Body sent in place of empty text when only a file is attached.
pub const ATTACHMENT_PLACEHOLDER: &str = "(File attached)";

/// Client settings. Baked in at build time since the wasm bundle has no
/// process environment to read from at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub subject: String,
    pub attachment_placeholder: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            attachment_placeholder: ATTACHMENT_PLACEHOLDER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `MAILCHAT_API_URL` / `MAILCHAT_LOGIN_URL`
    /// when they were set at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("MAILCHAT_API_URL"),
            option_env!("MAILCHAT_LOGIN_URL"),
        )
    }

    fn with_overrides(mut self, api_base_url: Option<&str>, login_url: Option<&str>) -> Self {
        if let Some(url) = api_base_url.filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = login_url.filter(|url| !url.is_empty()) {
            self.login_url = url.to_string();
        }
        self
    }

    pub fn send_url(&self) -> String {
        format!("{}/send", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.send_url(), "http://localhost:8000/send");
        assert_eq!(config.subject, "Message from Email Chat");
        assert_eq!(config.attachment_placeholder, "(File attached)");
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = ClientConfig::default()
            .with_overrides(Some("https://api.example.com/"), Some("https://api.example.com/login"));
        assert_eq!(config.send_url(), "https://api.example.com/send");
        assert_eq!(config.login_url, "https://api.example.com/login");
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let config = ClientConfig::default().with_overrides(Some(""), None);
        assert_eq!(config, ClientConfig::default());
    }
}

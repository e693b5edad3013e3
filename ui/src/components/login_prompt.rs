use dioxus::prelude::*;
use mailchat_ui::browser;

/// Shown while nobody is signed in. Login leaves the app for the backend's
/// OAuth flow, which redirects back with the address in the query string.
#[component]
pub fn LoginPrompt(login_url: String) -> Element {
    rsx! {
        div {
            class: "login-container",
            h1 { "📧 Simple Email Sender" }
            p { "Send emails directly from your Gmail account" }
            button {
                class: "login-button",
                onclick: move |_| browser::navigate_to(&login_url),
                "🔐 Login with Google"
            }
        }
    }
}

use dioxus::prelude::*;
use mailchat_ui::Session;

use super::{ComposerView, LoginPrompt};

/// Login prompt while signed out; logout button and the conversation view
/// once an identity is known.
#[component]
pub fn SessionShell(session: Session, login_url: String, on_logout: EventHandler<()>) -> Element {
    match session {
        Session::LoggedOut => rsx! {
            LoginPrompt { login_url }
        },
        Session::LoggedIn(identity) => rsx! {
            div {
                class: "session-header",
                button {
                    class: "logout-button",
                    onclick: move |_| on_logout.call(()),
                    "Logout"
                }
            }
            ComposerView { identity }
        },
    }
}

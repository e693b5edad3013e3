use dioxus::prelude::*;
use mailchat_ui::browser::{self, LocalIdentityStore};
use mailchat_ui::{ApiClient, Session};

mod components;

use components::SessionShell;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_context_provider(ApiClient::default);
    let mut session = use_signal(|| {
        let redirect = browser::take_redirect_identity();
        Session::resolve(redirect.as_deref(), &LocalIdentityStore)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionShell {
            session: session(),
            login_url: client.config().login_url.clone(),
            on_logout: move |_| session.write().logout(&LocalIdentityStore),
        }
    }
}

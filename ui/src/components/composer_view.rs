use chrono::Local;
use dioxus::prelude::*;
use email_address::EmailAddress;
use mailchat_ui::browser;
use mailchat_ui::composer::display_time;
use mailchat_ui::{ApiClient, Attachment, Composer, Mailer, SendError};

use super::MessageList;

fn avatar_letter(recipient: &str) -> String {
    recipient
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Logs the draft and dispatches it in the background. Validation problems
/// and delivery failures are reported with a browser alert.
fn send_draft(mut composer: Signal<Composer>) {
    let pending = composer.write().begin_send(display_time(Local::now()));
    let pending = match pending {
        Ok(pending) => pending,
        Err(e) => {
            browser::alert(&SendError::from(e).user_message());
            return;
        }
    };

    let client = consume_context::<ApiClient>();
    spawn(async move {
        let outcome = client.send_email(&pending.email).await;
        let outcome = composer.write().finish_send(pending.id, outcome);
        if let Err(e) = outcome {
            browser::alert(&SendError::from(e).user_message());
        }
    });
}

/// Single conversation: recipient header, message log, and input bar.
#[component]
pub fn ComposerView(identity: String) -> Element {
    let client = use_context::<ApiClient>();
    let mut composer = use_signal(|| Composer::new(identity.clone(), client.config()));

    let (recipient, text, attachment_name) = {
        let state = composer.read();
        let draft = state.draft();
        (
            draft.recipient.clone(),
            draft.text.clone(),
            draft.attachment.as_ref().map(|a| a.name.clone()),
        )
    };
    let messages = composer.read().messages().to_vec();
    let in_flight = composer.read().is_in_flight();
    let can_send = composer.read().can_send();

    // Mirrors an email-typed input: flagged, never blocking.
    let recipient_class = if recipient.is_empty() || EmailAddress::is_valid(&recipient) {
        "recipient-input"
    } else {
        "recipient-input recipient-input-invalid"
    };

    rsx! {
        div {
            class: "composer",
            div {
                class: "composer-header",
                div {
                    class: "composer-header-content",
                    div { class: "avatar", "{avatar_letter(&recipient)}" }
                    div {
                        class: "composer-header-info",
                        input {
                            r#type: "email",
                            class: recipient_class,
                            placeholder: "Enter recipient email...",
                            value: "{recipient}",
                            oninput: move |e| composer.write().set_recipient(e.value()),
                        }
                        div { class: "sender", "From: {identity}" }
                    }
                }
            }

            MessageList { messages }

            div {
                class: "input-container",
                if let Some(name) = attachment_name {
                    div {
                        class: "file-preview",
                        span { class: "file-preview-name", "📎 {name}" }
                        button {
                            class: "remove-file",
                            onclick: move |_| composer.write().remove_attachment(),
                            "✕"
                        }
                    }
                }
                div {
                    class: "input-bar",
                    label {
                        class: "attach-button",
                        "📎"
                        input {
                            r#type: "file",
                            class: "file-input",
                            onchange: move |evt: FormEvent| async move {
                                let mut composer = composer;
                                let Some(engine) = evt.files() else {
                                    return;
                                };
                                let Some(name) = engine.files().into_iter().next() else {
                                    return;
                                };
                                let bytes = engine.read_file(&name).await;
                                match bytes {
                                    Some(bytes) => composer.write().attach(Attachment { name, bytes }),
                                    None => tracing::warn!("could not read attachment {name}"),
                                }
                            },
                        }
                    }
                    input {
                        r#type: "text",
                        class: "message-input",
                        placeholder: "Type a message...",
                        value: "{text}",
                        disabled: in_flight,
                        oninput: move |e| composer.write().set_text(e.value()),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter && !e.modifiers().shift() {
                                e.prevent_default();
                                send_draft(composer);
                            }
                        },
                    }
                    button {
                        class: "send-button",
                        disabled: !can_send,
                        onclick: move |_| send_draft(composer),
                        if in_flight { "⏳" } else { "➤" }
                    }
                }
            }
        }
    }
}

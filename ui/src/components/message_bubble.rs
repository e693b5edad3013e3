use dioxus::prelude::*;
use mailchat_types::DeliveryStatus;
use mailchat_ui::OutgoingMessage;

fn status_glyph(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Sending => "⏳",
        DeliveryStatus::Sent => "✓✓",
        DeliveryStatus::Failed => "❌",
    }
}

#[component]
pub fn MessageBubble(message: OutgoingMessage) -> Element {
    let status_class = match message.status() {
        DeliveryStatus::Failed => "status status-failed",
        _ => "status",
    };

    rsx! {
        div {
            class: "message-row",
            div {
                class: "message-bubble",
                if let Some(text) = &message.text {
                    div { class: "message-text", "{text}" }
                }
                if let Some(file_name) = &message.file_name {
                    div { class: "file-attachment", "📎 {file_name}" }
                }
                div {
                    class: "message-footer",
                    span { class: "timestamp", "{message.timestamp}" }
                    span { class: status_class, "{status_glyph(message.status())}" }
                }
            }
        }
    }
}

/// Conversation log, oldest first.
#[component]
pub fn MessageList(messages: Vec<OutgoingMessage>) -> Element {
    rsx! {
        div {
            class: "messages",
            if messages.is_empty() {
                div {
                    class: "empty-state",
                    div { class: "empty-icon", "💬" }
                    p { class: "empty-title", "No messages yet" }
                    p { class: "empty-hint", "Enter recipient email and start sending!" }
                }
            } else {
                for message in messages {
                    MessageBubble { key: "{message.id}", message }
                }
            }
        }
    }
}

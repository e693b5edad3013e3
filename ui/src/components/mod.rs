mod composer_view;
mod login_prompt;
mod message_bubble;
mod session_shell;

pub use composer_view::ComposerView;
pub use login_prompt::LoginPrompt;
pub use message_bubble::MessageList;
pub use session_shell::SessionShell;

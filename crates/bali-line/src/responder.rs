//! Responder seam between the dispatcher and a bot's behavior

use async_trait::async_trait;
use bali_flex::Message;

use crate::error::Result;

/// Ordered messages sent for one event
pub type Reply = Vec<Message>;

/// Prefix of the echo reply for unmatched text
pub const ECHO_PREFIX: &str = "Message received: ";

/// Postback data or message kind the bot cannot handle
pub const COULD_NOT_PROCESS: &str = "Sorry, we could not process your request.";

/// Sent when producing a reply failed
pub const FAILURE: &str = "Sorry, something went wrong. Please try again later.";

/// Sent when a user adds the bot
pub const WELCOME: &str =
    "Thank you for adding me! Tap the menu below or send a keyword such as 不動産 to get started.";

/// Echo reply for a text nothing matched
pub fn echo(text: &str) -> Reply {
    vec![Message::text(format!("{}{}", ECHO_PREFIX, text))]
}

/// Reply for input the bot does not understand
pub fn could_not_process() -> Reply {
    vec![Message::text(COULD_NOT_PROCESS)]
}

/// Bot behavior for text and postback events
#[async_trait]
pub trait Responder: Send + Sync {
    /// Handle a text message
    async fn on_text(&self, text: &str) -> Result<Reply>;

    /// Handle postback data from a button
    async fn on_postback(&self, data: &str) -> Result<Reply>;

    /// Greeting for a follow event
    fn welcome(&self) -> Reply {
        vec![Message::text(WELCOME)]
    }
}

//! Outbound message objects

use serde::Serialize;

use crate::components::FlexContainer;

/// A single message in a reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text {
        text: String,
    },
    Flex {
        #[serde(rename = "altText")]
        alt_text: String,
        contents: FlexContainer,
    },
}

impl Message {
    /// Plain text message
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Flex message wrapping a bubble or carousel
    pub fn flex(alt_text: impl Into<String>, contents: impl Into<FlexContainer>) -> Self {
        Self::Flex {
            alt_text: alt_text.into(),
            contents: contents.into(),
        }
    }

    /// Text content, if this is a text message
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Flex { .. } => None,
        }
    }

    /// Flex contents, if this is a flex message
    pub fn as_flex(&self) -> Option<&FlexContainer> {
        match self {
            Self::Flex { contents, .. } => Some(contents),
            Self::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Bubble;
    use serde_json::json;

    #[test]
    fn test_text_message_serialization() {
        let value = serde_json::to_value(Message::text("hi")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "hi"}));
    }

    #[test]
    fn test_flex_message_serialization() {
        let value = serde_json::to_value(Message::flex("alt", Bubble::new())).unwrap();
        assert_eq!(
            value,
            json!({"type": "flex", "altText": "alt", "contents": {"type": "bubble"}})
        );
    }
}

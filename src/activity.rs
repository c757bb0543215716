//! Activity data model — the message-like events exchanged with the channel.
//!
//! Only the fields the bot actually consumes are modelled: the activity type,
//! the text, and the addressing metadata needed to thread a reply back into
//! the same conversation. Unknown inbound fields are ignored; unset outbound
//! fields are omitted from the JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activity type for user/bot messages. Other types (conversation updates,
/// typing indicators, ...) are delivered on the same webhook and ignored.
const MESSAGE_TYPE: &str = "message";

/// A user or bot account on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAccount {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The conversation an activity belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationAccount {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Rich content bundled with a reply activity, as it goes over the wire.
/// `content` is opaque here; the receiving client renders it according to
/// `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: serde_json::Value,
}

/// A single message-like event exchanged between user and bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Activity {
    /// Whether this activity is a user message (vs. a conversation update,
    /// typing indicator, or any other event type).
    pub fn is_message(&self) -> bool {
        self.activity_type == MESSAGE_TYPE
    }

    /// Whether the activity carries any non-whitespace text. Trimming here is
    /// only for the emptiness check; dispatch matching never trims.
    pub fn has_content(&self) -> bool {
        self.text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Derives a reply addressed back into the same conversation: same
    /// channel, service URL, and conversation; `from`/`recipient` swapped;
    /// `reply_to_id` pointing at this activity. The reply starts with no
    /// text and no attachments.
    pub fn create_reply(&self) -> Activity {
        Activity {
            activity_type: MESSAGE_TYPE.to_string(),
            id: Some(Uuid::new_v4().to_string()),
            timestamp: Some(Utc::now()),
            channel_id: self.channel_id.clone(),
            service_url: self.service_url.clone(),
            from: self.recipient.clone(),
            recipient: self.from.clone(),
            conversation: self.conversation.clone(),
            reply_to_id: self.id.clone(),
            text: None,
            attachments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbound(text: &str) -> Activity {
        Activity {
            activity_type: "message".into(),
            id: Some("in-1".into()),
            timestamp: None,
            channel_id: Some("emulator".into()),
            service_url: Some("http://localhost:9000".into()),
            from: Some(ChannelAccount {
                id: "user-1".into(),
                name: Some("User".into()),
            }),
            recipient: Some(ChannelAccount {
                id: "bot-1".into(),
                name: Some("Bot".into()),
            }),
            conversation: Some(ConversationAccount {
                id: "conv-1".into(),
                name: None,
            }),
            reply_to_id: None,
            text: Some(text.into()),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn create_reply_threads_into_same_conversation() {
        let reply = inbound("Hero").create_reply();
        assert_eq!(reply.activity_type, "message");
        assert_eq!(reply.conversation.as_ref().unwrap().id, "conv-1");
        assert_eq!(reply.channel_id.as_deref(), Some("emulator"));
        assert_eq!(reply.service_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(reply.reply_to_id.as_deref(), Some("in-1"));
        assert!(reply.attachments.is_empty());
        assert!(reply.text.is_none());
    }

    #[test]
    fn create_reply_swaps_from_and_recipient() {
        let reply = inbound("Hero").create_reply();
        assert_eq!(reply.from.as_ref().unwrap().id, "bot-1");
        assert_eq!(reply.recipient.as_ref().unwrap().id, "user-1");
    }

    #[test]
    fn has_content_rejects_whitespace_only_text() {
        assert!(inbound("Hero").has_content());
        assert!(!inbound("").has_content());
        assert!(!inbound("   \t\n").has_content());
        let mut a = inbound("x");
        a.text = None;
        assert!(!a.has_content());
    }

    #[test]
    fn unknown_inbound_fields_are_ignored() {
        let json = r#"{
            "type": "message",
            "text": "Adaptive",
            "locale": "en-US",
            "entities": [{"type": "ClientCapabilities"}]
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert!(activity.is_message());
        assert_eq!(activity.text.as_deref(), Some("Adaptive"));
    }

    #[test]
    fn unset_fields_are_omitted_from_wire_json() {
        let mut reply = inbound("Hero").create_reply();
        reply.id = None;
        reply.timestamp = None;
        let value = serde_json::to_value(&reply).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("text"));
        assert!(!obj.contains_key("attachments"));
        assert_eq!(obj.get("replyToId").unwrap(), "in-1");
        assert_eq!(obj.get("serviceUrl").unwrap(), "http://localhost:9000");
    }
}

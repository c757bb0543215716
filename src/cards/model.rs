//! Card data model — hero card structure and the attachment kinds.

use serde::{Deserialize, Serialize};

use crate::activity::Attachment;

/// Content type for adaptive cards (layout described by the JSON payload,
/// rendered by the receiving client).
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Content type for hero cards.
pub const HERO_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.hero";

/// Button action that echoes its value back as the user's next message text.
pub const ACTION_IM_BACK: &str = "imBack";

/// An image on a hero card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub url: String,
}

impl CardImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A button on a hero card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub title: String,
    pub value: String,
}

impl CardAction {
    /// An implicit-reply button: selecting it sends `value` back as the
    /// user's next message.
    pub fn im_back(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: ACTION_IM_BACK.to_string(),
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A simple card with title, text, images, and action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCard {
    pub title: String,
    pub text: String,
    pub images: Vec<CardImage>,
    pub buttons: Vec<CardAction>,
}

impl HeroCard {
    /// The canned sample hero card. Rebuilt fresh on every turn that asks
    /// for it; both buttons echo the text that selects a card.
    pub fn sample() -> Self {
        Self {
            title: "Hero Card".to_string(),
            text: "This is Hero Card. Which card do you want to show?".to_string(),
            images: vec![CardImage::new("http://adaptivecards.io/content/cats/2.png")],
            buttons: vec![
                CardAction::im_back("Adaptive Card", "Adaptive"),
                CardAction::im_back("Hero Card", "Hero"),
            ],
        }
    }
}

/// The kinds of card the bot can attach to a reply. An adaptive card carries
/// an opaque JSON payload loaded from the asset file; a hero card is built
/// from structured fields.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAttachment {
    Adaptive(serde_json::Value),
    Hero(HeroCard),
}

impl CardAttachment {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => ADAPTIVE_CARD_CONTENT_TYPE,
            Self::Hero(_) => HERO_CARD_CONTENT_TYPE,
        }
    }

    /// Converts into the wire attachment carried on an activity. Adaptive
    /// payloads pass through unchanged.
    pub fn into_attachment(self) -> Attachment {
        let content_type = self.content_type().to_string();
        let content = match self {
            Self::Adaptive(payload) => payload,
            // HeroCard serialization cannot fail: no maps, no non-string keys.
            Self::Hero(card) => serde_json::to_value(card).unwrap_or_default(),
        };
        Attachment {
            content_type,
            content,
        }
    }
}

//! Turn dispatcher — the bot's single piece of application logic.
//!
//! One invocation per inbound activity. The dispatcher holds no state across
//! turns; collaborators (reply transport, card assets) are injected at
//! construction.

use std::sync::Arc;

use crate::activity::Activity;
use crate::cards::{CardAssets, CardAttachment, HeroCard};
use crate::error::Result;
use crate::transport::ActivitySender;

/// Text that selects the adaptive-card reply. Matching is exact: case matters
/// and surrounding whitespace is not trimmed, so `"adaptive"` or
/// `" Adaptive"` fall through to a reply with no attachment.
const ADAPTIVE_CHOICE: &str = "Adaptive";

/// Text that selects the hero-card reply.
const HERO_CHOICE: &str = "Hero";

/// What a turn produced, for host-side logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Non-message activity or empty text: nothing was sent.
    Ignored,
    /// A reply was sent, carrying the given number of attachments (0 or 1).
    Replied { attachments: usize },
}

/// Decides which canned card (if any) to reply with and sends the reply.
pub struct TurnDispatcher {
    sender: Arc<dyn ActivitySender>,
    assets: CardAssets,
}

impl TurnDispatcher {
    pub fn new(sender: Arc<dyn ActivitySender>, assets: CardAssets) -> Self {
        Self { sender, assets }
    }

    /// Handles one turn. Replies to every non-empty message activity; the
    /// reply carries the adaptive card for `"Adaptive"`, the hero card for
    /// `"Hero"`, and no attachment for anything else. A failed asset read or
    /// send fails the turn and no reply goes out; there are no retries.
    pub async fn handle_turn(&self, activity: &Activity) -> Result<TurnOutcome> {
        if !activity.is_message() || !activity.has_content() {
            tracing::debug!(
                activity_type = %activity.activity_type,
                "ignoring activity without message content"
            );
            return Ok(TurnOutcome::Ignored);
        }

        let mut reply = activity.create_reply();

        // Exact match, case-sensitive, untrimmed. Preserved as-is: a near
        // miss silently gets a reply with no attachment.
        let card = match activity.text.as_deref() {
            Some(ADAPTIVE_CHOICE) => {
                // Fresh read every turn; the asset file is the source of truth.
                let payload = self.assets.load_adaptive_card().await?;
                Some(CardAttachment::Adaptive(payload))
            }
            Some(HERO_CHOICE) => Some(CardAttachment::Hero(HeroCard::sample())),
            _ => None,
        };

        if let Some(card) = card {
            reply.attachments.push(card.into_attachment());
        }

        let attachments = reply.attachments.len();
        self.sender.send_activity(&reply).await?;
        tracing::info!(attachments, "turn replied");
        Ok(TurnOutcome::Replied { attachments })
    }
}

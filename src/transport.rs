//! Reply delivery — the seam between the dispatcher and the channel.
//!
//! [`ActivitySender`] is transport-agnostic; [`HttpActivitySender`] posts
//! replies to the connector service named by the activity's `serviceUrl`.

use async_trait::async_trait;

use crate::activity::Activity;
use crate::error::TransportError;

/// Delivers an outbound activity back to the channel the inbound one came
/// from. Implementations own retries and auth if they need any; the
/// dispatcher sends once and propagates failure.
#[async_trait]
pub trait ActivitySender: Send + Sync {
    async fn send_activity(&self, activity: &Activity) -> Result<(), TransportError>;
}

/// Sends replies over HTTP to the connector's conversations endpoint:
/// `POST {serviceUrl}/v3/conversations/{conversationId}/activities/{replyToId}`.
pub struct HttpActivitySender {
    client: reqwest::Client,
}

impl HttpActivitySender {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn reply_url(activity: &Activity) -> Result<String, TransportError> {
        let service_url = activity
            .service_url
            .as_deref()
            .ok_or(TransportError::MissingAddress("serviceUrl"))?;
        let conversation = activity
            .conversation
            .as_ref()
            .ok_or(TransportError::MissingAddress("conversation"))?;

        let base = service_url.trim_end_matches('/');
        let mut url = format!("{base}/v3/conversations/{}/activities", conversation.id);
        if let Some(reply_to) = activity.reply_to_id.as_deref() {
            url.push('/');
            url.push_str(reply_to);
        }
        Ok(url)
    }
}

#[async_trait]
impl ActivitySender for HttpActivitySender {
    async fn send_activity(&self, activity: &Activity) -> Result<(), TransportError> {
        let url = Self::reply_url(activity)?;
        let resp = self.client.post(&url).json(activity).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::SendFailed { status, body });
        }

        tracing::debug!(%url, "activity delivered");
        Ok(())
    }
}

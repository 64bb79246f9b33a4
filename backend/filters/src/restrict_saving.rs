//! Bypass for chats that restrict saving content.
//!
//! Photos are downloaded and uploaded again so the outbound copy carries a
//! fresh handle instead of a reference to the protected original. Every other
//! media kind is dropped from the message; only its text survives.

use async_trait::async_trait;
use relayforge_core::{EventKind, Media, Message};
use tracing::{debug, info};

use crate::filter::{FilterResult, MessageFilter};

/// Name given to re-uploaded photos whose message reports no file name.
pub use relayforge_config::defaults::DEFAULT_PHOTO_NAME;

pub struct RestrictSavingBypassFilter {
    default_photo_name: String,
}

impl RestrictSavingBypassFilter {
    pub fn new() -> Self {
        Self::with_default_photo_name(DEFAULT_PHOTO_NAME)
    }

    pub fn with_default_photo_name(name: impl Into<String>) -> Self {
        Self {
            default_photo_name: name.into(),
        }
    }

    fn photo_name(&self, message: &Message) -> String {
        message
            .file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_photo_name.as_str())
            .to_string()
    }
}

impl Default for RestrictSavingBypassFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageFilter for RestrictSavingBypassFilter {
    fn name(&self) -> &str {
        "restrict_saving_bypass"
    }

    fn restricted_content_allowed(&self) -> bool {
        true
    }

    async fn process(&self, mut message: Message, _event: EventKind) -> FilterResult {
        if message.media.is_none() || !message.is_restricted() {
            return Ok((true, message));
        }

        match &message.media {
            Some(Media::Photo(photo)) => {
                let session = message.session.clone();
                let data = session.download_media(&message).await?;
                let mut uploaded = session.upload_file(data).await?;
                uploaded.name = self.photo_name(&message);
                info!(
                    message_id = message.id,
                    photo_id = photo.id,
                    file_id = %uploaded.id,
                    name = %uploaded.name,
                    "Re-uploaded photo from restricted chat"
                );
                message.media = Some(Media::Uploaded(uploaded));
            }
            _ => {
                debug!(message_id = message.id, "Dropping media from restricted chat");
                message.media = None;
            }
        }

        Ok((message.is_forwardable(), message))
    }
}

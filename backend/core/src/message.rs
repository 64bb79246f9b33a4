use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::MediaSession;

/// A chat that a message was posted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub title: Option<String>,
    /// Set when the chat forbids saving or forwarding its content.
    pub noforwards: bool,
}

impl Chat {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            noforwards: false,
        }
    }

    pub fn restricted(id: i64) -> Self {
        Self {
            noforwards: true,
            ..Self::new(id)
        }
    }
}

/// Reference to a photo stored by the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub access_hash: i64,
    pub size: Option<u64>,
}

/// Non-photo media kinds. None of these have a re-upload path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherMediaKind {
    Document,
    Video,
    Audio,
    Voice,
    Sticker,
    WebPage,
    Poll,
    Geo,
    Contact,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherMedia {
    pub kind: OtherMediaKind,
    pub id: Option<i64>,
    pub mime_type: Option<String>,
}

impl OtherMedia {
    pub fn new(kind: OtherMediaKind) -> Self {
        Self {
            kind,
            id: None,
            mime_type: None,
        }
    }
}

/// Handle to bytes freshly uploaded through a session.
///
/// Not tied to any source message, so it can be attached to an outbound
/// copy even when the original chat restricts forwarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub parts: u32,
    pub size: usize,
    pub name: String,
}

/// Media attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Media {
    Photo(Photo),
    Other(OtherMedia),
    Uploaded(UploadedFile),
}

/// A candidate outbound message flowing through the filter chain.
#[derive(Clone)]
pub struct Message {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub chat: Option<Chat>,
    pub text: Option<String>,
    pub media: Option<Media>,
    /// File name of the current media, when the service reports one.
    pub file_name: Option<String>,
    /// Session used to fetch and upload this message's media.
    pub session: Arc<dyn MediaSession>,
}

impl Message {
    pub fn new(id: i64, session: Arc<dyn MediaSession>) -> Self {
        Self {
            id,
            date: Utc::now(),
            chat: None,
            text: None,
            media: None,
            file_name: None,
            session,
        }
    }

    pub fn with_chat(mut self, chat: Chat) -> Self {
        self.chat = Some(chat);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// True when the source chat forbids forwarding.
    pub fn is_restricted(&self) -> bool {
        self.chat.as_ref().is_some_and(|chat| chat.noforwards)
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// A message is worth relaying when it still carries media or text.
    pub fn is_forwardable(&self) -> bool {
        self.media.is_some() || self.has_text()
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id)
            .field("date", &self.date)
            .field("chat", &self.chat)
            .field("text", &self.text)
            .field("media", &self.media)
            .field("file_name", &self.file_name)
            .field("session", &self.session.name())
            .finish()
    }
}

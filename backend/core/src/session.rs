//! Media session seam.
//!
//! The remote messaging client lives outside this workspace. Rules only need
//! two of its capabilities: fetching a message's media bytes and uploading
//! bytes as a new, unattached file.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::RelayError;
use crate::message::{Media, Message, UploadedFile};

/// Upload chunk size used to report the number of parts of an upload.
const UPLOAD_PART_SIZE: usize = 512 * 1024;

/// Name given to uploads until a caller renames them.
const UNNAMED_UPLOAD: &str = "unnamed";

/// The subset of a messaging client that media rules depend on.
#[async_trait]
pub trait MediaSession: Send + Sync {
    /// Human-readable session name for logging.
    fn name(&self) -> &str;

    /// Download the binary content of the message's media.
    async fn download_media(&self, message: &Message) -> Result<Bytes>;

    /// Upload bytes and return a fresh handle not linked to any message.
    async fn upload_file(&self, data: Bytes) -> Result<UploadedFile>;
}

/// An in-process session backed by a map of photo id to bytes.
///
/// Used by tests and dry runs; it never touches the network.
#[derive(Default)]
pub struct MemorySession {
    photos: RwLock<HashMap<i64, Bytes>>,
    downloads: AtomicUsize,
    uploads: AtomicUsize,
    fail_uploads: AtomicBool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the bytes of a photo available for download.
    pub async fn store_photo(&self, photo_id: i64, data: impl Into<Bytes>) {
        let mut photos = self.photos.write().await;
        photos.insert(photo_id, data.into());
    }

    /// Make every following upload fail with a transport error.
    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaSession for MemorySession {
    fn name(&self) -> &str {
        "memory"
    }

    async fn download_media(&self, message: &Message) -> Result<Bytes> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        let Some(Media::Photo(photo)) = &message.media else {
            return Err(RelayError::MediaUnavailable(format!(
                "message {} has no downloadable photo",
                message.id
            ))
            .into());
        };

        let photos = self.photos.read().await;
        let data = photos.get(&photo.id).cloned().ok_or_else(|| {
            RelayError::MediaUnavailable(format!("photo {} not found", photo.id))
        })?;
        debug!(message_id = message.id, photo_id = photo.id, bytes = data.len(), "Downloaded photo");
        Ok(data)
    }

    async fn upload_file(&self, data: Bytes) -> Result<UploadedFile> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(RelayError::Transport("upload rejected".into()).into());
        }
        self.uploads.fetch_add(1, Ordering::SeqCst);

        let parts = data.len().div_ceil(UPLOAD_PART_SIZE).max(1) as u32;
        let file = UploadedFile {
            id: Uuid::new_v4(),
            parts,
            size: data.len(),
            name: UNNAMED_UPLOAD.to_string(),
        };
        debug!(file_id = %file.id, bytes = file.size, parts, "Uploaded file");
        Ok(file)
    }
}

pub mod error;
pub mod event;
pub mod message;
pub mod session;

pub use error::RelayError;
pub use event::EventKind;
pub use message::{
    Chat, Media, Message, OtherMedia, OtherMediaKind, Photo, UploadedFile,
};
pub use session::{MediaSession, MemorySession};

//! Remote collaborator clients.
//!
//! Both clients are thin request/response wrappers: failures map to
//! [`crate::error::ApiError`] and are handled at the call site as
//! non-blocking notices. Local state is never written from here.

pub mod calendar;
pub mod music;

pub use calendar::{CalendarClient, RemoteEvent};
pub use music::{MusicClient, Playback, Playlist};

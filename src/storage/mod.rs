//! Durable key/value storage for UI state.
//!
//! [`KvStore`] is a small string-to-string store backed by a single JSON
//! file, the terminal equivalent of browser localStorage. [`PersistedField`]
//! sits on top of it and keeps one typed value mirrored to one key,
//! write-through on every change.

mod kv;
mod persisted;

pub use kv::{KvStore, StorageError};
pub use persisted::{Codec, CodecError, PersistedField};

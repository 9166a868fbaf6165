use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::storage::kv::KvStore;

/// Failure inside a serialize/deserialize function.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CodecError(Box<dyn std::error::Error + Send + Sync>);

impl CodecError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

/// Pair of serialize/deserialize functions for a persisted value.
pub struct Codec<T> {
    pub encode: fn(&T) -> Result<String, CodecError>,
    pub decode: fn(&str) -> Result<T, CodecError>,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Codec<T> {}

impl<T: Serialize + DeserializeOwned> Codec<T> {
    /// The default textual encoding: JSON via serde_json.
    pub fn json() -> Self {
        Self {
            encode: encode_json::<T>,
            decode: decode_json::<T>,
        }
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::new)
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::new)
}

/// A typed value mirrored to one key of a [`KvStore`].
///
/// Reads and writes behave like plain in-memory state, except that every
/// change is committed to the store under the current key, so the value
/// survives restarts. Persistence is best-effort: a failed write is logged
/// and swallowed, never surfaced to the caller.
pub struct PersistedField<T> {
    store: KvStore,
    key: String,
    /// Key of the last commit. `None` until the first commit, so the
    /// first run never attempts to remove an entry that was never written.
    prev_key: Option<String>,
    value: T,
    codec: Codec<T>,
}

impl<T: Serialize + DeserializeOwned> PersistedField<T> {
    /// Create a field with the default JSON codec.
    ///
    /// If the store holds a decodable entry under `key`, that becomes the
    /// initial value and `default` is never invoked. A corrupt entry is
    /// removed and `default` supplies the value instead.
    pub fn new(store: KvStore, key: impl Into<String>, default: impl FnOnce() -> T) -> Self {
        Self::with_codec(store, key, default, Codec::json())
    }
}

impl<T> PersistedField<T> {
    /// Create a field with explicit serialize/deserialize functions.
    pub fn with_codec(
        mut store: KvStore,
        key: impl Into<String>,
        default: impl FnOnce() -> T,
        codec: Codec<T>,
    ) -> Self {
        let key = key.into();

        let decoded = store.get(&key).map(|raw| (codec.decode)(raw));
        let value = match decoded {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                debug!(key = %key, error = %err, "discarding corrupt stored entry");
                if let Err(err) = store.remove(&key) {
                    warn!(key = %key, error = %err, "failed to discard corrupt entry");
                }
                default()
            }
            None => default(),
        };

        let mut field = Self {
            store,
            key,
            prev_key: None,
            value,
            codec,
        };
        field.commit();
        field
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Replace the value and commit it under the current key.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.commit();
    }

    /// Move the field to a new key.
    ///
    /// The entry under the old key is removed before the value is written
    /// under the new one, so no orphaned entries accumulate.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.commit();
    }

    fn commit(&mut self) {
        if let Some(prev) = self.prev_key.as_deref() {
            if prev != self.key {
                let stale = prev.to_string();
                if let Err(err) = self.store.remove(&stale) {
                    warn!(key = %stale, error = %err, "failed to remove entry under stale key");
                }
            }
        }

        match (self.codec.encode)(&self.value) {
            Ok(raw) => {
                if let Err(err) = self.store.set(&self.key, raw) {
                    warn!(key = %self.key, error = %err, "failed to persist value");
                }
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode value");
            }
        }

        self.prev_key = Some(self.key.clone());
    }
}

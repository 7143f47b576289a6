//! Codec between a [`Playbook`] and its storage slot.
//!
//! Persistence is all-or-nothing in both directions: `save` writes the whole
//! document on every call, and `load` discards the whole document if any part
//! of it fails to decode. There is no partial recovery; the data is cheap to
//! re-create, so corrupt input degrades to a fresh default rather than a
//! half-restored state.

use crate::models::Playbook;
use crate::storage::Storage;

/// The single slot the document lives under. Versioned so a future breaking
/// format change can move to a new key and leave old documents untouched.
pub const STORAGE_KEY: &str = "influence_playbook_v1";

/// Persistence adapter: holds the injected storage handle and the fixed key.
///
/// The adapter keeps no copy of the document; it is a pass-through codec.
#[derive(Clone)]
pub struct Persistence {
    storage: Storage,
    key: &'static str,
}

impl Persistence {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            key: STORAGE_KEY,
        }
    }

    /// Read the current document, or the default if the slot is empty or its
    /// contents fail to decode. Never fails past this boundary.
    pub fn load(&self) -> Playbook {
        let raw = match self.storage.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Playbook::initialize(),
            Err(e) => {
                tracing::warn!("storage read failed, starting fresh: {e:#}");
                return Playbook::initialize();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(book) => book,
            Err(e) => {
                tracing::warn!("discarding undecodable playbook document: {e}");
                Playbook::initialize()
            }
        }
    }

    /// Write the document, overwriting any prior value. Best effort: a
    /// rejected write is logged and swallowed so a full disk can never
    /// interrupt the session.
    pub fn save(&self, book: &Playbook) {
        let raw = match serde_json::to_string(book) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to encode playbook, skipping save: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set(self.key, &raw) {
            tracing::warn!("storage write failed, changes not persisted: {e:#}");
        }
    }
}

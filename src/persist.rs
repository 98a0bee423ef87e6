//! Persistence boundary: load the board on mount, save after each commit.
//!
//! Neither call sits on the gesture hot path — live drag/rotate/resize
//! previews never touch storage; hosts save when a commit [`Action`] comes
//! back from the engine.
//!
//! [`Action`]: crate::engine::Action

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::sync::Mutex;

use crate::error::BoardError;
use crate::item::PinnedItem;

/// Storage boundary for board contents.
pub trait BoardPersistence {
    /// Fetch the full board contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] when the backend is unavailable or
    /// the stored snapshot cannot be decoded.
    fn load_board(&self) -> Result<Vec<PinnedItem>, BoardError>;

    /// Replace the stored board contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] when the backend rejects the write.
    fn save_board(&self, items: &[PinnedItem]) -> Result<(), BoardError>;
}

/// Backend that stores nothing and always loads an empty board.
#[derive(Debug, Default)]
pub struct MockPersistence;

impl BoardPersistence for MockPersistence {
    fn load_board(&self) -> Result<Vec<PinnedItem>, BoardError> {
        Ok(Vec::new())
    }

    fn save_board(&self, _items: &[PinnedItem]) -> Result<(), BoardError> {
        Ok(())
    }
}

/// In-memory backend that round-trips the board through its JSON wire form.
/// Used by tests and single-session hosts.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    snapshot: Mutex<Option<String>>,
}

impl BoardPersistence for InMemoryPersistence {
    fn load_board(&self) -> Result<Vec<PinnedItem>, BoardError> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| BoardError::Storage("snapshot lock poisoned".into()))?;
        match guard.as_ref() {
            Some(json) => serde_json::from_str(json).map_err(|e| BoardError::Storage(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn save_board(&self, items: &[PinnedItem]) -> Result<(), BoardError> {
        let json = serde_json::to_string(items).map_err(|e| BoardError::Storage(e.to_string()))?;
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| BoardError::Storage("snapshot lock poisoned".into()))?;
        *guard = Some(json);
        Ok(())
    }
}

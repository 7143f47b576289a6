//! The playbook store: owns the live document and its persistence.
//!
//! Every mutating method applies one state transition from
//! [`Playbook`](crate::models::Playbook) and then re-persists the whole
//! document, mirroring the save-after-every-change discipline the rest of
//! the application relies on. The store itself holds no other state; callers
//! read through [`playbook`](PlaybookStore::playbook) and re-render from it.

use crate::catalog;
use crate::error::StoreError;
use crate::models::{Playbook, PlaybookItem};
use crate::persist::Persistence;
use crate::storage::Storage;

pub struct PlaybookStore {
    book: Playbook,
    persist: Persistence,
}

impl PlaybookStore {
    /// Materialize the store from storage: the prior document if one decodes,
    /// otherwise a fresh default.
    pub fn open(storage: Storage) -> Self {
        let persist = Persistence::new(storage);
        let book = persist.load();
        Self { book, persist }
    }

    pub fn playbook(&self) -> &Playbook {
        &self.book
    }

    pub fn rename(&mut self, name: &str) {
        self.book.rename(name);
        self.persist.save(&self.book);
    }

    /// Adopt a tactic by catalog id.
    ///
    /// Unlike the pure `Playbook::add_item`, this validates the id against
    /// the catalog: the store accepts arbitrary caller input, and a dangling
    /// reference would render as a hole in every later view. Returns
    /// `Ok(false)` if the tactic was already adopted.
    pub fn add_item(&mut self, tactic_id: &str) -> Result<bool, StoreError> {
        if catalog::find_tactic(tactic_id).is_none() {
            return Err(StoreError::UnknownTactic(tactic_id.to_string()));
        }
        let added = self.book.add_item(tactic_id);
        if added {
            self.persist.save(&self.book);
        }
        Ok(added)
    }

    /// Replace the item at `index`. The caller clamps field constraints
    /// (priority range) before calling; out of range is an error.
    pub fn update_item(&mut self, index: usize, next: PlaybookItem) -> Result<(), StoreError> {
        self.book.update_item(index, next)?;
        self.persist.save(&self.book);
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> bool {
        let removed = self.book.remove_item(index);
        if removed {
            self.persist.save(&self.book);
        }
        removed
    }

    pub fn add_checklist_entry(&mut self, text: &str) -> bool {
        let added = self.book.add_checklist_entry(text);
        if added {
            self.persist.save(&self.book);
        }
        added
    }

    pub fn remove_checklist_entry(&mut self, index: usize) -> bool {
        let removed = self.book.remove_checklist_entry(index);
        if removed {
            self.persist.save(&self.book);
        }
        removed
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::Principle;

/// Default priority for a freshly adopted tactic (middle of the 1..=5 range).
pub const DEFAULT_PRIORITY: u8 = 3;

/// One tactic the user has adopted, plus their plan for applying it.
///
/// The item does not own the tactic; `tactic_id` references the catalog. At
/// most one item per distinct tactic id exists in a playbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookItem {
    pub tactic_id: String,
    /// Free text: a concrete move, metric, or ritual the user wrote.
    pub note: String,
    /// Persuasion principles paired with this tactic. Set semantics, so
    /// duplicates are impossible by construction and order is irrelevant.
    pub principle_keys: BTreeSet<Principle>,
    /// Invariant: 1 ≤ priority ≤ 5. Enforced by the input layer, not here.
    pub priority: u8,
    /// Absent in older exports, so decoding defaults it to false.
    #[serde(default)]
    pub done: bool,
}

impl PlaybookItem {
    /// A freshly adopted tactic: empty note, no principles, middling priority.
    pub fn new(tactic_id: impl Into<String>) -> Self {
        Self {
            tactic_id: tactic_id.into(),
            note: String::new(),
            principle_keys: BTreeSet::new(),
            priority: DEFAULT_PRIORITY,
            done: false,
        }
    }
}

/// The root persisted aggregate: everything the user authored.
///
/// `items` and `checklist` are insertion-ordered and that order is meaningful
/// (it is the display order), so it must survive persistence round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playbook {
    pub name: String,
    pub items: Vec<PlaybookItem>,
    pub checklist: Vec<String>,
}

impl Playbook {
    /// The default document: used on first run and whenever a persisted
    /// document fails to decode.
    pub fn initialize() -> Self {
        Self {
            name: "My Playbook".to_string(),
            items: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Replace the display name verbatim. Any string is accepted, including
    /// empty; no trimming.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adopt a tactic. Returns false without changing anything if the tactic
    /// is already present (a double-click must never duplicate an item).
    ///
    /// The id is not checked against the catalog here; callers that accept
    /// arbitrary input validate first (see `PlaybookStore::add_item`).
    pub fn add_item(&mut self, tactic_id: &str) -> bool {
        if self.items.iter().any(|it| it.tactic_id == tactic_id) {
            return false;
        }
        self.items.push(PlaybookItem::new(tactic_id));
        true
    }

    /// Replace the item at `index` wholesale.
    ///
    /// Out of range is an error, not a no-op: a consistent caller renders
    /// from this playbook and can only produce indices that exist, so a bad
    /// index means a defect upstream. Field constraints (priority range) are
    /// the input layer's job and are not re-checked here.
    pub fn update_item(&mut self, index: usize, next: PlaybookItem) -> Result<(), StoreError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = next;
                Ok(())
            }
            None => Err(StoreError::IndexOutOfRange { index, len }),
        }
    }

    /// Remove the item at `index`, shifting later items left. Out of range is
    /// a no-op (returns false) — intentionally lenient, unlike `update_item`.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a trimmed checklist entry. Whitespace-only text is a no-op.
    pub fn add_checklist_entry(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.checklist.push(trimmed.to_string());
        true
    }

    /// Remove a checklist entry by position. Out of range is a no-op.
    pub fn remove_checklist_entry(&mut self, index: usize) -> bool {
        if index < self.checklist.len() {
            self.checklist.remove(index);
            true
        } else {
            false
        }
    }

    /// How many adopted items are marked done.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|it| it.done).count()
    }
}

use thiserror::Error;

/// Failures the playbook store reports to its caller.
///
/// Expected interaction noise — adopting an already-adopted tactic, removing
/// an index that no longer exists, adding a blank checklist line — is defined
/// as a no-op and never reaches this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// `update_item` was called with an index the current playbook does not
    /// have. Indicates a defect in the calling layer, not user error.
    #[error("item index {index} out of range (playbook has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The tactic id does not exist in the catalog.
    #[error("unknown tactic: {0}")]
    UnknownTactic(String),
}

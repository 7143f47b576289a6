//! Playbook: a personal catalog of influence tactics.
//!
//! The user browses a fixed catalog of tactics ("levers"), adopts some into a
//! personal playbook, annotates each with a plan, priority, and persuasion
//! principles, and keeps a daily practice checklist alongside. Everything the
//! user authors lives in a single [`models::Playbook`] document persisted to
//! one key-value slot.
//!
//! Layering, leaf first:
//!
//! - [`catalog`]: the immutable compiled-in content tables.
//! - [`storage`]: the string-keyed slot store (SQLite-backed).
//! - [`persist`]: codec between a `Playbook` and its storage slot.
//! - [`store`]: the controller that owns the live document and re-persists
//!   after every mutation.
//! - [`export`]: pretty-printed JSON projection for sharing.

pub mod catalog;
pub mod error;
pub mod export;
pub mod models;
pub mod persist;
pub mod storage;
pub mod store;

//! Domain models for Playbook.
//!
//! # Core Concepts
//!
//! ## Static Entities
//!
//! - [`Tactic`]: one influence technique from the compiled-in catalog,
//!   identified by a short string id and tagged with a [`TacticGroup`].
//! - [`Principle`]: one of Cialdini's six persuasion categories, usable to
//!   tag adopted tactics.
//!
//! ## Persisted Entities
//!
//! - [`Playbook`]: the root aggregate the user owns — a display name, the
//!   adopted items in insertion order, and the daily checklist.
//! - [`PlaybookItem`]: one adopted tactic plus the user's plan for it.
//!
//! The playbook is the only mutable state in the application; every
//! state-transition operation lives on [`Playbook`] and is synchronous,
//! deterministic, and total.

mod playbook;
mod tactic;

pub use playbook::*;
pub use tactic::*;

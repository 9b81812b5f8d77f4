//! Storage layer: the canonical entry collection and everything derived from it.
//!
//! Entries live in memory only; the store is reseeded with sample entries on every
//! launch.
//!
//! # Modules
//!
//! - `entry_store`: [`EntryStore`], owner of entries, drafts and the pending-delete slot
//! - `delete`: two-phase delete workflow and blank-draft discard
//! - `projection`: pure filter + sort pipeline producing the visible list
//! - `notify`: change notifications for subscribers
//! - `seed`: embedded sample entries

pub mod delete;
pub mod entry_store;
pub mod notify;
pub mod projection;
pub mod seed;

pub use delete::DeletePhase;
pub use entry_store::{EntryStore, SaveOutcome};
pub use notify::{StoreChange, SubscriptionId};
pub use projection::{match_range, normalize_query, project, sort_entries};
pub use seed::sample_entries;

//! Designer draft store: the state behind the nameplate editor.
//!
//! This module has **zero database dependencies**. It models the editor as
//! an explicit state container ([`DraftStore`]) holding zero-or-more draft
//! configurations and one active draft id, with pure transition functions
//! that are unit-testable without any I/O. The API layer consumes only the
//! theme catalog and the submission validation; the store itself backs the
//! client editing flow.

mod draft;
mod save_report;
mod store;
pub mod themes;

pub use draft::{
    DraftId, DraftPatch, DraftSeed, NameplateDraft, DEFAULT_ADDRESS_SIZE,
    DEFAULT_HOUSE_NAME_SIZE, DEFAULT_OWNER_NAME_SIZE, DEFAULT_TEXT_COLOR,
};
pub use save_report::{DraftSaveResult, SaveOutcome, SaveReport};
pub use store::{validate, DraftStore};

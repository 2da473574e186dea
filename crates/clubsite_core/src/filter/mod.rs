//! Pure selection and grouping over catalog rosters.
//!
//! # Responsibility
//! - Restrict a roster to one category (or all) and a search query.
//! - Partition visible entries into render-ready category sections.
//! - Classify events into the three page tabs.
//!
//! # Invariants
//! - Selection never reorders entries and never mutates inputs.
//! - An unknown category id yields an empty selection, not an error.

pub mod engine;
pub mod events;

pub use engine::{group_by_category, select_visible, CategoryBucket, CategorySelector};
pub use events::{select_tab, EventTab};

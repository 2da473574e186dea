//! Seeded content catalog: embed, parse, validate, share.
//!
//! # Responsibility
//! - Turn the authored seed JSON into validated typed rosters.
//! - Enforce cross-record invariants before any page logic runs.
//!
//! # Invariants
//! - A `Catalog` value is fully validated; consumers never re-check.
//! - Seed data is embedded at compile time and parsed at most once.

use crate::model::EventStatus;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod seed;
mod store;

pub use seed::{builtin_catalog, load_catalog};
pub use store::{Catalog, EventBook, Roster};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    /// Seed JSON failed to parse into the typed model.
    Seed {
        section: &'static str,
        source: serde_json::Error,
    },
    /// Two categories in one roster share an id.
    DuplicateCategory { section: &'static str, id: String },
    /// A declared category collides with the computed "all" key.
    ReservedCategory { section: &'static str, id: String },
    /// Two entries in one roster share an id.
    DuplicateEntity { section: &'static str, id: String },
    /// An entry references a category the roster does not declare.
    UnknownCategory {
        section: &'static str,
        entity_id: String,
        category_key: String,
    },
    /// A project slug is not a lowercase hyphenated handle.
    InvalidSlug { entity_id: String, slug: String },
    /// Two projects share a URL slug.
    DuplicateSlug { slug: String },
    /// An event's status tag contradicts the section listing it.
    MisplacedEvent {
        entity_id: String,
        expected: EventStatus,
        found: EventStatus,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seed { section, source } => write!(f, "invalid {section} seed: {source}"),
            Self::DuplicateCategory { section, id } => {
                write!(f, "duplicate category id `{id}` in {section} seed")
            }
            Self::ReservedCategory { section, id } => write!(
                f,
                "category id `{id}` in {section} seed collides with the computed \"all\" key"
            ),
            Self::DuplicateEntity { section, id } => {
                write!(f, "duplicate entry id `{id}` in {section} seed")
            }
            Self::UnknownCategory {
                section,
                entity_id,
                category_key,
            } => write!(
                f,
                "entry `{entity_id}` in {section} seed references unknown category `{category_key}`"
            ),
            Self::InvalidSlug { entity_id, slug } => {
                write!(f, "project `{entity_id}` has malformed slug `{slug}`")
            }
            Self::DuplicateSlug { slug } => write!(f, "duplicate project slug `{slug}`"),
            Self::MisplacedEvent {
                entity_id,
                expected,
                found,
            } => write!(
                f,
                "event `{entity_id}` is listed as {} but tagged {}",
                expected.as_key(),
                found.as_key()
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seed { source, .. } => Some(source),
            _ => None,
        }
    }
}

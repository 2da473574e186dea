//! Validated catalog containers.
//!
//! # Responsibility
//! - Hold each roster together with its category declarations.
//! - Reject seed data that violates referential invariants.
//!
//! # Invariants
//! - Every entry's category key resolves to a declared category.
//! - Ids are unique per roster; project slugs are unique and well formed.
//! - Construction is the only mutation point; accessors hand out borrows.

use super::{CatalogError, CatalogResult};
use crate::model::{
    AlumniMember, CatalogEntity, Category, EventItem, EventStatus, Project, TeamMember,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// One roster plus the categories that partition it, in authoring order.
#[derive(Debug, Clone)]
pub struct Roster<T> {
    categories: Vec<Category>,
    entries: Vec<T>,
}

impl<T: CatalogEntity> Roster<T> {
    /// Builds a roster, rejecting duplicate ids, the reserved "all"
    /// category key and dangling category references.
    pub fn new(
        section: &'static str,
        categories: Vec<Category>,
        entries: Vec<T>,
    ) -> CatalogResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if category.id.trim().eq_ignore_ascii_case("all") {
                return Err(CatalogError::ReservedCategory {
                    section,
                    id: category.id.clone(),
                });
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    section,
                    id: category.id.clone(),
                });
            }
        }

        let mut entity_ids = HashSet::new();
        for entry in &entries {
            if !entity_ids.insert(entry.entity_id()) {
                return Err(CatalogError::DuplicateEntity {
                    section,
                    id: entry.entity_id().to_string(),
                });
            }
            if !category_ids.contains(entry.category_key()) {
                return Err(CatalogError::UnknownCategory {
                    section,
                    entity_id: entry.entity_id().to_string(),
                    category_key: entry.category_key().to_string(),
                });
            }
        }

        Ok(Self {
            categories,
            entries,
        })
    }

    /// Declared categories in authoring order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Entries in authoring order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Looks up a declared category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

/// The two halves of the events page, validated together.
#[derive(Debug, Clone)]
pub struct EventBook {
    upcoming: Vec<EventItem>,
    past: Vec<EventItem>,
}

impl EventBook {
    /// Builds the book, rejecting duplicate ids across both halves and
    /// status tags that contradict the listing section.
    pub fn new(upcoming: Vec<EventItem>, past: Vec<EventItem>) -> CatalogResult<Self> {
        let mut ids = HashSet::new();
        let sections = [
            ("events.upcoming", EventStatus::Upcoming, &upcoming),
            ("events.past", EventStatus::Completed, &past),
        ];
        for (section, expected, entries) in sections {
            for event in entries {
                if !ids.insert(event.id.as_str()) {
                    return Err(CatalogError::DuplicateEntity {
                        section,
                        id: event.id.clone(),
                    });
                }
                if event.status != expected {
                    return Err(CatalogError::MisplacedEvent {
                        entity_id: event.id.clone(),
                        expected,
                        found: event.status,
                    });
                }
            }
        }

        Ok(Self { upcoming, past })
    }

    /// Upcoming events in authoring order.
    pub fn upcoming(&self) -> &[EventItem] {
        &self.upcoming
    }

    /// Past events in authoring order.
    pub fn past(&self) -> &[EventItem] {
        &self.past
    }
}

/// Everything the site renders, validated as one unit.
#[derive(Debug, Clone)]
pub struct Catalog {
    team: Roster<TeamMember>,
    alumni: Roster<AlumniMember>,
    events: EventBook,
    projects: Vec<Project>,
}

impl Catalog {
    /// Assembles the catalog, validating the project list in passing.
    pub fn new(
        team: Roster<TeamMember>,
        alumni: Roster<AlumniMember>,
        events: EventBook,
        projects: Vec<Project>,
    ) -> CatalogResult<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for project in &projects {
            if !ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateEntity {
                    section: "projects",
                    id: project.id.clone(),
                });
            }
            if !SLUG_RE.is_match(&project.slug) {
                return Err(CatalogError::InvalidSlug {
                    entity_id: project.id.clone(),
                    slug: project.slug.clone(),
                });
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: project.slug.clone(),
                });
            }
        }

        Ok(Self {
            team,
            alumni,
            events,
            projects,
        })
    }

    pub fn team(&self) -> &Roster<TeamMember> {
        &self.team
    }

    pub fn alumni(&self) -> &Roster<AlumniMember> {
        &self.alumni
    }

    pub fn events(&self) -> &EventBook {
        &self.events
    }

    /// Projects in authoring order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

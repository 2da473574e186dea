//! Embedded seed data and one-time catalog loading.
//!
//! # Responsibility
//! - Embed the authored seed JSON into the binary.
//! - Parse and validate it into the shared `Catalog`.
//!
//! # Invariants
//! - `builtin_catalog` parses at most once per process.
//! - A failed load is reported on every call, never cached as success.

use super::store::{Catalog, EventBook, Roster};
use super::{CatalogError, CatalogResult};
use crate::model::{AlumniMember, Category, EventItem, Project, TeamMember};
use log::{error, info};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Instant;

const TEAM_SEED: &str = include_str!("../../assets/seed/team.json");
const ALUMNI_SEED: &str = include_str!("../../assets/seed/alumni.json");
const EVENTS_SEED: &str = include_str!("../../assets/seed/events.json");
const PROJECTS_SEED: &str = include_str!("../../assets/seed/projects.json");

#[derive(Debug, Deserialize)]
struct RosterSeed<T> {
    categories: Vec<Category>,
    members: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EventsSeed {
    upcoming: Vec<EventItem>,
    past: Vec<EventItem>,
}

#[derive(Debug, Deserialize)]
struct ProjectsSeed {
    projects: Vec<Project>,
}

fn parse_section<T: DeserializeOwned>(section: &'static str, raw: &str) -> CatalogResult<T> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Seed { section, source })
}

fn build_catalog() -> CatalogResult<Catalog> {
    let team: RosterSeed<TeamMember> = parse_section("team", TEAM_SEED)?;
    let alumni: RosterSeed<AlumniMember> = parse_section("alumni", ALUMNI_SEED)?;
    let events: EventsSeed = parse_section("events", EVENTS_SEED)?;
    let projects: ProjectsSeed = parse_section("projects", PROJECTS_SEED)?;

    let team = Roster::new("team", team.categories, team.members)?;
    let alumni = Roster::new("alumni", alumni.categories, alumni.members)?;
    let events = EventBook::new(events.upcoming, events.past)?;
    Catalog::new(team, alumni, events, projects.projects)
}

/// Parses and validates the embedded seed into a fresh catalog.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration and status.
pub fn load_catalog() -> CatalogResult<Catalog> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start");

    match build_catalog() {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok duration_ms={} team={} alumni={} events={} projects={}",
                started_at.elapsed().as_millis(),
                catalog.team().entries().len(),
                catalog.alumni().entries().len(),
                catalog.events().upcoming().len() + catalog.events().past().len(),
                catalog.projects().len()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error duration_ms={} error_code=catalog_invalid error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Returns the process-wide shared catalog, loading it on first use.
pub fn builtin_catalog() -> CatalogResult<&'static Catalog> {
    CATALOG.get_or_try_init(load_catalog)
}

//! Core domain logic for the club site content catalog.
//! This crate is the single source of truth for filter invariants.

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::{builtin_catalog, load_catalog, Catalog, CatalogError, CatalogResult, EventBook, Roster};
pub use filter::{
    group_by_category, select_tab, select_visible, CategoryBucket, CategorySelector, EventTab,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::{
    AlumniMember, CatalogEntity, Category, EventDate, EventItem, EventKind, EventStatus, Project,
    ProjectStatus, SocialLinks, SocialPlatform, TeamMember,
};
pub use service::CatalogService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

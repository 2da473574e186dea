//! Page-view facade over the catalog and the filter passes.
//!
//! # Responsibility
//! - Provide one call per page view (team, alumni, events, projects).
//! - Resolve category ids to display labels for section headings.
//!
//! # Invariants
//! - Every method is a pure read; repeated calls with equal inputs
//!   return equal results.

use crate::catalog::Catalog;
use crate::filter::{group_by_category, select_tab, select_visible};
use crate::filter::{CategoryBucket, CategorySelector, EventTab};
use crate::model::{AlumniMember, Category, EventItem, Project, TeamMember};

/// Read-only facade the site's pages query.
pub struct CatalogService<'c> {
    catalog: &'c Catalog,
}

impl<'c> CatalogService<'c> {
    /// Creates a service borrowing the provided catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Team page sections for one filter state, in team declaration
    /// order, omitting teams with no visible member.
    pub fn team_sections(
        &self,
        selector: &CategorySelector,
        query: &str,
    ) -> Vec<CategoryBucket<'c, TeamMember>> {
        let roster = self.catalog.team();
        let visible = select_visible(roster.entries(), selector, query);
        group_by_category(roster.categories(), &visible)
    }

    /// Alumni page sections for one filter state, in batch declaration
    /// order, omitting batches with no visible member.
    pub fn alumni_sections(
        &self,
        selector: &CategorySelector,
        query: &str,
    ) -> Vec<CategoryBucket<'c, AlumniMember>> {
        let roster = self.catalog.alumni();
        let visible = select_visible(roster.entries(), selector, query);
        group_by_category(roster.categories(), &visible)
    }

    /// Events visible under one page tab.
    pub fn events(&self, tab: EventTab) -> Vec<&'c EventItem> {
        select_tab(self.catalog.events(), tab)
    }

    /// Projects visible for one filter state. The selector admits
    /// lifecycle keys ("active", "completed", "on-hold", "planned").
    pub fn projects(&self, selector: &CategorySelector, query: &str) -> Vec<&'c Project> {
        select_visible(self.catalog.projects(), selector, query)
    }

    /// Resolves a project detail page by URL slug.
    pub fn project_by_slug(&self, slug: &str) -> Option<&'c Project> {
        self.catalog
            .projects()
            .iter()
            .find(|project| project.slug == slug)
    }

    /// Team category metadata by id, for heading labels.
    pub fn team_category(&self, id: &str) -> Option<&'c Category> {
        self.catalog.team().category(id)
    }

    /// Alumni batch metadata by id, for heading labels.
    pub fn alumni_category(&self, id: &str) -> Option<&'c Category> {
        self.catalog.alumni().category(id)
    }
}

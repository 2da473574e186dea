//! Project portfolio records.
//!
//! # Responsibility
//! - Define the project roster record and its lifecycle states.
//!
//! # Invariants
//! - `slug` is the public URL handle and is validated at catalog load.
//! - Projects are bucketed by lifecycle status, not a declared category.

use crate::model::CatalogEntity;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Planned,
}

impl ProjectStatus {
    /// Kebab-case wire tag, doubling as the project's category key.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Planned => "planned",
        }
    }
}

/// One entry of the project portfolio, with enough detail to render
/// both the card grid and the per-project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable authoring-time id ("p1").
    pub id: String,
    /// URL handle ("4-wheeler-automation"). Lowercase alphanumeric
    /// runs joined by single hyphens.
    pub slug: String,
    pub title: String,
    /// Card-length summary.
    pub description: String,
    /// Detail-page body text.
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Relative asset path of the cover image.
    pub image: String,
    pub github_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Names of the members who built it.
    #[serde(default)]
    pub team: Vec<String>,
    pub status: ProjectStatus,
    /// Authoring-time month label ("2023-01").
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
}

impl CatalogEntity for Project {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn category_key(&self) -> &str {
        self.status.as_key()
    }

    /// Title, summary and tags, matching the projects page search box.
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

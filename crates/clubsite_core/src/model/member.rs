//! Team and alumni member records.
//!
//! # Responsibility
//! - Define the two people-shaped rosters rendered by the site.
//! - Declare which attributes free-text search may match against.
//!
//! # Invariants
//! - `team` / `batch` hold the owning category id, never a display name.
//! - Search never matches social links or image paths.

use crate::model::social::SocialLinks;
use crate::model::CatalogEntity;
use serde::{Deserialize, Serialize};

/// Current member of the club, grouped by functional team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Stable authoring-time id ("b3", "w1").
    pub id: String,
    pub name: String,
    pub role: String,
    /// Owning category id (functional team, e.g. "board", "web").
    pub team: String,
    /// Academic department display label ("ETCE").
    pub department: String,
    /// Relative asset path of the profile photo.
    pub image: String,
    pub bio: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CatalogEntity for TeamMember {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn category_key(&self) -> &str {
        &self.team
    }

    /// Name, role and skill tags, matching the team page search box.
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

/// Former member, grouped by graduating batch year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniMember {
    /// Stable authoring-time id ("alum1").
    pub id: String,
    pub name: String,
    /// Role held while in the club ("Former President").
    pub role: String,
    /// Owning category id (batch year, e.g. "2023").
    pub batch: String,
    pub image: String,
    pub bio: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Present-day position, when known.
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl CatalogEntity for AlumniMember {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn category_key(&self) -> &str {
        &self.batch
    }

    /// Alumni search additionally matches the bio, mirroring the
    /// alumni page behavior.
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str(), self.bio.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

//! Category metadata for roster partitioning.

use serde::{Deserialize, Serialize};

/// Named, mutually exclusive partition of a roster.
///
/// The `"all"` pseudo-category is computed by the filter engine and is
/// never declared here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key referenced by each member's category field.
    pub id: String,
    /// Display name ("Board", "2023", "Active").
    pub label: String,
    /// Optional blurb rendered under the section heading.
    #[serde(default)]
    pub description: Option<String>,
}

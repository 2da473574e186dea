//! Social link records keyed by a closed platform enumeration.
//!
//! # Responsibility
//! - Give the original "any subset of platforms" shape a sum-type-safe
//!   form: unknown platform tags are rejected at seed parse time.
//!
//! # Invariants
//! - Iteration order is deterministic (platform declaration order).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of platforms a profile may link out to.
///
/// Wire tags are lowercase platform names, matching the keys used by
/// the site's seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Twitter,
    Email,
    Youtube,
    Instagram,
    Medium,
    Behance,
    Dribbble,
    Spotify,
}

impl SocialPlatform {
    /// Lowercase wire tag for this platform.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Email => "email",
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
            Self::Medium => "medium",
            Self::Behance => "behance",
            Self::Dribbble => "dribbble",
            Self::Spotify => "spotify",
        }
    }
}

/// Mapping from platform to URL (or address, for `email`).
///
/// Any subset of platforms may be present. A `BTreeMap` keeps render
/// order stable across calls.
pub type SocialLinks = BTreeMap<SocialPlatform, String>;

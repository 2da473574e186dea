//! Event records and their calendar dates.
//!
//! # Responsibility
//! - Define the event roster record and its closed kind/status sets.
//! - Give "date or TBD" a total order usable by the tab merge.
//!
//! # Invariants
//! - `EventDate` orders every scheduled date above `Tbd`, so a
//!   descending sort puts undated events last.
//! - The wire form is an ISO `YYYY-MM-DD` string or the literal "TBD".

use crate::model::CatalogEntity;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// What shape of gathering an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Workshop,
    Hackathon,
    Talk,
    Meetup,
}

impl EventKind {
    /// Lowercase wire tag for this kind.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Hackathon => "hackathon",
            Self::Talk => "talk",
            Self::Meetup => "meetup",
        }
    }
}

/// Which half of the events page a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

impl EventStatus {
    /// Lowercase wire tag, doubling as the event's category key.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }
}

/// Calendar date of an event, or a publicly announced "TBD".
///
/// `Tbd` sorts below every scheduled date. The combined tab sorts
/// descending, so undated events always land at the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventDate {
    Tbd,
    Scheduled(Date),
}

/// Rejected event date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDateParseError {
    input: String,
}

impl fmt::Display for EventDateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid event date {:?}: expected YYYY-MM-DD or \"TBD\"",
            self.input
        )
    }
}

impl std::error::Error for EventDateParseError {}

impl EventDate {
    /// Parse the wire form: an ISO `YYYY-MM-DD` date or the literal
    /// "TBD" (case-insensitive, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Result<Self, EventDateParseError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("tbd") {
            return Ok(Self::Tbd);
        }
        Date::parse(trimmed, ISO_DATE)
            .map(Self::Scheduled)
            .map_err(|_| EventDateParseError {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tbd => f.write_str("TBD"),
            Self::Scheduled(date) => {
                let rendered = date.format(ISO_DATE).map_err(|_| fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Single workshop, talk, hackathon or meetup listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    /// Stable authoring-time id ("ev-aiml-workshop").
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: EventDate,
    /// Human wall-clock slot ("10:00 AM - 4:00 PM"), when announced.
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    pub kind: EventKind,
    /// Relative asset path of the banner image.
    pub image: String,
    #[serde(default)]
    pub registration_link: Option<String>,
    /// Expected or recorded headcount.
    #[serde(default)]
    pub attendees: u32,
    pub status: EventStatus,
}

impl CatalogEntity for EventItem {
    fn entity_id(&self) -> &str {
        &self.id
    }

    /// Events are bucketed by lifecycle, not by a declared category.
    fn category_key(&self) -> &str {
        self.status.as_key()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }
}

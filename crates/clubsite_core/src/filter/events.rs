//! Events page tab classification.
//!
//! # Responsibility
//! - Map a UI tab value onto one of the three event views.
//! - Produce each view's entries in its documented order.
//!
//! # Invariants
//! - Upcoming and past views keep authoring order untouched.
//! - The combined view is date-descending; undated events sort last.
//! - Ties keep upcoming entries ahead of past ones.

use crate::catalog::EventBook;
use crate::model::EventItem;

/// The three views of the events page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTab {
    #[default]
    Upcoming,
    Past,
    All,
}

impl EventTab {
    /// Parses a UI tab value. Unrecognized values fall back to the
    /// default tab, matching how the page opens.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("past") {
            Self::Past
        } else if trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Upcoming
        }
    }
}

/// Returns the events visible under one tab.
///
/// The combined tab merges both halves and sorts by date descending
/// with a stable sort, so same-date entries keep their upcoming-first
/// relative order and undated entries trail the list.
pub fn select_tab(book: &EventBook, tab: EventTab) -> Vec<&EventItem> {
    match tab {
        EventTab::Upcoming => book.upcoming().iter().collect(),
        EventTab::Past => book.past().iter().collect(),
        EventTab::All => {
            let mut merged: Vec<&EventItem> =
                book.upcoming().iter().chain(book.past().iter()).collect();
            merged.sort_by(|a, b| b.date.cmp(&a.date));
            merged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventDate, EventKind, EventStatus};
    use time::macros::date;

    fn event(id: &str, date: EventDate, status: EventStatus) -> EventItem {
        EventItem {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: "desc".to_string(),
            date,
            time: None,
            location: "Main Hall".to_string(),
            kind: EventKind::Talk,
            image: "images/event.jpg".to_string(),
            registration_link: None,
            attendees: 0,
            status,
        }
    }

    fn book() -> EventBook {
        EventBook::new(
            vec![
                event(
                    "u1",
                    EventDate::Scheduled(date!(2023 - 11 - 15)),
                    EventStatus::Upcoming,
                ),
                event(
                    "u2",
                    EventDate::Scheduled(date!(2024 - 01 - 20)),
                    EventStatus::Upcoming,
                ),
                event("u3", EventDate::Tbd, EventStatus::Upcoming),
            ],
            vec![
                event(
                    "p1",
                    EventDate::Scheduled(date!(2023 - 11 - 15)),
                    EventStatus::Completed,
                ),
                event(
                    "p2",
                    EventDate::Scheduled(date!(2023 - 08 - 22)),
                    EventStatus::Completed,
                ),
            ],
        )
        .expect("valid book")
    }

    fn ids(selected: &[&EventItem]) -> Vec<String> {
        selected.iter().map(|event| event.id.clone()).collect()
    }

    #[test]
    fn upcoming_and_past_tabs_keep_authoring_order() {
        let book = book();
        assert_eq!(ids(&select_tab(&book, EventTab::Upcoming)), ["u1", "u2", "u3"]);
        assert_eq!(ids(&select_tab(&book, EventTab::Past)), ["p1", "p2"]);
    }

    #[test]
    fn combined_tab_sorts_date_descending_with_tbd_last() {
        let book = book();
        let merged = select_tab(&book, EventTab::All);
        assert_eq!(ids(&merged), ["u2", "u1", "p1", "p2", "u3"]);
    }

    #[test]
    fn same_date_keeps_upcoming_ahead_of_past() {
        let book = book();
        let merged = select_tab(&book, EventTab::All);
        let u1 = merged.iter().position(|event| event.id == "u1");
        let p1 = merged.iter().position(|event| event.id == "p1");
        assert!(u1 < p1);
    }

    #[test]
    fn tab_values_parse_leniently() {
        assert_eq!(EventTab::parse("past"), EventTab::Past);
        assert_eq!(EventTab::parse(" ALL "), EventTab::All);
        assert_eq!(EventTab::parse("upcoming"), EventTab::Upcoming);
        assert_eq!(EventTab::parse("archive"), EventTab::Upcoming);
    }
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, page-level catalog queries to Dart via FRB.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Responses are value envelopes; core types never cross the bridge.

use clubsite_core::{
    builtin_catalog, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, AlumniMember, Catalog, CatalogService, CategorySelector, EventItem,
    EventTab, LogSettings, Project, SocialLinks, TeamMember,
};
use log::error;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same inputs (idempotent).
/// - Reconfiguration attempts with different inputs return an error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let settings = LogSettings {
        level,
        directory: log_dir,
    };
    match init_logging_inner(&settings) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One social link in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkItem {
    /// Lowercase platform tag (`linkedin|github|...`).
    pub platform: String,
    /// Target URL, or address for `email`.
    pub url: String,
}

/// Team member card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCardItem {
    pub id: String,
    pub name: String,
    pub role: String,
    pub team: String,
    pub department: String,
    pub image: String,
    pub bio: String,
    pub social: Vec<SocialLinkItem>,
    pub skills: Vec<String>,
}

/// Alumni card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniCardItem {
    pub id: String,
    pub name: String,
    pub role: String,
    pub batch: String,
    pub image: String,
    pub bio: String,
    pub social: Vec<SocialLinkItem>,
    pub skills: Vec<String>,
    pub current_position: Option<String>,
    pub company: Option<String>,
}

/// One rendered team page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSectionItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub members: Vec<TeamCardItem>,
}

/// One rendered alumni page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniSectionItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub members: Vec<AlumniCardItem>,
}

/// Team page response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRosterResponse {
    /// Sections in declaration order (empty when nothing matches).
    pub sections: Vec<TeamSectionItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Alumni page response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniRosterResponse {
    /// Sections in declaration order (empty when nothing matches).
    pub sections: Vec<AlumniSectionItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Event card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCardItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO `YYYY-MM-DD` date or the literal "TBD".
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    /// Lowercase kind tag (`workshop|hackathon|talk|meetup`).
    pub kind: String,
    pub image: String,
    pub registration_link: Option<String>,
    pub attendees: u32,
    /// Lowercase status tag (`upcoming|completed`).
    pub status: String,
}

/// Events page response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListResponse {
    pub items: Vec<EventCardItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Project card/detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardItem {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub github_url: String,
    pub demo_url: Option<String>,
    pub team: Vec<String>,
    /// Kebab-case status tag (`active|completed|on-hold|planned`).
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub technologies: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

/// Projects page response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub items: Vec<ProjectCardItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Project detail response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailResponse {
    /// Whether the slug resolved to a project.
    pub ok: bool,
    pub project: Option<ProjectCardItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Team page sections for one filter state.
///
/// Input semantics:
/// - `category`: a team id, or "all" for every team.
/// - `query`: free text matched against name, role and skills.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics; returns an empty section list with a message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn team_sections(category: String, query: String) -> TeamRosterResponse {
    let catalog = match resolve_catalog("team_sections") {
        Ok(catalog) => catalog,
        Err(message) => {
            return TeamRosterResponse {
                sections: Vec::new(),
                message,
            };
        }
    };

    let service = CatalogService::new(catalog);
    let selector = CategorySelector::parse(&category);
    let sections: Vec<TeamSectionItem> = service
        .team_sections(&selector, &query)
        .into_iter()
        .map(|bucket| TeamSectionItem {
            id: bucket.category.id.clone(),
            label: bucket.category.label.clone(),
            description: bucket.category.description.clone(),
            members: bucket.members.iter().map(|m| to_team_card(m)).collect(),
        })
        .collect();
    let message = section_message(sections.len());

    TeamRosterResponse { sections, message }
}

/// Alumni page sections for one filter state.
///
/// Input semantics:
/// - `category`: a batch year, or "all" for every batch.
/// - `query`: free text matched against name, role, bio and skills.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics; returns an empty section list with a message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn alumni_sections(category: String, query: String) -> AlumniRosterResponse {
    let catalog = match resolve_catalog("alumni_sections") {
        Ok(catalog) => catalog,
        Err(message) => {
            return AlumniRosterResponse {
                sections: Vec::new(),
                message,
            };
        }
    };

    let service = CatalogService::new(catalog);
    let selector = CategorySelector::parse(&category);
    let sections: Vec<AlumniSectionItem> = service
        .alumni_sections(&selector, &query)
        .into_iter()
        .map(|bucket| AlumniSectionItem {
            id: bucket.category.id.clone(),
            label: bucket.category.label.clone(),
            description: bucket.category.description.clone(),
            members: bucket.members.iter().map(|m| to_alumni_card(m)).collect(),
        })
        .collect();
    let message = section_message(sections.len());

    AlumniRosterResponse { sections, message }
}

/// Events visible under one page tab.
///
/// Input semantics:
/// - `tab`: `upcoming|past|all` (case-insensitive); anything else opens
///   the default upcoming view.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics; returns an empty list with a message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn list_events(tab: String) -> EventListResponse {
    let catalog = match resolve_catalog("list_events") {
        Ok(catalog) => catalog,
        Err(message) => {
            return EventListResponse {
                items: Vec::new(),
                message,
            };
        }
    };

    let service = CatalogService::new(catalog);
    let items: Vec<EventCardItem> = service
        .events(EventTab::parse(&tab))
        .into_iter()
        .map(to_event_card)
        .collect();
    let message = if items.is_empty() {
        "No events.".to_string()
    } else {
        format!("Found {} event(s).", items.len())
    };

    EventListResponse { items, message }
}

/// Projects visible for one filter state.
///
/// Input semantics:
/// - `category`: a lifecycle key (`active|completed|on-hold|planned`),
///   or "all" for every project.
/// - `query`: free text matched against title, description and tags.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics; returns an empty list with a message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn list_projects(category: String, query: String) -> ProjectListResponse {
    let catalog = match resolve_catalog("list_projects") {
        Ok(catalog) => catalog,
        Err(message) => {
            return ProjectListResponse {
                items: Vec::new(),
                message,
            };
        }
    };

    let service = CatalogService::new(catalog);
    let selector = CategorySelector::parse(&category);
    let items: Vec<ProjectCardItem> = service
        .projects(&selector, &query)
        .into_iter()
        .map(to_project_card)
        .collect();
    let message = if items.is_empty() {
        "No projects.".to_string()
    } else {
        format!("Found {} project(s).", items.len())
    };

    ProjectListResponse { items, message }
}

/// Resolves one project detail page by URL slug.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics; `ok=false` with a message when the slug is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn project_detail(slug: String) -> ProjectDetailResponse {
    let catalog = match resolve_catalog("project_detail") {
        Ok(catalog) => catalog,
        Err(message) => {
            return ProjectDetailResponse {
                ok: false,
                project: None,
                message,
            };
        }
    };

    let service = CatalogService::new(catalog);
    match service.project_by_slug(&slug) {
        Some(project) => ProjectDetailResponse {
            ok: true,
            project: Some(to_project_card(project)),
            message: "Project found.".to_string(),
        },
        None => ProjectDetailResponse {
            ok: false,
            project: None,
            message: format!("No project with slug `{slug}`."),
        },
    }
}

fn resolve_catalog(operation: &str) -> Result<&'static Catalog, String> {
    builtin_catalog().map_err(|err| {
        error!("event=catalog_resolve module=ffi status=error operation={operation} error={err}");
        format!("{operation} failed: {err}")
    })
}

fn section_message(count: usize) -> String {
    if count == 0 {
        "No members found.".to_string()
    } else {
        format!("Found {count} section(s).")
    }
}

fn social_items(links: &SocialLinks) -> Vec<SocialLinkItem> {
    links
        .iter()
        .map(|(platform, url)| SocialLinkItem {
            platform: platform.as_tag().to_string(),
            url: url.clone(),
        })
        .collect()
}

fn to_team_card(member: &TeamMember) -> TeamCardItem {
    TeamCardItem {
        id: member.id.clone(),
        name: member.name.clone(),
        role: member.role.clone(),
        team: member.team.clone(),
        department: member.department.clone(),
        image: member.image.clone(),
        bio: member.bio.clone(),
        social: social_items(&member.social),
        skills: member.skills.clone(),
    }
}

fn to_alumni_card(member: &AlumniMember) -> AlumniCardItem {
    AlumniCardItem {
        id: member.id.clone(),
        name: member.name.clone(),
        role: member.role.clone(),
        batch: member.batch.clone(),
        image: member.image.clone(),
        bio: member.bio.clone(),
        social: social_items(&member.social),
        skills: member.skills.clone(),
        current_position: member.current_position.clone(),
        company: member.company.clone(),
    }
}

fn to_event_card(event: &EventItem) -> EventCardItem {
    EventCardItem {
        id: event.id.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        date: event.date.to_string(),
        time: event.time.clone(),
        location: event.location.clone(),
        kind: event.kind.as_tag().to_string(),
        image: event.image.clone(),
        registration_link: event.registration_link.clone(),
        attendees: event.attendees,
        status: event.status.as_key().to_string(),
    }
}

fn to_project_card(project: &Project) -> ProjectCardItem {
    ProjectCardItem {
        id: project.id.clone(),
        slug: project.slug.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        long_description: project.long_description.clone(),
        tags: project.tags.clone(),
        image: project.image.clone(),
        github_url: project.github_url.clone(),
        demo_url: project.demo_url.clone(),
        team: project.team.clone(),
        status: project.status.as_key().to_string(),
        start_date: project.start_date.clone(),
        end_date: project.end_date.clone(),
        technologies: project.technologies.clone(),
        challenges: project.challenges.clone(),
        solutions: project.solutions.clone(),
    }
}

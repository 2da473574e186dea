use clubsite_core::{builtin_catalog, CatalogService, CategorySelector};

fn service() -> CatalogService<'static> {
    CatalogService::new(builtin_catalog().unwrap())
}

#[test]
fn all_selector_lists_every_team_section_in_authoring_order() {
    let service = service();
    let sections = service.team_sections(&CategorySelector::All, "");

    let ids: Vec<&str> = sections
        .iter()
        .map(|section| section.category.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "advisors",
            "board",
            "team-leads",
            "web",
            "pr",
            "tech",
            "design",
            "content"
        ]
    );

    let total: usize = sections.iter().map(|section| section.members.len()).sum();
    assert_eq!(total, 37);
}

#[test]
fn category_selector_narrows_to_one_section() {
    let service = service();
    let selector = CategorySelector::parse("design");
    let sections = service.team_sections(&selector, "");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].category.id, "design");
    let ids: Vec<&str> = sections[0]
        .members
        .iter()
        .map(|member| member.id.as_str())
        .collect();
    assert_eq!(ids, vec!["d1", "d2"]);
}

#[test]
fn search_matches_skills_case_insensitively_across_sections() {
    let service = service();
    let sections = service.team_sections(&CategorySelector::All, "PYTHON");

    let ids: Vec<&str> = sections
        .iter()
        .flat_map(|section| section.members.iter().map(|member| member.id.as_str()))
        .collect();
    assert_eq!(ids, vec!["w3", "t1", "t4"]);

    let section_ids: Vec<&str> = sections
        .iter()
        .map(|section| section.category.id.as_str())
        .collect();
    assert_eq!(section_ids, vec!["web", "tech"]);
}

#[test]
fn search_runs_inside_the_selected_category_only() {
    let service = service();
    let selector = CategorySelector::parse("tech");
    let sections = service.team_sections(&selector, "python");

    assert_eq!(sections.len(), 1);
    let ids: Vec<&str> = sections[0]
        .members
        .iter()
        .map(|member| member.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t1", "t4"]);
}

#[test]
fn query_whitespace_is_matched_literally() {
    let service = service();
    let sections = service.team_sections(&CategorySelector::All, " python");
    assert!(sections.is_empty());
}

#[test]
fn unknown_category_yields_no_sections() {
    let service = service();
    let selector = CategorySelector::parse("robotics");
    assert!(service.team_sections(&selector, "").is_empty());
}

#[test]
fn all_keyword_is_case_insensitive_and_trimmed() {
    let service = service();
    let selector = CategorySelector::parse("  ALL ");
    let sections = service.team_sections(&selector, "");
    assert_eq!(sections.len(), 8);
}

#[test]
fn alumni_search_reaches_into_the_bio() {
    let service = service();
    let sections = service.alumni_sections(&CategorySelector::All, "blockchain technology");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].category.id, "2023");
    assert_eq!(sections[0].members[0].id, "alum1");

    let empty = service.alumni_sections(&CategorySelector::All, "quantum computing");
    assert!(empty.is_empty());
}

#[test]
fn projects_filter_by_lifecycle_key() {
    let service = service();
    let selector = CategorySelector::parse("completed");
    let completed = service.projects(&selector, "");

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].slug, "autonomous-drone-technology");

    let active = service.projects(&CategorySelector::parse("active"), "");
    assert_eq!(active.len(), 2);
}

#[test]
fn projects_search_matches_title_description_and_tags() {
    let service = service();
    let by_title = service.projects(&CategorySelector::All, "drone");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "3");

    let by_tag = service.projects(&CategorySelector::All, "ros");
    assert!(!by_tag.is_empty());
}

#[test]
fn project_detail_lookup_is_exact_on_slug() {
    let service = service();
    let found = service.project_by_slug("4-wheeler-automation").unwrap();
    assert_eq!(found.id, "1");

    assert!(service.project_by_slug("4-Wheeler-Automation").is_none());
    assert!(service.project_by_slug("missing").is_none());
}

#[test]
fn heading_labels_resolve_through_the_service() {
    let service = service();
    assert_eq!(service.team_category("pr").unwrap().label, "PR & Logistics");
    assert_eq!(service.alumni_category("2023").unwrap().label, "2023");
    assert!(service.alumni_category("2020").is_none());
}

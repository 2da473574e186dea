use clubsite_core::{builtin_catalog, load_catalog};

#[test]
fn seed_catalog_loads_and_counts_every_section() {
    let catalog = load_catalog().unwrap();

    assert_eq!(catalog.team().categories().len(), 8);
    assert_eq!(catalog.team().entries().len(), 37);
    assert_eq!(catalog.alumni().categories().len(), 1);
    assert_eq!(catalog.alumni().entries().len(), 1);
    assert_eq!(catalog.events().upcoming().len(), 4);
    assert_eq!(catalog.events().past().len(), 2);
    assert_eq!(catalog.projects().len(), 3);
}

#[test]
fn builtin_catalog_hands_out_one_shared_instance() {
    let first = builtin_catalog().unwrap();
    let second = builtin_catalog().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn team_categories_keep_authoring_order() {
    let catalog = load_catalog().unwrap();
    let ids: Vec<&str> = catalog
        .team()
        .categories()
        .iter()
        .map(|category| category.id.as_str())
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
}

#[test]
fn category_lookup_resolves_display_labels() {
    let catalog = load_catalog().unwrap();
    let web = catalog.team().category("web").unwrap();
    assert_eq!(web.label, "Web Development");
    assert!(catalog.team().category("robotics").is_none());
}

#[test]
fn every_member_resolves_to_a_declared_team() {
    let catalog = load_catalog().unwrap();
    let roster = catalog.team();
    for member in roster.entries() {
        assert!(
            roster.category(&member.team).is_some(),
            "member {} points at undeclared team {}",
            member.id,
            member.team
        );
    }
}

#[test]
fn project_slugs_are_unique_and_lowercase() {
    let catalog = load_catalog().unwrap();
    let mut seen = std::collections::HashSet::new();
    for project in catalog.projects() {
        assert!(seen.insert(project.slug.as_str()));
        assert_eq!(project.slug, project.slug.to_lowercase());
    }
}

//! Tests for the collapsible tree view: toggling, isolation, order
//! preservation and rendering.

use fintree::domain::{ProcessItem, Section, Taxonomy};
use fintree::util::testing::init_test_setup;
use fintree::view::{render, Glyphs, SectionBody, SectionLayout, TreeView};

/// Two-section taxonomy: "ops" with two processes, "legal" with none.
fn scenario_taxonomy() -> Taxonomy {
    init_test_setup();
    Taxonomy::new(vec![
        Section::new(
            "ops",
            "I",
            "Operational Finance",
            None,
            vec![
                ProcessItem::new(46, "Outgoing payments"),
                ProcessItem::new(52, "Incoming payments"),
            ],
        ),
        Section::new("legal", "II", "Documents, Contracts & Legal", None, vec![]),
    ])
}

fn item_ids(layout: &SectionLayout) -> Vec<u32> {
    match &layout.body {
        SectionBody::Items(rows) => rows.iter().map(|r| r.id).collect(),
        other => panic!("expected item rows, got {:?}", other),
    }
}

// ============================================================
// Toggle Round-Trip Tests
// ============================================================

#[test]
fn given_expanded_section_when_toggled_then_item_rows_disappear() {
    let mut view = TreeView::new(scenario_taxonomy());
    assert_eq!(item_ids(&view.layouts()[0]), [46, 52]);

    view.toggle("ops");
    // Collapsed: subtree omitted entirely, no placeholder either
    assert_eq!(view.layouts()[0].body, SectionBody::Hidden);
}

#[test]
fn given_collapsed_section_when_toggled_again_then_items_reappear_in_order() {
    let mut view = TreeView::new(scenario_taxonomy());
    view.toggle("ops");
    view.toggle("ops");
    assert_eq!(item_ids(&view.layouts()[0]), [46, 52]);
}

#[test]
fn given_any_toggle_sequence_when_expanded_then_item_order_is_preserved() {
    let mut view = TreeView::new(scenario_taxonomy());
    for _ in 0..5 {
        view.toggle("ops");
        view.toggle("legal");
    }
    // Even number of toggles: both back at initial state
    assert_eq!(item_ids(&view.layouts()[0]), [46, 52]);
}

// ============================================================
// Empty Section Tests
// ============================================================

#[test]
fn given_empty_section_when_toggled_then_visible_output_is_unchanged() {
    let mut view = TreeView::new(scenario_taxonomy());
    let before = view.layouts()[1].clone();
    assert_eq!(before.body, SectionBody::Placeholder);
    assert_eq!(before.header.indicator, None);

    view.toggle("legal");
    let after = view.layouts()[1].clone();
    // The flag flipped, but both states render the same placeholder
    assert!(!view.is_expanded("legal"));
    assert_eq!(before, after);
}

// ============================================================
// Isolation Tests
// ============================================================

#[test]
fn given_two_sections_when_toggling_one_then_the_other_is_unaffected() {
    let mut view = TreeView::new(scenario_taxonomy());
    let legal_before = view.layouts()[1].clone();

    view.toggle("ops");
    assert_eq!(view.layouts()[1], legal_before);
}

#[test]
fn given_unknown_key_when_toggled_then_no_rendered_section_changes() {
    let mut view = TreeView::new(scenario_taxonomy());
    let before = view.layouts();

    view.toggle("nonexistent-key");
    assert_eq!(view.layouts(), before);
}

// ============================================================
// Summary Tests
// ============================================================

#[test]
fn given_prior_toggles_when_summarizing_then_counts_are_unchanged() {
    let mut view = TreeView::new(scenario_taxonomy());
    let before = view.summary();
    assert_eq!(before.section_count, 2);
    assert_eq!(before.process_count, 2);

    view.toggle("ops");
    view.toggle("legal");
    assert_eq!(view.summary(), before);
}

// ============================================================
// Rendering Tests
// ============================================================

#[test]
fn given_initial_view_when_rendered_then_items_and_placeholder_appear() {
    colored::control::set_override(false);
    let view = TreeView::new(scenario_taxonomy());
    let out = render(&view, &Glyphs::ascii());

    assert!(out.contains("Operational Finance"));
    assert!(out.contains("46"));
    assert!(out.contains("Outgoing payments"));
    assert!(out.contains("Incoming payments"));
    assert!(out.contains("no processes"));
    assert!(out.contains("2 sections · 2 processes"));
    // Items appear in dataset order
    let pos_46 = out.find("Outgoing payments").unwrap();
    let pos_52 = out.find("Incoming payments").unwrap();
    assert!(pos_46 < pos_52);
}

#[test]
fn given_collapsed_section_when_rendered_then_items_are_absent() {
    colored::control::set_override(false);
    let mut view = TreeView::new(scenario_taxonomy());
    view.toggle("ops");
    let out = render(&view, &Glyphs::ascii());

    assert!(out.contains("Operational Finance"));
    assert!(!out.contains("Outgoing payments"));
    assert!(!out.contains("Incoming payments"));
    // Empty section placeholder is still there
    assert!(out.contains("no processes"));
}

#[test]
fn given_builtin_taxonomy_when_rendered_then_every_section_header_appears() {
    colored::control::set_override(false);
    let view = TreeView::new(Taxonomy::builtin());
    let out = render(&view, &Glyphs::ascii());

    for section in view.taxonomy().sections() {
        assert!(
            out.contains(&section.title),
            "missing section title: {}",
            section.title
        );
    }
    assert!(out.contains("7 sections · 17 processes"));
    assert!(out.contains("[ZK]"));
}

//! Every navigation entry renders its own content in both layouts.

use lca_report::{render_page, render_report, AssetStore, ChartAssets, Layout, Section};
use tempfile::TempDir;

/// Text only the given section's panel contains.
fn marker(section: Section) -> &'static str {
    match section {
        Section::Overview => "Impact Categories Assessed",
        Section::SystemBoundary => "Quantity per kg Bio-SAC",
        Section::Results => "Process-Level LCA Data",
        Section::Insights => "Energy Source Optimization",
    }
}

#[test]
fn every_entry_renders_its_section() {
    let temp = TempDir::new().unwrap();
    let assets = AssetStore::new(temp.path());
    let chart_assets = ChartAssets::default();

    for layout in Layout::ALL {
        for entry in layout.entries() {
            let by_label = render_page(layout, Some(entry.label), &assets, &chart_assets);
            let by_slug = render_page(layout, Some(entry.slug), &assets, &chart_assets);
            assert_eq!(by_label, by_slug, "{:?} {}", layout, entry.slug);

            assert!(
                by_label.contains(entry.heading),
                "{:?} {} missing heading",
                layout,
                entry.slug
            );
            assert!(by_label.contains(&format!("data-panel=\"{}\"", entry.slug)));

            // Visualizations carries only the charts, not the results table
            if entry.part.shows_table() {
                assert!(by_label.contains(marker(entry.section)), "{:?} {}", layout, entry.slug);
            } else {
                assert!(by_label.contains("id=\"gwp-contribution\""));
            }
        }
    }
}

#[test]
fn every_section_is_reachable_from_both_layouts() {
    let temp = TempDir::new().unwrap();
    let assets = AssetStore::new(temp.path());

    for layout in Layout::ALL {
        let html = render_report(layout, &assets, &ChartAssets::default());
        for section in Section::ALL {
            let entries: Vec<_> = layout
                .entries()
                .iter()
                .filter(|entry| entry.section == section)
                .collect();
            assert!(!entries.is_empty(), "{:?} has no entry for {:?}", layout, section);
            for entry in entries {
                assert_eq!(Section::select(Some(entry.slug)), section);
            }
            assert!(html.contains(marker(section)), "{:?} {:?}", layout, section);
        }
    }
}

#[test]
fn same_selection_renders_identical_bytes() {
    let temp = TempDir::new().unwrap();
    let assets = AssetStore::new(temp.path()).with_url_prefix("/assets/");
    let chart_assets = ChartAssets::cdn();

    for layout in Layout::ALL {
        for entry in layout.entries() {
            let first = render_page(layout, Some(entry.slug), &assets, &chart_assets);
            let second = render_page(layout, Some(entry.slug), &assets, &chart_assets);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn unknown_selection_matches_overview_in_both_layouts() {
    let temp = TempDir::new().unwrap();
    let assets = AssetStore::new(temp.path());
    let chart_assets = ChartAssets::default();

    for layout in Layout::ALL {
        let unknown = render_page(layout, Some("Costs & Benefits"), &assets, &chart_assets);
        let overview = render_page(layout, Some("Project Overview"), &assets, &chart_assets);
        assert_eq!(unknown, overview);
        assert!(unknown.contains(marker(Section::Overview)));
    }
}

//! Static report generation example.
//!
//! Run with: `cargo run --example render_report`

use lca_report::{render_report, AssetStore, ChartAssets, Layout};

fn main() {
    // Diagram is looked up as ./picture1.png; a notice replaces it when absent
    let assets = AssetStore::default();

    // Load ECharts from the CDN so the charts are interactive
    let chart_assets = ChartAssets::cdn();

    for layout in Layout::ALL {
        let html = render_report(layout, &assets, &chart_assets);

        let output_path = format!("lca_report_{}.html", layout.as_label());
        std::fs::write(&output_path, &html).expect("Failed to write report");

        println!("Report written to: {}", output_path);
        println!("HTML size: {} bytes", html.len());
    }
}

//! # lca-report
//!
//! Leptos SSR renderer for the Bio-SAC Life Cycle Assessment report.
//!
//! The report is a fixed dataset (process inventory, impact figures,
//! comparison figures, narrative text) mapped onto navigable sections,
//! with a pie and a bar chart driven by [ECharts](https://echarts.apache.org/).
//!
//! ## Features
//!
//! - **Zero JavaScript Framework** - Pure SSR, no hydration needed
//! - **Two Layouts** - Sidebar radio list or tab bar over one content model
//! - **Deterministic** - Same layout and selection always produce the same bytes
//! - **Recoverable Assets** - A missing diagram becomes an inline notice
//!
//! ## Quick Start
//!
//! ```rust
//! use lca_report::{render_page, AssetStore, ChartAssets, Layout};
//!
//! let html = render_page(
//!     Layout::Sidebar,
//!     Some("LCA Results"),
//!     &AssetStore::default(),
//!     &ChartAssets::default(),
//! );
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Process-Level LCA Data"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for report content
//! - [`data`] - The fixed Bio-SAC dataset
//! - [`nav`] - Sections, layouts and selection
//! - [`charts`] - ECharts option builders
//! - [`assets`] - Diagram loading
//! - [`content`] - Per-section content assembly
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod charts;
pub mod components;
pub mod content;
pub mod data;
pub mod nav;
pub mod styles;
pub mod types;

pub use assets::{AssetError, AssetStore};
pub use nav::{Layout, NavEntry, Section};

use components::ReportDocument;
use data::ReportData;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

/// Default CDN location of the ECharts bundle.
pub const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// JavaScript asset paths for chart rendering.
///
/// You can provide:
///
/// - A CDN URL (see [`ChartAssets::cdn`])
/// - A local bundled file (for offline use)
/// - An empty string (charts show a placeholder, options stay embedded)
///
/// # Example
///
/// ```rust
/// use lca_report::ChartAssets;
///
/// let assets = ChartAssets::cdn();
/// assert!(assets.echarts_path.contains("echarts"));
///
/// // Or use defaults (empty path - charts show placeholder)
/// let assets = ChartAssets::default();
/// assert!(assets.echarts_path.is_empty());
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ChartAssets {
    /// Path or URL of echarts.min.js
    pub echarts_path: String,
}

impl ChartAssets {
    /// Load ECharts from the public CDN.
    pub fn cdn() -> Self {
        Self {
            echarts_path: ECHARTS_CDN.into(),
        }
    }
}

/// Renders report pages from the fixed dataset.
///
/// Holds only immutable inputs; the navigation selection is passed to
/// every call.
#[derive(Clone, Debug)]
pub struct ReportRenderer {
    data: ReportData,
    assets: AssetStore,
    chart_assets: ChartAssets,
}

impl ReportRenderer {
    /// Renderer over the Bio-SAC dataset.
    pub fn new(assets: AssetStore, chart_assets: ChartAssets) -> Self {
        Self::with_data(ReportData::bio_sac(), assets, chart_assets)
    }

    /// Renderer over a custom dataset.
    pub fn with_data(data: ReportData, assets: AssetStore, chart_assets: ChartAssets) -> Self {
        Self {
            data,
            assets,
            chart_assets,
        }
    }

    /// The dataset being rendered.
    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// The diagram store.
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// One render pass: the page for `selection` in `layout`.
    ///
    /// Only the selected entry's panel is rendered; navigation links
    /// request the other entries from the server.
    pub fn page(&self, layout: Layout, selection: Option<&str>) -> String {
        let entry = *layout.select(selection);
        debug!(layout = layout.as_label(), section = entry.slug, "render page");
        self.document(layout, entry, vec![entry])
    }

    /// Standalone document with every entry of `layout`, switched client-side.
    pub fn report(&self, layout: Layout) -> String {
        let entry = *layout.default_entry();
        debug!(layout = layout.as_label(), "render full report");
        self.document(layout, entry, layout.entries().to_vec())
    }

    fn document(&self, layout: Layout, selected: NavEntry, panels: Vec<NavEntry>) -> String {
        let doc = view! {
            <ReportDocument
                layout=layout
                selected=selected
                panels=panels
                data=self.data.clone()
                assets=self.assets.clone()
                chart_assets=self.chart_assets.clone()
            />
        };

        let html = doc.to_html();

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", html)
    }
}

/// Render the page for one navigation selection.
///
/// Unknown or absent selections render the overview.
///
/// # Example
///
/// ```rust
/// use lca_report::{render_page, AssetStore, ChartAssets, Layout};
///
/// let html = render_page(Layout::Tabs, Some("Raw Data"), &AssetStore::default(), &ChartAssets::default());
/// assert!(html.contains("Drying"));
/// ```
pub fn render_page(
    layout: Layout,
    selection: Option<&str>,
    assets: &AssetStore,
    chart_assets: &ChartAssets,
) -> String {
    ReportRenderer::new(assets.clone(), chart_assets.clone()).page(layout, selection)
}

/// Render a self-contained report with every section of `layout`.
pub fn render_report(layout: Layout, assets: &AssetStore, chart_assets: &ChartAssets) -> String {
    ReportRenderer::new(assets.clone(), chart_assets.clone()).report(layout)
}

//! Leptos UI components for rendering the LCA report.
//!
//! Each component is a Leptos `#[component]` function; together they
//! build one static HTML document per render pass.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── SidebarNav (sidebar layout) | TabBar (tabs layout)
//! └── SectionPanel (per navigation entry)
//!     ├── OverviewPanel
//!     ├── SystemBoundaryPanel
//!     │   └── InventoryTable
//!     ├── ResultsPanel
//!     │   ├── ProcessTable
//!     │   └── ChartContainer (pie, bar)
//!     └── InsightsPanel
//!
//! Narrative text goes through RichText for `**bold**` runs.
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`] or
//! [`crate::render_report`], but can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use lca_report::components::InsightsPanel;
//! use lca_report::data::ReportData;
//!
//! view! { <InsightsPanel insights=ReportData::bio_sac().insights /> }
//! ```

mod boundary;
mod chart;
mod document;
mod icons;
mod insights;
mod overview;
mod results;
mod section;
mod tabs;
mod text;

pub use boundary::{InventoryTable, SystemBoundaryPanel};
pub use chart::ChartContainer;
pub use document::ReportDocument;
pub use icons::*;
pub use insights::InsightsPanel;
pub use overview::OverviewPanel;
pub use results::{ProcessTable, ResultsPanel};
pub use section::SectionPanel;
pub use tabs::{SidebarNav, TabBar};
pub use text::RichText;

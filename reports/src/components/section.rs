//! Section panel component - one navigation entry's content
//!
//! Both layouts render the same panels; only the navigation chrome differs.

use leptos::prelude::*;

use super::{InsightsPanel, OverviewPanel, ResultsPanel, SystemBoundaryPanel};
use crate::assets::AssetStore;
use crate::content;
use crate::data::ReportData;
use crate::nav::{NavEntry, Section};

/// A complete panel for one navigation entry
#[component]
pub fn SectionPanel(
    entry: NavEntry,
    active: bool,
    data: ReportData,
    assets: AssetStore,
) -> impl IntoView {
    let class = if active { "tab-panel active" } else { "tab-panel" };

    let body = match entry.section {
        Section::Overview => view! {
            <OverviewPanel content=content::overview(&data) />
        }
        .into_any(),
        Section::SystemBoundary => view! {
            <SystemBoundaryPanel content=content::system_boundary(&data, &assets) />
        }
        .into_any(),
        Section::Results => view! {
            <ResultsPanel content=content::results(&data) part=entry.part />
        }
        .into_any(),
        Section::Insights => view! {
            <InsightsPanel insights=content::insights(&data) />
        }
        .into_any(),
    };

    view! {
        <section class=class id=format!("panel-{}", entry.slug) data-panel=entry.slug>
            <h2 class="section-heading">{entry.heading}</h2>
            <div class="content-container">
                {body}
            </div>
        </section>
    }
}

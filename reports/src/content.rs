//! Section content assembly.
//!
//! Each function turns the fixed dataset into what one section displays.
//! They are pure apart from the single diagram read in [`system_boundary`].

use tracing::{debug, warn};

use crate::assets::{AssetError, AssetStore, Diagram};
use crate::charts::{bar_option, pie_option, ChartSpec};
use crate::data::{ReportData, DIAGRAM_CAPTION};
use crate::types::{Insight, InventoryItem, ProcessRecord, TextBlock};

/// Overview section: opening sentence plus expanders.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewContent {
    /// Opening sentence
    pub intro: String,
    /// Expandable blocks, in order
    pub blocks: Vec<TextBlock>,
}

/// What the diagram slot shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramSlot {
    /// The image and its caption
    Image {
        /// Loaded diagram
        diagram: Diagram,
        /// Caption under the image
        caption: String,
    },
    /// Visible warning in place of the image
    Notice(String),
}

/// System boundary section: diagram plus inventory table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemBoundaryContent {
    /// Diagram or its replacement notice
    pub diagram: DiagramSlot,
    /// Energy & material inputs
    pub inventory: Vec<InventoryItem>,
}

/// Results section: process table plus both charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsContent {
    /// Process-level table
    pub processes: Vec<ProcessRecord>,
    /// GWP contribution pie
    pub pie: ChartSpec,
    /// Bio-SAC vs Petroleum-SAC bars
    pub bar: ChartSpec,
}

/// Overview: intro and the four standard-basis blocks.
pub fn overview(data: &ReportData) -> OverviewContent {
    OverviewContent {
        intro: data.overview_intro.clone(),
        blocks: data.overview.clone(),
    }
}

/// System boundary: try the diagram, fall back to a notice, always keep the table.
pub fn system_boundary(data: &ReportData, assets: &AssetStore) -> SystemBoundaryContent {
    let diagram = match assets.load_diagram() {
        Ok(diagram) => {
            debug!(file = %diagram.file_name, bytes = diagram.size, "diagram loaded");
            DiagramSlot::Image {
                diagram,
                caption: DIAGRAM_CAPTION.into(),
            }
        }
        Err(err) => {
            match &err {
                AssetError::NotFound { dir, .. } => {
                    warn!(dir = %dir.display(), "{err}");
                }
                AssetError::Io { .. } => warn!("{err}"),
            }
            DiagramSlot::Notice(err.to_string())
        }
    };

    SystemBoundaryContent {
        diagram,
        inventory: data.inventory.clone(),
    }
}

/// Results: table rows plus pie and bar chart specs.
pub fn results(data: &ReportData) -> ResultsContent {
    ResultsContent {
        processes: data.processes.clone(),
        pie: ChartSpec::new(
            "gwp-contribution",
            "Global Warming Potential (GWP) Contribution",
            &pie_option(&data.processes),
        ),
        bar: ChartSpec::new(
            "sac-comparison",
            "Comparison: Bio-SAC vs Petroleum-Based SAC",
            &bar_option(&data.comparison),
        ),
    }
}

/// Insights: the narrative bullets.
pub fn insights(data: &ReportData) -> Vec<Insight> {
    data.insights.clone()
}

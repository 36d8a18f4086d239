//! The fixed Bio-SAC dataset.
//!
//! Every figure of the report lives here and nowhere else. Both layouts and
//! both chart builders read from [`ReportData::bio_sac`].

use serde::Serialize;

use crate::types::{
    Comparison, ComparisonSeries, InputCategory, Insight, InventoryItem, ProcessRecord,
    ReportMeta, TextBlock,
};

/// Default file name of the system boundary diagram.
pub const DIAGRAM_FILE: &str = "picture1.png";

/// Caption shown under the system boundary diagram.
pub const DIAGRAM_CAPTION: &str = "System Boundary for Bio-SAC Production";

/// Display color of the Bio-SAC comparison series.
pub const BIO_SAC_COLOR: &str = "#1995AD";

/// Display color of the Petroleum-SAC comparison series.
pub const PETROLEUM_SAC_COLOR: &str = "#C4DFE6";

/// Tolerance used when comparing summed figures.
const SUM_TOLERANCE: f64 = 1e-9;

/// Complete report content.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportData {
    /// Page chrome text
    pub meta: ReportMeta,
    /// Opening sentence of the overview
    pub overview_intro: String,
    /// Overview expanders, in display order
    pub overview: Vec<TextBlock>,
    /// Energy & material inputs table
    pub inventory: Vec<InventoryItem>,
    /// Process-level LCA table
    pub processes: Vec<ProcessRecord>,
    /// Bio-SAC vs Petroleum-SAC comparison
    pub comparison: Comparison,
    /// Key insight bullets
    pub insights: Vec<Insight>,
}

/// Outcome of cross-checking the process table against the comparison chart.
///
/// The two datasets are reported independently; nothing is derived from
/// the other. A mismatch only means someone edited one side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Consistency {
    /// Sum of process GWP values
    pub process_gwp: f64,
    /// Bio-SAC GWP value of the comparison chart
    pub comparison_gwp: f64,
    /// Sum of process energy demand values
    pub process_energy: f64,
    /// Bio-SAC energy value of the comparison chart
    pub comparison_energy: f64,
}

impl Consistency {
    /// Whether the summed GWP matches the Bio-SAC bar.
    pub fn gwp_matches(&self) -> bool {
        (self.process_gwp - self.comparison_gwp).abs() < SUM_TOLERANCE
    }

    /// Whether the summed energy demand matches the Bio-SAC bar.
    pub fn energy_matches(&self) -> bool {
        (self.process_energy - self.comparison_energy).abs() < SUM_TOLERANCE
    }

    /// Human-readable mismatch descriptions (empty when consistent).
    pub fn mismatches(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.gwp_matches() {
            out.push(format!(
                "process GWP sums to {:.2} but the Bio-SAC comparison reports {:.2}",
                self.process_gwp, self.comparison_gwp
            ));
        }
        if !self.energy_matches() {
            out.push(format!(
                "process energy demand sums to {:.1} but the Bio-SAC comparison reports {:.1}",
                self.process_energy, self.comparison_energy
            ));
        }
        out
    }
}

impl ReportData {
    /// The Bio-SAC production report.
    pub fn bio_sac() -> Self {
        Self {
            meta: ReportMeta {
                title: "LCA Report: Bio-SAC Production".into(),
                footer: "This report follows ISO 14044 guidelines for Life Cycle Assessment (LCA)."
                    .into(),
                nav_title: "Navigation".into(),
                nav_prompt: "Jump to Section:".into(),
            },
            overview_intro: "This Life Cycle Assessment (LCA) follows ISO 14044 standards to \
                             evaluate the environmental impact of Bio-SAC production."
                .into(),
            overview: overview_blocks(),
            inventory: inventory_items(),
            processes: process_records(),
            comparison: comparison(),
            insights: insight_bullets(),
        }
    }

    /// Sum of GWP over all process stages (kg CO₂-eq/kg).
    pub fn total_process_gwp(&self) -> f64 {
        self.processes.iter().map(|p| p.gwp).sum()
    }

    /// Sum of energy demand over all process stages (MJ/kg).
    pub fn total_process_energy(&self) -> f64 {
        self.processes.iter().map(|p| p.energy_demand).sum()
    }

    /// Cross-check the process table against the Bio-SAC comparison series.
    pub fn consistency(&self) -> Consistency {
        let bio = self.comparison.series("Bio-SAC");
        Consistency {
            process_gwp: self.total_process_gwp(),
            comparison_gwp: bio.map(|s| s.values[0]).unwrap_or_default(),
            process_energy: self.total_process_energy(),
            comparison_energy: bio.map(|s| s.values[1]).unwrap_or_default(),
        }
    }
}

fn overview_blocks() -> Vec<TextBlock> {
    vec![
        TextBlock {
            title: "ISO Standards".into(),
            body: "This study is conducted based on ISO 14044 guidelines.".into(),
            items: vec![],
        },
        TextBlock {
            title: "Functional Unit".into(),
            body: "The functional unit is **1 kg of Bio-SAC** produced. This ensures consistency \
                   when comparing environmental impacts."
                .into(),
            items: vec![],
        },
        TextBlock {
            title: "Allocation Method".into(),
            body: "Co-product allocation: The environmental burden is divided based on the \
                   economic value of the co-products."
                .into(),
            items: vec![],
        },
        TextBlock {
            title: "Impact Categories Assessed".into(),
            body: "The following EF3.1 impact categories are considered:".into(),
            items: vec![
                "**Global Warming Potential (GWP)** (kg CO₂-eq)".into(),
                "**Cumulative Energy Demand (CED)** (MJ)".into(),
                "**Water Use** (L)".into(),
            ],
        },
    ]
}

fn inventory_items() -> Vec<InventoryItem> {
    [
        (InputCategory::RawMaterial, "Biomass", "2.5 kg"),
        (InputCategory::RawMaterial, "Chemical Catalysts", "0.3 kg"),
        (InputCategory::Energy, "Electricity", "3.5 MJ"),
        (InputCategory::Energy, "Process Heat", "2.0 MJ"),
        (InputCategory::Water, "Water Usage", "50 L"),
    ]
    .into_iter()
    .map(|(category, item, quantity)| InventoryItem {
        category,
        item: item.into(),
        quantity_per_kg: quantity.into(),
    })
    .collect()
}

fn process_records() -> Vec<ProcessRecord> {
    [
        ("Feedstock Preparation", 0.24, 1.6, 10.0),
        ("Fermentation", 0.48, 3.2, 25.0),
        ("Purification", 0.30, 2.0, 10.0),
        ("Drying & Storage", 0.18, 1.2, 5.0),
    ]
    .into_iter()
    .map(|(name, gwp, energy_demand, water_usage)| ProcessRecord {
        name: name.into(),
        gwp,
        energy_demand,
        water_usage,
    })
    .collect()
}

fn comparison() -> Comparison {
    Comparison {
        categories: [
            "GWP (kg CO₂-eq/kg)".into(),
            "Energy Demand (MJ/kg)".into(),
            "Water Use (L/kg)".into(),
        ],
        series: vec![
            ComparisonSeries {
                label: "Bio-SAC".into(),
                values: [1.2, 8.0, 50.0],
                color: BIO_SAC_COLOR.into(),
            },
            ComparisonSeries {
                label: "Petroleum-SAC".into(),
                values: [2.5, 12.0, 20.0],
                color: PETROLEUM_SAC_COLOR.into(),
            },
        ],
    }
}

fn insight_bullets() -> Vec<Insight> {
    [
        (
            "GWP Reduction",
            "The use of Bio-SAC instead of petroleum-based SAC results in more than a **50% \
             reduction** in CO₂ emissions.",
        ),
        (
            "Energy Source Optimization",
            "Increasing the share of renewable energy in fermentation could further reduce \
             the environmental footprint.",
        ),
        (
            "Water Consumption",
            "Bio-SAC production requires **significantly more water**, primarily due to the \
             fermentation process.",
        ),
        (
            "Process Efficiency",
            "The fermentation stage is the **largest contributor** to GWP, highlighting the need \
             for efficiency improvements.",
        ),
    ]
    .into_iter()
    .map(|(title, message)| Insight {
        title: title.into(),
        message: message.into(),
    })
    .collect()
}

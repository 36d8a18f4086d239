//! Report data types for the Bio-SAC life cycle assessment.
//!
//! These types describe the report content, not its presentation. They're designed to be:
//!
//! - **Serializable** - the whole dataset can be dumped as JSON via serde
//! - **Clone-friendly** - components take owned copies without borrowing issues
//! - **Immutable** - every value is a literal constant (see [`crate::data`])
//!
//! # Example
//!
//! ```rust
//! use lca_report::types::{InputCategory, InventoryItem};
//!
//! let item = InventoryItem {
//!     category: InputCategory::Energy,
//!     item: "Electricity".into(),
//!     quantity_per_kg: "3.5 MJ".into(),
//! };
//! assert_eq!(item.category.label(), "Energy");
//! ```

use serde::{Deserialize, Serialize};

/// Process-level inventory and impact figures for one production stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process stage name (e.g. "Fermentation")
    pub name: String,
    /// Global warming potential in kg CO₂-eq per kg product
    pub gwp: f64,
    /// Cumulative energy demand in MJ per kg product
    pub energy_demand: f64,
    /// Water usage in litres per kg product
    pub water_usage: f64,
}

/// Category of a life cycle inventory input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCategory {
    /// Feedstock and auxiliary materials
    RawMaterial,
    /// Electricity and heat
    Energy,
    /// Process water
    Water,
}

impl InputCategory {
    /// Label shown in the inventory table.
    pub fn label(&self) -> &'static str {
        match self {
            InputCategory::RawMaterial => "Raw Material",
            InputCategory::Energy => "Energy",
            InputCategory::Water => "Water",
        }
    }
}

/// One row of the energy & material inputs table.
///
/// The quantity keeps its unit embedded, exactly as reported (e.g. `"2.5 kg"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Input category
    pub category: InputCategory,
    /// Input name
    pub item: String,
    /// Quantity per kg Bio-SAC, unit included
    pub quantity_per_kg: String,
}

/// One bar series of the Bio-SAC vs Petroleum-SAC comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    /// Product label ("Bio-SAC" or "Petroleum-SAC")
    pub label: String,
    /// Values aligned to [`Comparison::categories`]: GWP, energy demand, water use
    pub values: [f64; 3],
    /// Fixed display color (hex)
    pub color: String,
}

/// The comparison dataset: a fixed category axis and one series per product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Category axis labels
    pub categories: [String; 3],
    /// Bar series, in legend order
    pub series: Vec<ComparisonSeries>,
}

impl Comparison {
    /// Find a series by its label.
    pub fn series(&self, label: &str) -> Option<&ComparisonSeries> {
        self.series.iter().find(|s| s.label == label)
    }
}

/// An expandable text block of the overview section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Expander title
    pub title: String,
    /// Paragraph text; `**` marks emphasis (see [`emphasis_spans`])
    pub body: String,
    /// Optional bullet list rendered below the paragraph, same markup
    #[serde(default)]
    pub items: Vec<String>,
}

/// A key insight bullet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Bold lead-in (e.g. "GWP Reduction")
    pub title: String,
    /// Narrative text; `**` marks emphasis
    pub message: String,
}

/// A run of narrative text, optionally emphasised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// Text of the run
    pub text: String,
    /// Rendered bold
    pub strong: bool,
}

/// Split `**bold**` markup into spans.
///
/// A trailing unpaired `**` stays literal text.
///
/// ```rust
/// use lca_report::types::emphasis_spans;
///
/// let spans = emphasis_spans("a **50% reduction** in CO₂");
/// assert_eq!(spans.len(), 3);
/// assert!(spans[1].strong);
/// assert_eq!(spans[1].text, "50% reduction");
/// ```
pub fn emphasis_spans(text: &str) -> Vec<Span> {
    let parts: Vec<&str> = text.split("**").collect();
    let unpaired = parts.len() % 2 == 0;
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .filter_map(|(i, part)| {
            let (text, strong) = if unpaired && i == last {
                (format!("**{part}"), false)
            } else {
                (part.to_string(), i % 2 == 1)
            };
            (!text.is_empty()).then_some(Span { text, strong })
        })
        .collect()
}

/// Fixed page chrome text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Document title and page heading
    pub title: String,
    /// Footer line shown under every section
    pub footer: String,
    /// Sidebar heading
    pub nav_title: String,
    /// Prompt above the sidebar radio list
    pub nav_prompt: String,
}

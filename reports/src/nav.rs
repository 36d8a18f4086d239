//! Navigation model: sections, layouts and selection.
//!
//! The selection is never stored here. Callers pass it into every render
//! pass, so the same input always yields the same page.

use serde::{Deserialize, Serialize};

/// A report section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Standard basis, functional unit, allocation, impact categories
    #[default]
    Overview,
    /// Diagram and life cycle inventory table
    SystemBoundary,
    /// Process table and charts
    Results,
    /// Narrative bullets
    Insights,
}

impl Section {
    /// All sections in report order.
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::SystemBoundary,
        Section::Results,
        Section::Insights,
    ];

    /// Map any navigation value (either layout's label, or a slug) to a section.
    ///
    /// Unknown or absent input falls back to [`Section::Overview`].
    ///
    /// ```rust
    /// use lca_report::nav::Section;
    ///
    /// assert_eq!(Section::select(Some("LCA Results")), Section::Results);
    /// assert_eq!(Section::select(Some("raw-data")), Section::Results);
    /// assert_eq!(Section::select(Some("nope")), Section::Overview);
    /// assert_eq!(Section::select(None), Section::Overview);
    /// ```
    pub fn select(input: Option<&str>) -> Section {
        input
            .and_then(|raw| {
                Layout::ALL
                    .iter()
                    .find_map(|layout| layout.find(raw))
                    .map(|entry| entry.section)
            })
            .unwrap_or_default()
    }
}

/// Which part of a section a navigation entry shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    /// Everything the section has
    All,
    /// Only the data table (results split into tabs)
    TableOnly,
    /// Only the charts (results split into tabs)
    ChartsOnly,
}

impl Part {
    /// Whether tables are shown.
    pub fn shows_table(&self) -> bool {
        matches!(self, Part::All | Part::TableOnly)
    }

    /// Whether charts are shown.
    pub fn shows_charts(&self) -> bool {
        matches!(self, Part::All | Part::ChartsOnly)
    }
}

/// One navigation choice of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Label shown in the navigation control
    pub label: &'static str,
    /// URL-safe identifier, used in `?section=` and as panel id
    pub slug: &'static str,
    /// Page heading of the panel
    pub heading: &'static str,
    /// Section rendered by this entry
    pub section: Section,
    /// Portion of the section shown
    pub part: Part,
}

const SIDEBAR_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Project Overview",
        slug: "overview",
        heading: "Project Overview",
        section: Section::Overview,
        part: Part::All,
    },
    NavEntry {
        label: "LCI - System Boundary",
        slug: "system-boundary",
        heading: "Life Cycle Inventory (LCI) - System Boundary",
        section: Section::SystemBoundary,
        part: Part::All,
    },
    NavEntry {
        label: "LCA Results",
        slug: "results",
        heading: "LCA Results",
        section: Section::Results,
        part: Part::All,
    },
    NavEntry {
        label: "Insights",
        slug: "insights",
        heading: "Key Insights",
        section: Section::Insights,
        part: Part::All,
    },
];

const TAB_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "Project Overview",
        slug: "overview",
        heading: "Project Overview",
        section: Section::Overview,
        part: Part::All,
    },
    NavEntry {
        label: "System Boundary",
        slug: "system-boundary",
        heading: "Life Cycle Inventory (LCI) - System Boundary",
        section: Section::SystemBoundary,
        part: Part::All,
    },
    NavEntry {
        label: "Raw Data",
        slug: "raw-data",
        heading: "Raw Data",
        section: Section::Results,
        part: Part::TableOnly,
    },
    NavEntry {
        label: "Visualizations",
        slug: "visualizations",
        heading: "Visualizations",
        section: Section::Results,
        part: Part::ChartsOnly,
    },
    NavEntry {
        label: "Insights",
        slug: "insights",
        heading: "Key Insights",
        section: Section::Insights,
        part: Part::All,
    },
];

/// Presentation adapter: how navigation is laid out on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Sidebar with a radio list
    #[default]
    Sidebar,
    /// Horizontal tab bar, results split into "Raw Data" and "Visualizations"
    Tabs,
}

impl Layout {
    /// Both layouts.
    pub const ALL: [Layout; 2] = [Layout::Sidebar, Layout::Tabs];

    /// Navigation entries of this layout, in display order.
    pub fn entries(&self) -> &'static [NavEntry] {
        match self {
            Layout::Sidebar => &SIDEBAR_ENTRIES,
            Layout::Tabs => &TAB_ENTRIES,
        }
    }

    /// The entry selected when nothing (or something unknown) is requested.
    pub fn default_entry(&self) -> &'static NavEntry {
        &self.entries()[0]
    }

    /// Look up an entry by exact label or by slug (case-insensitive).
    pub fn find(&self, input: &str) -> Option<&'static NavEntry> {
        let needle = input.trim();
        self.entries().iter().find(|entry| {
            entry.label == needle || entry.slug.eq_ignore_ascii_case(needle)
        })
    }

    /// Resolve a navigation input to an entry of this layout.
    ///
    /// Labels of the other layout are accepted too, mapped through their
    /// section. Unknown or absent input selects [`Layout::default_entry`].
    pub fn select(&self, input: Option<&str>) -> &'static NavEntry {
        let Some(raw) = input else {
            return self.default_entry();
        };
        if let Some(entry) = self.find(raw) {
            return entry;
        }
        let section = Section::select(Some(raw));
        self.entries()
            .iter()
            .find(|entry| entry.section == section)
            .unwrap_or_else(|| self.default_entry())
    }

    /// Lowercase name, as used in config files and CLI flags.
    pub fn as_label(&self) -> &'static str {
        match self {
            Layout::Sidebar => "sidebar",
            Layout::Tabs => "tabs",
        }
    }

    /// Parse a layout name; accepts `sidebar`/`radio` and `tabs`/`tab`.
    pub fn from_label(raw: &str) -> Option<Layout> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sidebar" | "radio" => Some(Layout::Sidebar),
            "tabs" | "tab" => Some(Layout::Tabs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_labels_match_radio_options() {
        let labels: Vec<&str> = Layout::Sidebar.entries().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Project Overview", "LCI - System Boundary", "LCA Results", "Insights"]
        );
    }

    #[test]
    fn tabs_split_results() {
        let results: Vec<Part> = Layout::Tabs
            .entries()
            .iter()
            .filter(|e| e.section == Section::Results)
            .map(|e| e.part)
            .collect();
        assert_eq!(results, vec![Part::TableOnly, Part::ChartsOnly]);
    }

    #[test]
    fn every_label_selects_its_section() {
        for layout in Layout::ALL {
            for entry in layout.entries() {
                assert_eq!(Section::select(Some(entry.label)), entry.section);
                assert_eq!(layout.select(Some(entry.label)), entry);
                assert_eq!(layout.select(Some(entry.slug)), entry);
            }
        }
    }

    #[test]
    fn unknown_input_defaults_to_overview() {
        for layout in Layout::ALL {
            assert_eq!(layout.select(Some("Financials")).section, Section::Overview);
            assert_eq!(layout.select(Some("")).section, Section::Overview);
            assert_eq!(layout.select(None).section, Section::Overview);
        }
    }

    #[test]
    fn cross_layout_labels_map_through_section() {
        let entry = Layout::Tabs.select(Some("LCA Results"));
        assert_eq!(entry.slug, "raw-data");
        let entry = Layout::Sidebar.select(Some("Visualizations"));
        assert_eq!(entry.slug, "results");
        let entry = Layout::Sidebar.select(Some("System Boundary"));
        assert_eq!(entry.section, Section::SystemBoundary);
    }

    #[test]
    fn slug_lookup_ignores_case_and_whitespace() {
        assert_eq!(Layout::Sidebar.select(Some(" INSIGHTS ")).section, Section::Insights);
    }

    #[test]
    fn layout_labels() {
        assert_eq!(Layout::from_label("Tabs"), Some(Layout::Tabs));
        assert_eq!(Layout::from_label("radio"), Some(Layout::Sidebar));
        assert_eq!(Layout::from_label("grid"), None);
        assert_eq!(Layout::Tabs.as_label(), "tabs");
    }
}

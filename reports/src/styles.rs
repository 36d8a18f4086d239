//! CSS styles for the HTML report.
//!
//! This module contains the complete CSS for rendering the report,
//! including both navigation layouts, tables, charts and notices.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use lca_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! assert!(combined.contains(".app-shell"));
//! ```

/// Complete CSS for the report - light theme with the comparison palette.
///
/// This CSS provides:
/// - Sidebar (radio list) and tabs app shells
/// - Expanders for the overview blocks
/// - Table styling for inventory and process data
/// - Chart containers and the missing-diagram notice
pub const REPORT_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-sidebar: #f0f2f6;
    --bg-panel: #fafbfc;
    --text-main: #262730;
    --text-dim: #5c5f6b;
    --text-muted: #9a9ca5;
    --border-subtle: rgba(49, 51, 63, 0.1);
    --border-visible: rgba(49, 51, 63, 0.2);
    --accent: #1995AD;
    --accent-soft: #C4DFE6;
    --accent-red: #dc2626;
    --font-sans: "Source Sans Pro", system-ui, -apple-system, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --content-max: 960px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    height: 100%;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
    margin: 0;
}

/* App shell */
.app-shell {
    min-height: 100vh;
}

.layout-sidebar {
    display: grid;
    grid-template-columns: 260px minmax(0, 1fr);
}

.app-sidebar {
    background: var(--bg-sidebar);
    border-right: 1px solid var(--border-subtle);
    padding: 32px 20px;
    position: sticky;
    top: 0;
    height: 100vh;
    overflow: auto;
}

.sidebar-header h2 {
    font-size: 20px;
    margin: 0 0 16px 0;
}

.nav-prompt {
    font-size: 13px;
    color: var(--text-dim);
    margin: 0 0 8px 0;
}

.sidebar-nav {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.nav-item {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 6px 8px;
    border-radius: 6px;
    color: var(--text-main);
    text-decoration: none;
    font-size: 14px;
}

.nav-item:hover {
    background: var(--border-subtle);
}

.radio-dot {
    width: 14px;
    height: 14px;
    border-radius: 50%;
    border: 2px solid var(--text-muted);
    flex-shrink: 0;
}

.nav-item.active .radio-dot {
    border: 4px solid var(--accent);
}

.nav-item.active {
    font-weight: 600;
}

.icon-sm {
    flex-shrink: 0;
    opacity: 0.7;
}

/* Main */
.app-main {
    max-width: var(--content-max);
    margin: 0 auto;
    padding: 32px 32px 64px 32px;
    width: 100%;
}

.app-header h1 {
    font-size: 32px;
    margin: 0 0 24px 0;
}

.tab-bar {
    display: flex;
    gap: 4px;
    border-bottom: 1px solid var(--border-visible);
    margin-bottom: 24px;
    overflow-x: auto;
}

.tab-btn {
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 8px 14px;
    color: var(--text-dim);
    text-decoration: none;
    font-size: 14px;
    border-bottom: 2px solid transparent;
    white-space: nowrap;
}

.tab-btn:hover {
    color: var(--text-main);
}

.tab-btn.active {
    color: var(--accent);
    border-bottom-color: var(--accent);
}

/* Panels */
.tab-panel {
    display: none;
}

.tab-panel.active {
    display: block;
}

.section-heading {
    font-size: 24px;
    margin: 0 0 16px 0;
}

.content-container h3 {
    font-size: 18px;
    margin: 28px 0 12px 0;
}

.lead {
    font-size: 16px;
}

/* Expanders */
.expander-group {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.expander {
    border: 1px solid var(--border-visible);
    border-radius: 8px;
    background: var(--bg-panel);
}

.expander summary {
    cursor: pointer;
    padding: 10px 14px;
    display: flex;
    align-items: center;
    gap: 8px;
    list-style: none;
    font-weight: 600;
}

.expander summary::-webkit-details-marker {
    display: none;
}

.expander-caret {
    transform: rotate(-90deg);
    transition: transform 0.15s;
}

.expander[open] .expander-caret {
    transform: rotate(0deg);
}

.expander-body {
    padding: 0 14px 10px 36px;
}

/* Tables */
.data-table {
    border-collapse: collapse;
    width: 100%;
    font-size: 14px;
}

.data-table th,
.data-table td {
    border: 1px solid var(--border-subtle);
    padding: 6px 10px;
    text-align: left;
}

.data-table th {
    background: var(--bg-sidebar);
    font-weight: 600;
}

.data-table td.num {
    font-family: var(--font-mono);
    text-align: right;
}

.data-table tbody tr:hover {
    background: var(--bg-panel);
}

/* Diagram */
.diagram {
    margin: 0;
}

.diagram img {
    width: 100%;
    height: auto;
    border-radius: 6px;
}

.diagram figcaption {
    text-align: center;
    font-size: 13px;
    color: var(--text-dim);
    margin-top: 6px;
}

/* Notices */
.notice {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 12px 16px;
    border-radius: 8px;
}

.notice-error {
    background: rgba(220, 38, 38, 0.08);
    color: var(--accent-red);
    border: 1px solid rgba(220, 38, 38, 0.25);
}

/* Charts */
.chart {
    width: 100%;
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
}

.chart-empty {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    color: var(--text-muted);
    font-size: 13px;
}

/* Insights */
.insight-list {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.insight-item {
    display: flex;
    gap: 12px;
    padding: 12px 16px;
    border-left: 3px solid var(--accent);
    background: var(--bg-panel);
    border-radius: 0 8px 8px 0;
}

.insight-content p {
    margin: 4px 0 0 0;
}

/* Footer */
.app-footer {
    margin-top: 48px;
    padding-top: 16px;
    border-top: 1px solid var(--border-subtle);
    color: var(--text-dim);
    font-size: 13px;
}

@media (max-width: 760px) {
    .layout-sidebar {
        grid-template-columns: 1fr;
    }

    .app-sidebar {
        position: static;
        height: auto;
    }
}
"#;

/// Content Security Policy for the report.
///
/// Inline scripts and styles are allowed; network access is not. The
/// origin of a remote chart bundle is added to `script-src` by
/// [`content_security_policy`].
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Build the CSP for a page loading its chart bundle from `script_path`.
///
/// ```rust
/// use lca_report::styles::content_security_policy;
///
/// let csp = content_security_policy("https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js");
/// assert!(csp.contains("script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net;"));
/// ```
pub fn content_security_policy(script_path: &str) -> String {
    match script_origin(script_path) {
        Some(origin) => CSP.replace(
            "script-src 'self' 'unsafe-inline';",
            &format!("script-src 'self' 'unsafe-inline' {origin};"),
        ),
        None => CSP.to_string(),
    }
}

fn script_origin(path: &str) -> Option<&str> {
    let scheme_end = path
        .strip_prefix("https://")
        .map(|_| "https://".len())
        .or_else(|| path.strip_prefix("http://").map(|_| "http://".len()))?;
    let host_len = path[scheme_end..]
        .find('/')
        .unwrap_or(path.len() - scheme_end);
    Some(&path[..scheme_end + host_len])
}

//! Static output: write the report to a directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lca_report::{Layout, ReportRenderer};
use tracing::{info, warn};

/// Name of the written HTML file.
pub const INDEX_FILE: &str = "index.html";

/// Files produced by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// The HTML document
    pub index: PathBuf,
    /// Copied diagram, if it was available
    pub diagram: Option<PathBuf>,
}

/// Render `layout` into `out_dir`.
///
/// With `section`, only that page is written; otherwise every section goes
/// into one document with client-side switching. The diagram is copied next
/// to the HTML so the relative `src` resolves; a missing diagram is logged
/// and the page carries the inline notice instead.
pub fn write_report(
    renderer: &ReportRenderer,
    layout: Layout,
    section: Option<&str>,
    out_dir: &Path,
) -> Result<RenderOutcome> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let html = match section {
        Some(selection) => renderer.page(layout, Some(selection)),
        None => renderer.report(layout),
    };

    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, html).with_context(|| format!("failed to write {}", index.display()))?;
    info!(path = %index.display(), layout = layout.as_label(), "report written");

    let diagram = copy_diagram(renderer, out_dir);

    Ok(RenderOutcome { index, diagram })
}

/// Copy the diagram under `out_dir`, keeping its relative path. Failures only warn.
fn copy_diagram(renderer: &ReportRenderer, out_dir: &Path) -> Option<PathBuf> {
    let assets = renderer.assets();
    let bytes = match assets.read_diagram() {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{e}");
            return None;
        }
    };

    let target = out_dir.join(&assets.diagram);
    let written = match target.parent() {
        Some(parent) => fs::create_dir_all(parent).and_then(|_| fs::write(&target, bytes)),
        None => fs::write(&target, bytes),
    };
    match written {
        Ok(()) => Some(target),
        Err(e) => {
            warn!(path = %target.display(), "failed to copy diagram: {e}");
            None
        }
    }
}

//! Root document component - the complete HTML page
//!
//! Implements the App Shell layout: sidebar radio list or header tab bar,
//! the section panels, and the footer.

use super::{SectionPanel, SidebarNav, TabBar};
use crate::assets::AssetStore;
use crate::data::ReportData;
use crate::nav::{Layout, NavEntry};
use crate::styles::{content_security_policy, REPORT_CSS};
use crate::ChartAssets;
use leptos::prelude::*;

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(
    layout: Layout,
    /// Entry marked active in the navigation
    selected: NavEntry,
    /// Entries rendered as panels (one for a served page, all for a static report)
    panels: Vec<NavEntry>,
    data: ReportData,
    assets: AssetStore,
    chart_assets: ChartAssets,
) -> impl IntoView {
    let csp = content_security_policy(&chart_assets.echarts_path);
    let title = data.meta.title.clone();
    let footer = data.meta.footer.clone();
    let shell_class = match layout {
        Layout::Sidebar => "app-shell layout-sidebar",
        Layout::Tabs => "app-shell layout-tabs",
    };

    let (sidebar, tab_bar) = match layout {
        Layout::Sidebar => (
            Some(view! {
                <aside class="app-sidebar">
                    <SidebarNav
                        title=data.meta.nav_title.clone()
                        prompt=data.meta.nav_prompt.clone()
                        entries=layout.entries()
                        selected=selected.slug
                    />
                </aside>
            }
            .into_any()),
            None,
        ),
        Layout::Tabs => (
            None,
            Some(view! { <TabBar entries=layout.entries() selected=selected.slug /> }.into_any()),
        ),
    };

    let panels = panels
        .into_iter()
        .map(|entry| {
            let active = entry.slug == selected.slug;
            view! {
                <SectionPanel
                    entry=entry
                    active=active
                    data=data.clone()
                    assets=assets.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{title.clone()}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class=shell_class>
                    {sidebar}
                    <main class="app-main">
                        <header class="app-header">
                            <h1>{title}</h1>
                            {tab_bar}
                        </header>
                        <div class="app-content">
                            {panels}
                        </div>
                        <footer class="app-footer">{footer}</footer>
                    </main>
                </div>

                <ReportScripts chart_assets=chart_assets />
            </body>
        </html>
    }
}

/// ECharts bundle plus page interactivity
#[component]
fn ReportScripts(chart_assets: ChartAssets) -> impl IntoView {
    let has_echarts = !chart_assets.echarts_path.is_empty();

    view! {
        {has_echarts.then(|| view! {
            <script src=chart_assets.echarts_path.clone()></script>
        })}
        <script>{APP_SCRIPT}</script>
    }
}

/// Application logic (panel switching, lazy chart init, resize)
const APP_SCRIPT: &str = r#"
(() => {
  // 0. Charts - initialised only once their panel is visible
  const initCharts = (root) => {
      if (typeof echarts === 'undefined') {
          return;
      }
      root.querySelectorAll('.chart[data-chart-option]').forEach(el => {
          if (el.dataset.ready === 'true' || el.offsetParent === null) {
              return;
          }
          try {
              const option = JSON.parse(el.dataset.chartOption);
              el.innerHTML = '';
              echarts.init(el).setOption(option);
              el.dataset.ready = 'true';
          } catch (err) {
              console.error('[lca-report] chart init failed', el.id, err);
          }
      });
  };

  // 1. Panel switching - only for panels present in this document.
  //    Links to absent panels fall through to a server round-trip.
  const activate = (slug) => {
      const target = document.querySelector(`.tab-panel[data-panel="${slug}"]`);
      if (!target) {
          return false;
      }
      document.querySelectorAll('.tab-panel[data-panel]').forEach(p => {
          p.classList.toggle('active', p === target);
      });
      document.querySelectorAll('[data-tab]').forEach(link => {
          const on = link.dataset.tab === slug;
          link.classList.toggle('active', on);
          link.setAttribute(link.getAttribute('role') === 'tab' ? 'aria-selected' : 'aria-checked', on ? 'true' : 'false');
      });
      initCharts(target);
      return true;
  };

  document.querySelectorAll('[data-tab]').forEach(link => {
      link.addEventListener('click', (ev) => {
          if (activate(link.dataset.tab)) {
              ev.preventDefault();
              try {
                  history.replaceState(null, '', link.getAttribute('href'));
              } catch (_) {
                  // file:// documents may refuse history updates
              }
          }
      });
  });

  // 2. Initial selection from ?section=
  const requested = new URLSearchParams(window.location.search).get('section');
  if (!requested || !activate(requested)) {
      initCharts(document);
  }

  // 3. Resize
  window.addEventListener('resize', () => {
      if (typeof echarts === 'undefined') {
          return;
      }
      document.querySelectorAll('.chart[data-ready="true"]').forEach(el => {
          const chart = echarts.getInstanceByDom(el);
          if (chart) {
              chart.resize();
          }
      });
  });
})();
"#;

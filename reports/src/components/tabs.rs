//! Tab navigation components

use leptos::prelude::*;

use super::{section_icon, Icon};
use crate::nav::NavEntry;

/// Tab bar with one link per navigation entry
#[component]
pub fn TabBar(entries: &'static [NavEntry], selected: &'static str) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {entries.iter().map(|entry| {
                let active = entry.slug == selected;
                let class = if active { "tab-btn active" } else { "tab-btn" };
                view! {
                    <a
                        class=class
                        href=format!("?section={}", entry.slug)
                        data-tab=entry.slug
                        role="tab"
                        aria-selected=aria_flag(active)
                    >
                        <Icon path=section_icon(entry.section) size="16" class="icon-sm" />
                        {entry.label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

/// Sidebar radio list ("Jump to Section:")
#[component]
pub fn SidebarNav(
    title: String,
    prompt: String,
    entries: &'static [NavEntry],
    selected: &'static str,
) -> impl IntoView {
    view! {
        <div class="sidebar-header">
            <h2>{title}</h2>
        </div>
        <p class="nav-prompt">{prompt.clone()}</p>
        <nav class="sidebar-nav" role="radiogroup" aria-label=prompt>
            {entries.iter().map(|entry| {
                let active = entry.slug == selected;
                let class = if active { "nav-item active" } else { "nav-item" };
                view! {
                    <a
                        class=class
                        href=format!("?section={}", entry.slug)
                        data-tab=entry.slug
                        role="radio"
                        aria-checked=aria_flag(active)
                    >
                        <span class="radio-dot"></span>
                        <Icon path=section_icon(entry.section) size="16" class="icon-sm" />
                        {entry.label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

fn aria_flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

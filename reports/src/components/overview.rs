//! Project overview: intro sentence and expanders

use leptos::prelude::*;

use super::{Icon, RichText, ICON_CARET_DOWN};
use crate::content::OverviewContent;
use crate::types::TextBlock;

/// Overview panel body
#[component]
pub fn OverviewPanel(content: OverviewContent) -> impl IntoView {
    view! {
        <p class="lead">{content.intro}</p>
        <div class="expander-group">
            {content.blocks.into_iter().map(|block| {
                view! { <Expander block=block /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Collapsible text block, closed by default
#[component]
fn Expander(block: TextBlock) -> impl IntoView {
    let items = block.items;
    view! {
        <details class="expander">
            <summary>
                <Icon path=ICON_CARET_DOWN size="14" class="expander-caret" />
                {block.title}
            </summary>
            <div class="expander-body">
                <p><RichText text=block.body /></p>
                {(!items.is_empty()).then(|| view! {
                    <ul>
                        {items.into_iter().map(|item| view! { <li><RichText text=item /></li> }).collect::<Vec<_>>()}
                    </ul>
                })}
            </div>
        </details>
    }
}

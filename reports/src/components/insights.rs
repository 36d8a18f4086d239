//! Key insights panel component

use leptos::prelude::*;
use crate::types::Insight;
use crate::components::{Icon, RichText, ICON_LIGHTNING};

/// Panel listing the narrative insight bullets
#[component]
pub fn InsightsPanel(insights: Vec<Insight>) -> impl IntoView {
    view! {
        <ul class="insight-list">
            {insights.into_iter().map(|insight| {
                view! {
                    <li class="insight-item">
                        <div class="insight-icon">
                            <Icon path=ICON_LIGHTNING color="#1995AD" />
                        </div>
                        <div class="insight-content">
                            <strong>{insight.title}</strong>
                            <p><RichText text=insight.message /></p>
                        </div>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

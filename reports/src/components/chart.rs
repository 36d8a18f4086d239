//! Chart container component
//!
//! The option JSON rides along in a data attribute; the page script hands
//! it to ECharts once the panel is visible.

use crate::charts::ChartSpec;
use leptos::prelude::*;

/// Container for one ECharts chart
#[component]
pub fn ChartContainer(chart: ChartSpec) -> impl IntoView {
    view! {
        <h3>{chart.title}</h3>
        <div
            class="chart"
            id=chart.id
            style=format!("height:{}", chart.height)
            data-chart-option=chart.option_json
        >
            <div class="chart-empty">"Chart unavailable: the ECharts bundle was not loaded."</div>
        </div>
    }
}

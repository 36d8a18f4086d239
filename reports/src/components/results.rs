//! LCA results: process table and charts

use leptos::prelude::*;

use super::ChartContainer;
use crate::content::ResultsContent;
use crate::nav::Part;
use crate::types::ProcessRecord;

/// Results panel body; `part` picks table, charts, or both
#[component]
pub fn ResultsPanel(content: ResultsContent, part: Part) -> impl IntoView {
    let ResultsContent {
        processes,
        pie,
        bar,
    } = content;

    view! {
        {part.shows_table().then(|| view! {
            <h3>"Process-Level LCA Data"</h3>
            <ProcessTable rows=processes />
        })}
        {part.shows_charts().then(|| view! {
            <ChartContainer chart=pie />
            <ChartContainer chart=bar />
        })}
    }
}

/// Process-level GWP, energy and water figures
#[component]
pub fn ProcessTable(rows: Vec<ProcessRecord>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Process"</th>
                    <th>"GWP (kg CO₂-eq/kg)"</th>
                    <th>"Energy Demand (MJ/kg)"</th>
                    <th>"Water Usage (L/kg)"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| {
                    view! {
                        <tr>
                            <td>{row.name}</td>
                            <td class="num">{format!("{:.2}", row.gwp)}</td>
                            <td class="num">{format!("{:.1}", row.energy_demand)}</td>
                            <td class="num">{format!("{:.0}", row.water_usage)}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

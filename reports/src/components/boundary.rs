//! System boundary diagram and inventory table

use leptos::prelude::*;

use super::{Icon, ICON_WARNING_CIRCLE};
use crate::content::{DiagramSlot, SystemBoundaryContent};
use crate::types::InventoryItem;

/// System boundary panel body.
///
/// A missing diagram turns into an inline notice; the table always renders.
#[component]
pub fn SystemBoundaryPanel(content: SystemBoundaryContent) -> impl IntoView {
    let diagram = match content.diagram {
        DiagramSlot::Image { diagram, caption } => view! {
            <figure class="diagram">
                <img src=diagram.src alt=caption.clone() />
                <figcaption>{caption}</figcaption>
            </figure>
        }
        .into_any(),
        DiagramSlot::Notice(text) => view! {
            <div class="notice notice-error" role="alert">
                <Icon path=ICON_WARNING_CIRCLE color="#dc2626" />
                <span>{text}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <h3>"System Boundary Diagram"</h3>
        {diagram}
        <h3>"Energy & Material Inputs"</h3>
        <InventoryTable items=content.inventory />
    }
}

/// Energy & material inputs per kg Bio-SAC
#[component]
pub fn InventoryTable(items: Vec<InventoryItem>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Input Category"</th>
                    <th>"Item"</th>
                    <th>"Quantity per kg Bio-SAC"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|row| {
                    view! {
                        <tr>
                            <td>{row.category.label()}</td>
                            <td>{row.item}</td>
                            <td class="num">{row.quantity_per_kg}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

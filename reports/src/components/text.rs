//! Inline text with `**bold**` runs

use leptos::prelude::*;

use crate::types::emphasis_spans;

/// Narrative text; emphasised runs become `<strong>`
#[component]
pub fn RichText(text: String) -> impl IntoView {
    emphasis_spans(&text)
        .into_iter()
        .map(|span| {
            if span.strong {
                view! { <strong>{span.text}</strong> }.into_any()
            } else {
                span.text.into_any()
            }
        })
        .collect::<Vec<_>>()
}

use leptos::prelude::*;

const SVG_ATTRS: (&str, &str) = ("0 0 24 24", "currentColor");

/// Инлайн-иконка (контур, 16px)
pub fn icon(name: &str) -> AnyView {
    let (view_box, stroke) = SVG_ATTRS;
    let paths = match name {
        "campaigns" => view! {
            <path d="M3 11v2a1 1 0 0 0 1 1h3l5 4V6L7 10H4a1 1 0 0 0-1 1z"/>
            <path d="M16 8a5 5 0 0 1 0 8"/>
        }
        .into_any(),
        "products" => view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
        }
        .into_any(),
        "plus" => view! {
            <line x1="12" y1="5" x2="12" y2="19"/>
            <line x1="5" y1="12" x2="19" y2="12"/>
        }
        .into_any(),
        "refresh" => view! {
            <polyline points="23 4 23 10 17 10"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }
        .into_any(),
        "delete" => view! {
            <polyline points="3 6 5 6 21 6"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
        }
        .into_any(),
        "edit" => view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }
        .into_any(),
        "check" => view! { <polyline points="20 6 9 17 4 12"/> }.into_any(),
        "x" => view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }
        .into_any(),
        "chevron-left" => view! { <polyline points="15 18 9 12 15 6"/> }.into_any(),
        "chevron-right" => view! { <polyline points="9 18 15 12 9 6"/> }.into_any(),
        _ => view! { <circle cx="12" cy="12" r="10"/> }.into_any(),
    };

    view! {
        <svg width="16" height="16" viewBox=view_box fill="none" stroke=stroke stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

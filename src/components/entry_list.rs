//! Loaded-entry browser.
//!
//! One button per decoded entry; clicking selects the entry for the viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::icons as ic;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/entry_list.module.css");

#[component]
pub fn EntryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let takeout = ctx.takeout;

    let count = Signal::derive(move || takeout.entries.with(|e| e.len()));
    let names = Signal::derive(move || {
        takeout
            .entries
            .with(|entries| entries.iter().map(|e| e.name.clone()).collect::<Vec<_>>())
    });

    view! {
        <section class=css::card>
            <h2 class=css::cardTitle>"Files"</h2>
            <p class=css::cardDescription>
                {move || {
                    let n = count.get();
                    format!("{} file{} found", n, if n == 1 { "" } else { "s" })
                }}
            </p>
            <div class=css::list role="listbox" aria-label="Decoded files">
                <For
                    each=move || names.get()
                    key=|name| name.clone()
                    children=move |name| view! { <EntryButton name=name /> }
                />
            </div>
        </section>
    }
}

#[component]
fn EntryButton(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let takeout = ctx.takeout;

    let display_name = name.clone();
    let name_for_select = name.clone();
    let is_selected = Signal::derive(move || {
        takeout
            .selection
            .with(|s| s.as_deref() == Some(name.as_str()))
    });

    let handle_click = move |_: leptos::ev::MouseEvent| {
        takeout.select(&name_for_select);
    };

    view! {
        <button
            class=move || {
                if is_selected.get() {
                    format!("{} {}", css::entry, css::entrySelected)
                } else {
                    css::entry.to_string()
                }
            }
            on:click=handle_click
        >
            <span class=css::entryIcon><Icon icon=ic::FILE_TEXT /></span>
            <span class=css::entryName>{display_name}</span>
        </button>
    }
}

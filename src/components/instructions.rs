//! Stateless instructions overlay.
//!
//! Fully independent of the takeout state: a button that opens a dialog
//! embedding the data-donation instructions page.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::icons as ic;
use crate::config::INSTRUCTIONS_URL;

stylance::import_crate_style!(css, "src/components/instructions.module.css");

#[component]
pub fn Instructions() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button class=css::trigger on:click=move |_| set_open.set(true)>
            "Instructions"
        </button>

        <Show when=move || open.get()>
            <div class=css::overlay on:click=move |_| set_open.set(false)>
                <div class=css::dialog on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <header class=css::dialogHeader>
                        <h2 class=css::dialogTitle>"Instructions"</h2>
                        <button class=css::closeButton on:click=move |_| set_open.set(false)>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>
                    <iframe
                        src=INSTRUCTIONS_URL
                        title="Data Donation Instructions"
                        class=css::frame
                    />
                </div>
            </div>
        </Show>
    }
}

//! Upload card: file picker plus drag-and-drop.
//!
//! Both gestures funnel into `TakeoutState::load`, which owns validation and
//! error reporting; this component only renders the loading and error states.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use super::icons as ic;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/upload.module.css");

#[component]
pub fn UploadCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let takeout = ctx.takeout;

    let loading = takeout.loading;
    let error = takeout.error;

    let on_change = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            takeout.load(file);
        }
        // Reset so selecting the same file again re-triggers the change event.
        input.set_value("");
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            takeout.load(file);
        }
    };

    view! {
        <section class=css::card>
            <h2 class=css::cardTitle>"Load Takeout File"</h2>
            <p class=css::cardDescription>
                "Load the export file you downloaded from the social media site. "
                "It is processed on your computer and never uploaded."
            </p>

            <div class=css::dropZone on:dragover=on_drag_over on:drop=on_drop>
                <Show
                    when=move || loading.get()
                    fallback=move || view! {
                        <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
                        <p class=css::hint>
                            "Drag & drop a zip file here, or click to browse"
                        </p>
                        <label class=css::browseButton>
                            "Browse Files"
                            <input
                                type="file"
                                accept=".zip,.json"
                                class=css::hiddenInput
                                on:change=on_change
                            />
                        </label>
                    }
                >
                    <span class=css::dropIcon><Icon icon=ic::ARCHIVE /></span>
                    <p class=css::hint>"Processing..."</p>
                </Show>
            </div>

            <Show when=move || error.with(|e| e.is_some())>
                <div class=css::error>
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </section>
    }
}

//! Main page layout.
//!
//! Two-column layout: upload card and entry list on the left, viewer card on
//! the right. Presentational glue only; all operations go through
//! [`TakeoutState`](crate::app::TakeoutState) in the AppContext.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::entry_list::EntryList;
use super::icons as ic;
use super::instructions::Instructions;
use super::upload::UploadCard;
use super::viewer::ViewerCard;
use crate::app::AppContext;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Root page component.
#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_entries = Signal::derive(move || ctx.takeout.entries.with(|e| !e.is_empty()));

    view! {
        <main class=css::page>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <Instructions />
            </header>

            <div class=css::notice>
                <span class=css::noticeIcon><Icon icon=ic::INFO /></span>
                <p>
                    "Download your takeout data from the platform, then load it in the "
                    "\"Load Takeout File\" box. You can then download the structure file "
                    "and mail it to the researchers. The structure file contains only "
                    "keys and value types, never the content of your posts or messages."
                </p>
            </div>

            <div class=css::grid>
                <div class=css::sidebar>
                    <UploadCard />
                    <Show when=move || has_entries.get()>
                        <EntryList />
                    </Show>
                </div>
                <Show when=move || has_entries.get()>
                    <ViewerCard />
                </Show>
            </div>
        </main>
    }
}

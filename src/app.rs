//! Root application module.
//!
//! Contains the main App component, AppContext definition, TakeoutState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Page;
use crate::config;
use crate::core::error::LoadError;
use crate::core::{StructureReport, extract_entries};
use crate::models::TakeoutEntry;
use crate::utils::{dom, file::read_file_bytes};

// ============================================================================
// TakeoutState
// ============================================================================

/// Session state for the loaded takeout, managed with Leptos signals.
///
/// Owns the decoded entry collection, the active selection, a loading flag,
/// and an optional user-visible error. Entries are replaced wholesale on each
/// load; there is no incremental update.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TakeoutState {
    /// Decoded entries in archive enumeration order.
    pub entries: RwSignal<Vec<TakeoutEntry>>,
    /// Name of the entry currently displayed; `None` when nothing is loaded.
    pub selection: RwSignal<Option<String>>,
    /// Whether a load is in flight.
    pub loading: RwSignal<bool>,
    /// User-visible error message from the last failed operation.
    pub error: RwSignal<Option<String>>,
    /// Monotonic load token: a completion whose token is stale is discarded,
    /// so an older load can never clobber a newer one's state.
    generation: RwSignal<u64>,
}

impl TakeoutState {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            selection: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Load a user-supplied file, replacing all current state.
    ///
    /// An unsupported extension fails validation immediately: the error is
    /// set and the existing entries are left untouched. Otherwise the state
    /// is reset and extraction runs on the event loop; on success the
    /// selection defaults to the first entry.
    pub fn load(&self, file: web_sys::File) {
        let name = file.name();
        if crate::models::SourceKind::from_path(&name).is_none() {
            self.error.set(Some(LoadError::UnsupportedFile.to_string()));
            return;
        }

        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        self.error.set(None);
        self.entries.set(Vec::new());
        self.selection.set(None);

        let state = *self;
        spawn_local(async move {
            let result = match read_file_bytes(&file).await {
                Ok(bytes) => extract_entries(&name, &bytes),
                Err(e) => Err(e),
            };
            state.finish_load(generation, result);
        });
    }

    /// Apply a completed load unless a newer load has superseded it.
    fn finish_load(&self, generation: u64, result: Result<Vec<TakeoutEntry>, LoadError>) {
        if self.generation.get_untracked() != generation {
            return;
        }
        match result {
            Ok(entries) => {
                self.selection.set(entries.first().map(|e| e.name.clone()));
                self.entries.set(entries);
            }
            Err(e) => {
                self.entries.set(Vec::new());
                self.selection.set(None);
                self.error.set(Some(e.to_string()));
            }
        }
        self.loading.set(false);
    }

    /// Select an entry by name; no-op when the name is not present.
    pub fn select(&self, name: &str) {
        let known = self
            .entries
            .with_untracked(|entries| entries.iter().any(|e| e.name == name));
        if known {
            self.selection.set(Some(name.to_string()));
        }
    }

    /// The currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<TakeoutEntry> {
        let selection = self.selection.get();
        self.entries.with(|entries| {
            entries
                .iter()
                .find(|e| Some(&e.name) == selection.as_ref())
                .cloned()
        })
    }

    /// Build the structure report over all entries and hand it to the
    /// browser as a download. Content never leaves the machine; the report
    /// holds keys and type tags only.
    pub fn export_structure(&self) {
        let report = self
            .entries
            .with_untracked(|entries| StructureReport::build(entries, config::ARRAY_POLICY));
        if report.is_empty() {
            return;
        }
        match report.to_pretty_json() {
            Ok(text) => {
                if !dom::download_json_file(config::EXPORT_FILE_NAME, &text) {
                    self.error
                        .set(Some("Could not start the download".to_string()));
                }
            }
            Err(e) => {
                self.error
                    .set(Some(format!("Could not serialize the structure: {}", e)));
            }
        }
    }
}

impl Default for TakeoutState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// The presentation layer owns the state and passes this handle into core
/// operations; nothing is mutated through module-level globals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded takeout session state.
    pub takeout: TakeoutState,
}

impl AppContext {
    /// Creates a new application context with empty state.
    pub fn new() -> Self {
        Self {
            takeout: TakeoutState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Page component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #525252; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #b91c1c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Page />
        </ErrorBoundary>
    }
}

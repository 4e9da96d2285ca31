//! Viewer card: structure tree and raw content tabs, plus the export button.
//!
//! The structure tab renders the selected entry's [`ShapeDescriptor`]
//! alongside its source value, so array nodes can show their element count;
//! the raw tab shows the decoded content for local inspection only.

use leptos::prelude::*;
use leptos_icons::Icon;
use serde_json::Value;

use super::icons as ic;
use crate::app::AppContext;
use crate::config;
use crate::core::infer_shape;
use crate::models::ShapeDescriptor;

stylance::import_crate_style!(css, "src/components/viewer.module.css");

/// Active viewer tab.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewerTab {
    Structure,
    Raw,
}

#[component]
pub fn ViewerCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let takeout = ctx.takeout;

    let (tab, set_tab) = signal(ViewerTab::Structure);
    let selected = Signal::derive(move || takeout.selected_entry());
    let selected_name = Signal::derive(move || {
        takeout
            .selection
            .with(|s| s.clone().unwrap_or_else(|| "No file selected".to_string()))
    });

    let on_export = move |_: leptos::ev::MouseEvent| {
        takeout.export_structure();
    };

    let tab_class = move |this: ViewerTab| {
        if tab.get() == this {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <section class=css::card>
            <header class=css::cardHeader>
                <div>
                    <h2 class=css::cardTitle>"Takeout Explorer"</h2>
                    <p class=css::cardDescription>{selected_name}</p>
                </div>
                <button class=css::exportButton on:click=on_export>
                    <span class=css::buttonIcon><Icon icon=ic::DOWNLOAD /></span>
                    "Download Structure"
                </button>
            </header>

            <div class=css::tabs role="tablist">
                <button class=move || tab_class(ViewerTab::Structure)
                    on:click=move |_| set_tab.set(ViewerTab::Structure)>
                    "Structure"
                </button>
                <button class=move || tab_class(ViewerTab::Raw)
                    on:click=move |_| set_tab.set(ViewerTab::Raw)>
                    "Raw JSON"
                </button>
            </div>

            {move || match tab.get() {
                ViewerTab::Structure => view! {
                    <div class=css::pane>
                        {move || selected.get().map(|entry| {
                            let shape = infer_shape(&entry.content, config::ARRAY_POLICY);
                            shape_view(&entry.content, &shape)
                        })}
                    </div>
                }
                .into_any(),
                ViewerTab::Raw => view! {
                    <div class=css::pane>
                        <div class=css::rawNotice>
                            "The raw content is displayed for your information only. "
                            "It is not included in the structure file and never leaves "
                            "your computer."
                        </div>
                        <pre class=css::raw>
                            {move || {
                                selected
                                    .get()
                                    .and_then(|entry| {
                                        serde_json::to_string_pretty(&entry.content).ok()
                                    })
                                    .unwrap_or_default()
                            }}
                        </pre>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

/// Recursively render a shape descriptor as a nested list.
///
/// The source value travels alongside the descriptor: the descriptor alone
/// carries no element counts, so array labels read the length from the value.
fn shape_view(value: &Value, shape: &ShapeDescriptor) -> AnyView {
    match shape {
        ShapeDescriptor::Array(items) => {
            let elements = value.as_array();
            let label = array_label(value, items);
            let children = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let element = elements
                        .and_then(|a| a.get(index))
                        .unwrap_or(&Value::Null);
                    let child = shape_view(element, item);
                    view! { <li class=css::node>{child}</li> }.into_any()
                })
                .collect::<Vec<_>>();
            view! {
                <span class=css::kind>{label}</span>
                <ul class=css::branch>{children}</ul>
            }
            .into_any()
        }
        ShapeDescriptor::Object(fields) => {
            let members = value.as_object();
            let rows = fields
                .iter()
                .map(|(key, field)| {
                    let element = members
                        .and_then(|m| m.get(key))
                        .unwrap_or(&Value::Null);
                    let child = shape_view(element, field);
                    let key = key.clone();
                    view! {
                        <li class=css::node>
                            <span class=css::key>{key}</span>
                            {child}
                        </li>
                    }
                    .into_any()
                })
                .collect::<Vec<_>>();
            view! { <ul class=css::branch>{rows}</ul> }.into_any()
        }
        leaf => {
            let tag = leaf.tag().unwrap_or_default();
            view! { <span class=css::kind>{tag}</span> }.into_any()
        }
    }
}

/// Label for an array node, showing the element count of the source array.
///
/// Falls back to the descriptor's child count when the value is not an array,
/// which only happens if the descriptor and value are mismatched.
fn array_label(value: &Value, items: &[ShapeDescriptor]) -> String {
    let len = value.as_array().map_or(items.len(), |a| a.len());
    format!("Array[{len}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArrayPolicy;
    use serde_json::json;

    #[test]
    fn test_array_label_reads_length_from_source_value() {
        let value = json!([1, 2, 3]);
        let ShapeDescriptor::Array(items) = infer_shape(&value, ArrayPolicy::SampleFirst) else {
            panic!("expected an array descriptor");
        };
        // Sampling keeps one child descriptor, but the label shows the
        // source element count.
        assert_eq!(items.len(), 1);
        assert_eq!(array_label(&value, &items), "Array[3]");
    }

    #[test]
    fn test_array_label_falls_back_to_descriptor_children() {
        let items = vec![ShapeDescriptor::Number, ShapeDescriptor::Number];
        assert_eq!(array_label(&Value::Null, &items), "Array[2]");
    }
}

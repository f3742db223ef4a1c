#![allow(non_snake_case)]

use super::*;

use crate::expense::ExpenseRecord;
use crate::chart::{donut_arcs, format_currency, tooltip_label, ChartData, DonutGeometry};
use crate::load::{run_attempt, AttemptTracker, LoadState};
use crate::source::ExpenseSource;

/// Fetches expenses once per mount (and again if `source` changes) and draws
/// them.
#[component]
pub fn DemoChart<S: ExpenseSource + Clone + PartialEq + 'static>(source: S) -> Element {
    let state = use_signal(LoadState::default);
    let tracker = use_hook(AttemptTracker::default);

    use_drop({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    use_effect(use_reactive((&source,), move |(source,)| {
        let guard = tracker.begin();
        let mut state = state;

        spawn(async move {
            run_attempt(&source, &guard, |next| state.set(next)).await;
        });
    }));

    rsx! {
        ChartPanel { state: state() }
    }
}

#[component]
pub fn ChartPanel(state: LoadState) -> Element {
    let records: &[ExpenseRecord] = match &state {
        LoadState::Loaded(records) => records.as_slice(),
        _ => &[],
    };
    let data = ChartData::from_records(records);
    let total = match &state {
        LoadState::Loaded(_) => format_currency(data.total),
        _ => "—".to_string(),
    };

    rsx! {
        div {
            class: "rounded-2xl border border-gray-200 p-6 bg-white shadow-sm",
            div {
                class: "grid gap-6 md:grid-cols-[1fr,260px] items-center",

                div {
                    class: "h-80 md:h-96 flex items-center justify-center",
                    {match &state {
                        LoadState::Failed(message) => rsx! {
                            div {
                                role: "alert",
                                class: "rounded-xl border border-red-200 bg-red-50 p-4 text-sm text-red-700",
                                p { class: "font-medium", "Could not load spending data" }
                                p { class: "mt-1", "{message}" }
                            }
                        },
                        LoadState::Loading => rsx! {
                            div {
                                class: "flex flex-col items-center",
                                Donut { data: ChartData::placeholder() }
                                p { class: "mt-2 text-sm text-gray-500", "Loading spending data…" }
                            }
                        },
                        LoadState::Loaded(_) => rsx! {
                            Donut { data: data.clone() }
                            Legend { data: data.clone() }
                        },
                    }}
                }

                div {
                    class: "space-y-2",
                    h3 { class: "text-lg font-semibold", "Spending by Category (30 days)" }
                    p {
                        class: "text-sm text-gray-600",
                        "Quick snapshot of where money went. Categories and amounts are mock data for the demo."
                    }
                    div {
                        class: "mt-4 rounded-xl border p-4",
                        div { class: "text-sm text-gray-600", "Total spend" }
                        div { class: "text-2xl font-bold", "{total}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Donut(data: ChartData) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let geometry = DonutGeometry::default();
    let arcs = donut_arcs(&data, geometry);
    let readout = hovered().and_then(|idx| data.tooltip(idx));

    rsx! {
        div {
            class: "ollie-donut relative w-64 h-64 md:w-72 md:h-72",
            role: "img",
            aria_label: "Spending by category chart",

            svg {
                view_box: geometry.view_box(),
                width: "100%",
                height: "100%",
                for arc in arcs {
                    path {
                        d: "{arc.path}",
                        fill: arc.color,
                        fill_rule: "evenodd",
                        class: if arc.index.is_some() && hovered() == arc.index { "active" },
                        onmouseenter: move |_| hovered.set(arc.index),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
            }

            if let Some(text) = readout {
                div {
                    role: "tooltip",
                    class: "absolute inset-0 flex items-center justify-center pointer-events-none text-sm font-medium text-gray-900",
                    "{text}"
                }
            }
        }
    }
}

#[component]
fn Legend(data: ChartData) -> Element {
    rsx! {
        ul {
            class: "ml-6 space-y-3 text-xs text-gray-900",
            aria_label: "Chart legend",
            for slice in data.slices() {
                li {
                    class: "flex items-center",
                    title: tooltip_label(slice.label, slice.value),
                    span { class: "ollie-legend-dot", background_color: slice.color }
                    "{slice.label}"
                }
            }
        }
    }
}

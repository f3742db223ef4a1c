#![allow(non_snake_case)]

use super::*;

use crate::chart::{format_currency, ChartData};
use crate::expense::sample_records;

#[component]
pub fn Hero() -> Element {
    let sample = sample_records();
    let total = ChartData::from_records(&sample).total;

    rsx! {
        section {
            class: "mx-auto max-w-6xl px-4 pt-16 pb-20 md:pt-24",
            aria_labelledby: "hero-title",

            div {
                class: "grid gap-10 md:grid-cols-2 md:items-center",

                div {
                    h1 {
                        id: "hero-title",
                        class: "text-ollie-black text-4xl md:text-5xl font-bold leading-tight tracking-tight",
                        "Money help that talks like a friend, not a bank."
                    }
                    p {
                        class: "mt-4 text-gray-600 text-base md:text-lg",
                        "Ollie helps students build healthy money habits with simple tracking, clear visuals, and gentle nudges. No jargon, no overwhelm."
                    }
                    div {
                        class: "mt-6 flex flex-col sm:flex-row gap-3",
                        a {
                            href: "#demo",
                            class: "inline-flex items-center justify-center px-5 py-3 rounded-lg bg-black text-white hover:opacity-90 hover:scale-105 transition-transform",
                            aria_label: "See the spending demo section",
                            "See the demo"
                        }
                        a {
                            href: "#features",
                            class: "inline-flex items-center justify-center px-5 py-3 rounded-lg border border-gray-300 hover:bg-gray-50 hover:scale-105 transition-transform",
                            "Learn more"
                        }
                    }
                    p {
                        class: "mt-3 text-xs text-gray-500",
                        "Private by default. Your data stays yours."
                    }
                }

                div {
                    class: "rounded-2xl border border-gray-200 p-6 shadow-sm",
                    div {
                        class: "flex items-center justify-between",
                        span { class: "text-sm font-medium text-gray-900", "This month" }
                        span { class: "text-xs text-gray-500", "sample data" }
                    }
                    ul {
                        class: "mt-4 space-y-3 text-sm",
                        for record in sample {
                            li {
                                class: "flex justify-between",
                                span { "{record.category}" }
                                span { class: "font-medium", {format_currency(record.amount)} }
                            }
                        }
                    }
                    div {
                        class: "mt-6 flex items-center justify-between border-t pt-4",
                        span { class: "text-sm text-gray-600", "Total spend" }
                        span { class: "text-base font-semibold", {format_currency(total)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_card_lists_amounts_and_total() {
        let mut dom = VirtualDom::new(Hero);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Money help that talks like a friend"));
        assert!(html.contains("$124.50"));
        assert!(html.contains("Uni Supplies"));
        assert!(html.contains("$228.69"));
        assert_eq!(
            format_currency(ChartData::from_records(&sample_records()).total),
            "$228.69"
        );
        assert!(html.find("Food").unwrap() < html.find("Transport").unwrap());
    }
}

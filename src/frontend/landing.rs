#![allow(non_snake_case)]

use super::*;

use crate::source::DataSource;

#[component]
pub fn Landing() -> Element {
    let config = use_context::<Config>();

    rsx! {
        Hero {}

        { blurb_section("features", "Features", "We'll wire this next.") }

        section {
            id: "demo",
            class: "mx-auto max-w-6xl px-4 py-16 bg-gray-50",
            h2 { class: "text-2xl md:text-3xl font-semibold mb-6", "Demo" }
            p {
                class: "text-gray-600 mb-6",
                "Here's a peek at how Ollie helps you visualize spending."
            }
            DemoChart::<DataSource> { source: config.source() }
        }

        { blurb_section("roadmap", "Roadmap", "We'll drop the list after the chart.") }
        { blurb_section("faq", "FAQ", "Coming soon.") }
    }
}

fn blurb_section(id: &str, title: &str, blurb: &str) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "mx-auto max-w-6xl px-4 py-16",
            h2 { class: "text-2xl md:text-3xl font-semibold", "{title}" }
            p { class: "mt-2 text-gray-600", "{blurb}" }
        }
    }
}

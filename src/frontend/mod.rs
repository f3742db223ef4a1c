#![allow(non_snake_case)]

use crate::config::Config;
use dioxus::prelude::*;
use tracing::info;

mod demo;
mod hero;
mod landing;

use demo::*;
use hero::*;
use landing::*;

pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::load();
        info!(api = %config.api_url, mode = ?config.demo_data, "config loaded");
        config
    });

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Shell() -> Element {
    rsx! {
        div {
            a {
                href: "#main",
                class: "sr-only focus:not-sr-only focus:absolute focus:top-2 focus:left-2 bg-black text-white px-3 py-2 rounded",
                "Skip to content"
            }

            { header() }

            main {
                id: "main",
                Outlet::<Route> {}
            }

            { footer() }
        }
    }
}

const NAV: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#roadmap", "Roadmap"),
    ("#faq", "FAQ"),
];

pub fn header() -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-10 backdrop-blur bg-white/70 border-b",
            div {
                class: "mx-auto max-w-6xl px-4 py-3 flex items-center justify-between",
                a {
                    href: "#",
                    class: "font-bold text-lg",
                    aria_label: "Ollie home",
                    "Ollie"
                }
                nav {
                    class: "space-x-6 text-sm",
                    for (href, label) in NAV {
                        a { href: href, class: "hover:underline", "{label}" }
                    }
                }
            }
        }
    }
}

pub fn footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer {
            class: "border-t",
            div {
                class: "mx-auto max-w-6xl px-4 py-8 text-sm text-gray-500 flex items-center justify-between",
                span { "© {year} Ollie" }
                a { href: "#faq", class: "hover:underline", "Contact" }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            class: "mx-auto max-w-6xl px-4 py-24 text-center",
            h1 { class: "text-3xl font-semibold", "Nothing here" }
            p { class: "mt-2 text-gray-600", "We couldn't find /{path}." }
            Link {
                to: Route::Landing {},
                class: "mt-6 inline-block underline",
                "Back to Ollie"
            }
        }
    }
}

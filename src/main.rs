#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod chart;
mod config;
mod expense;
mod frontend;
mod load;
mod source;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    chart::register();
    launch(frontend::App);
}

//! News Intelligence Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}

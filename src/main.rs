#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod listeners;
mod pages;
mod storage;
mod theme;

fn main() {
    dioxus::logger::initialize_default();

    tracing::info!("Starting archive front end");

    dioxus::launch(app::App);
}

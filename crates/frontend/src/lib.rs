//! Carbon Match - Yew WASM Frontend
//!
//! This crate provides the single-page client: the project table with its
//! derived yield column, the preference form, and the investment input.

mod api;
mod app;
mod components;
mod pages;
mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}

//! Browser test suite for the backdrop lifecycle, run with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use rust_particle_background::ParticleBackground;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mount_attaches_a_non_interactive_full_viewport_canvas() {
    let mut background = ParticleBackground::mount(100).expect("mount failed");

    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .query_selector("canvas")
        .unwrap()
        .expect("backdrop canvas not in the DOM");
    let canvas: web_sys::HtmlCanvasElement = canvas.dyn_into().unwrap();
    let style = canvas.style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");

    assert!(background.is_running());
    assert_eq!(background.particle_count(), 100);

    background.unmount();
}

#[wasm_bindgen_test]
fn resize_keeps_the_particle_count() {
    let mut background = ParticleBackground::mount(40).expect("mount failed");

    background.resize(1024.0, 768.0);
    assert_eq!(background.particle_count(), 40);
    assert!(background.is_running());

    background.unmount();
}

#[wasm_bindgen_test]
fn unmount_is_terminal_and_detaches_the_canvas() {
    let mut background = ParticleBackground::mount(25).expect("mount failed");

    background.unmount();

    assert!(!background.is_running());
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.query_selector("canvas").unwrap().is_none());
}

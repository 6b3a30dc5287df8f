mod utils;

pub mod background;
pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;

pub use crate::background::ParticleBackground;
pub use crate::field::ParticleField;

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// RAII wrapper around console.time / console.timeEnd. Used around the
// one-shot expensive paths (seeding, reseeding on resize), not per frame.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

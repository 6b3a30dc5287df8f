// Full-viewport canvas backdrop. Owns the canvas element, the particle
// field, and the frame/resize callbacks that drive it. Everything runs on
// the UI thread; the only ordering rule is that whichever callback fires
// first runs to completion before the next one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::Timer;

struct Scene {
    field: ParticleField,
    renderer: Renderer,
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    // Cleared exactly once, by unmount. Every queued frame checks it before
    // touching any state.
    running: Rc<Cell<bool>>,
    frame_handle: Rc<Cell<Option<i32>>>,
    frame_closure: FrameClosure,
    resize_closure: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    // Creates the backdrop canvas, seeds the field, and starts the frame
    // loop. Fails only when the host page has no window/document/2d context
    // to mount onto.
    pub fn mount(num_particles: u32) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let (width, height) = viewport_size(&window)?;

        let canvas = create_backdrop_canvas(&document, width, height)?;
        let renderer = Renderer::new(canvas.clone())?;
        let mut field = ParticleField::new(width, height);
        {
            let _timer = Timer::new("ParticleField::initialize_particles");
            field.initialize_particles(num_particles, &mut rand::thread_rng());
        }

        let mut background = ParticleBackground {
            window,
            canvas,
            scene: Rc::new(RefCell::new(Scene { field, renderer })),
            running: Rc::new(Cell::new(true)),
            frame_handle: Rc::new(Cell::new(None)),
            frame_closure: Rc::new(RefCell::new(None)),
            resize_closure: None,
        };
        background.attach_resize_listener()?;
        background.install_frame_loop();
        Ok(background)
    }

    pub fn mount_with_default_count() -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount(ParticleField::DEFAULT_PARTICLE_COUNT)
    }

    // Host-driven resize, same path the window listener takes: resize the
    // backing store and reseed the field into the new bounds.
    pub fn resize(&self, width: f64, height: f64) {
        apply_resize(&self.canvas, &self.scene, width, height);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn particle_count(&self) -> u32 {
        self.scene.borrow().field.particle_count() as u32
    }

    // Terminal. Clears the liveness flag, cancels the pending frame,
    // detaches the resize listener, and removes the canvas. A frame callback
    // that was already queued when this ran sees the cleared flag and does
    // nothing.
    pub fn unmount(&mut self) {
        self.running.set(false);
        if let Some(handle) = self.frame_handle.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        if let Some(closure) = self.resize_closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        if let Some(parent) = self.canvas.parent_node() {
            let _ = parent.remove_child(&self.canvas);
        }
        // The frame closure is left alive on purpose: a frame the browser
        // already queued must land on the liveness check above, not on a
        // dropped closure.
    }
}

impl ParticleBackground {
    fn install_frame_loop(&self) {
        let scene = Rc::clone(&self.scene);
        let running = Rc::clone(&self.running);
        let frame_handle = Rc::clone(&self.frame_handle);
        let next = Rc::clone(&self.frame_closure);
        let window = self.window.clone();

        *self.frame_closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            {
                let scene = &mut *scene.borrow_mut();
                scene.field.update();
                scene.renderer.clear_screen();
                scene.renderer.render_particles(&scene.field);
                scene.renderer.render_links(&scene.field);
            }
            frame_handle.set(schedule_frame(&window, &next));
        }) as Box<dyn FnMut()>));

        self.frame_handle
            .set(schedule_frame(&self.window, &self.frame_closure));
    }

    fn attach_resize_listener(&mut self) -> Result<(), JsValue> {
        let scene = Rc::clone(&self.scene);
        let canvas = self.canvas.clone();
        let window = self.window.clone();

        let closure = Closure::wrap(Box::new(move || {
            let (width, height) = match viewport_size(&window) {
                Ok(dimensions) => dimensions,
                Err(_) => return,
            };
            apply_resize(&canvas, &scene, width, height);
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        self.resize_closure = Some(closure);
        Ok(())
    }
}

// Asks for the next animation frame; returns the cancellation handle. A
// missing closure or a refused request just means no further frames run.
fn schedule_frame(window: &Window, closure: &FrameClosure) -> Option<i32> {
    let closure = closure.borrow();
    let callback = closure.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

fn apply_resize(canvas: &HtmlCanvasElement, scene: &Rc<RefCell<Scene>>, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let _timer = Timer::new("ParticleField::resize");
    scene
        .borrow_mut()
        .field
        .resize(width, height, &mut rand::thread_rng());
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

// The backdrop sits behind all page content and must never swallow pointer
// input meant for the elements above it.
fn create_backdrop_canvas(
    document: &Document,
    width: f64,
    height: f64,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "0")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

#[macro_use]
mod utils;
pub mod canvas;
pub mod color;
pub mod config;
pub mod confetti;
pub mod cursor;
pub mod field;
pub mod particle;
pub mod surface;

use crate::canvas::CanvasSurface;
use crate::confetti::ConfettiBurst;
use crate::cursor::CursorFollower;
use crate::field::ParticleField;
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use utils::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

pub use crate::field::FrameStats;
pub use crate::surface::{DrawCommand, RecordingSurface, Surface};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// The field on the background canvas, confetti on an overlay canvas above the
// page, plus the eased custom cursor. One instance per page, driven by
// whoever calls tick().
#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    overlay: HtmlCanvasElement,
    overlay_surface: CanvasSurface,
    field: ParticleField<ThreadRng>,
    follower: CursorFollower,
    cursor_element: Option<HtmlElement>,
    bursts: Vec<ConfettiBurst>,
    rng: ThreadRng,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn new(canvas_id: &str, cursor_id: Option<String>) -> Result<ParticleBackground, JsValue> {
        let _timer = Timer::new("ParticleBackground::new");
        let window = canvas::window()?;
        let document = canvas::document(&window)?;
        let canvas = canvas::find_or_create_canvas(&document, canvas_id, canvas::BACKGROUND_CSS)?;
        let surface = CanvasSurface::new(&canvas)?;
        let overlay_id = format!("{}-overlay", canvas_id);
        let overlay = canvas::find_or_create_canvas(&document, &overlay_id, canvas::OVERLAY_CSS)?;
        let overlay_surface = CanvasSurface::new(&overlay)?;
        let cursor_element = match cursor_id {
            Some(id) => document
                .get_element_by_id(&id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            None => None,
        };

        let (width, height) = canvas::viewport_size(&window)?;
        for layer in &[&canvas, &overlay] {
            layer.set_width(width as u32);
            layer.set_height(height as u32);
        }
        let field = ParticleField::new(width, height, rand::thread_rng());
        if !field.is_initialized() {
            log!("viewport is {}x{}, deferring particle setup", width, height);
        }

        Ok(ParticleBackground {
            window,
            canvas,
            surface,
            overlay,
            overlay_surface,
            field,
            follower: CursorFollower::new(),
            cursor_element,
            bursts: Vec::new(),
            rng: rand::thread_rng(),
        })
    }

    // Sizing a canvas also resets its drawing state, the next tick redraws it all
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = canvas::viewport_size(&self.window)?;
        for layer in &[&self.canvas, &self.overlay] {
            layer.set_width(width as u32);
            layer.set_height(height as u32);
        }
        self.field.resize(width, height);
        Ok(())
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.field.set_cursor(x, y);
        self.follower.set_target(x, y);
    }

    pub fn burst(&mut self, x: f64, y: f64, count: Option<u32>) {
        let count = count.map_or(ConfettiBurst::DEFAULT_COUNT, |n| n as usize);
        self.bursts.push(ConfettiBurst::new([x, y], count, &mut self.rng));
    }

    pub fn tick(&mut self) {
        #[cfg(feature = "frame-timing")]
        let _timer = Timer::new("ParticleBackground::tick");

        self.field.tick(&mut self.surface);

        let (width, height) = self.field.size();
        for burst in &mut self.bursts {
            burst.step(height);
        }
        self.bursts.retain(|b| !b.is_finished());
        if width > 0.0 && height > 0.0 {
            self.overlay_surface.clear_rect(0.0, 0.0, width, height);
            for burst in &self.bursts {
                burst.draw(&mut self.overlay_surface);
            }
        }

        let [x, y] = self.follower.step();
        if let Some(element) = &self.cursor_element {
            let style = element.style();
            let moved = style
                .set_property("left", &format!("{}px", x))
                .and_then(|_| style.set_property("top", &format!("{}px", y)));
            if let Err(e) = moved {
                console::warn_1(&e);
            }
        }
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn cursor_x(&self) -> f64 {
        self.field.cursor()[0]
    }

    pub fn cursor_y(&self) -> f64 {
        self.field.cursor()[1]
    }

    pub fn follower_x(&self) -> f64 {
        self.follower.pos[0]
    }

    pub fn follower_y(&self) -> f64 {
        self.follower.pos[1]
    }

    pub fn active_bursts(&self) -> usize {
        self.bursts.len()
    }
}

// Returned by start() so the page can still trigger bursts on the running background
#[wasm_bindgen]
pub struct BackgroundHandle {
    background: Rc<RefCell<ParticleBackground>>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    pub fn burst(&self, x: f64, y: f64, count: Option<u32>) {
        self.background.borrow_mut().burst(x, y, count);
    }

    pub fn particle_count(&self) -> usize {
        self.background.borrow().particle_count()
    }
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Builds the background and hooks it to the page: viewport resizes, pointer
/// movement and a requestAnimationFrame loop that runs for the page's lifetime.
#[wasm_bindgen]
pub fn start(canvas_id: &str, cursor_id: Option<String>) -> Result<BackgroundHandle, JsValue> {
    initialize();
    let background = Rc::new(RefCell::new(ParticleBackground::new(canvas_id, cursor_id)?));
    let window = canvas::window()?;
    let document = canvas::document(&window)?;

    {
        let background = background.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Err(e) = background.borrow_mut().resize() {
                console::error_1(&e);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    {
        let background = background.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            background
                .borrow_mut()
                .set_cursor(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    // The closure holds the Rc to itself, which keeps the loop alive forever
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let frame_window = window.clone();
    let looping = background.clone();
    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        looping.borrow_mut().tick();
        if let Some(callback) = frame.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&frame_window, callback) {
                console::error_1(&e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = first.borrow().as_ref() {
        request_animation_frame(&window, callback)?;
    }
    log!("particle background running with {} particles", background.borrow().particle_count());

    Ok(BackgroundHandle { background })
}

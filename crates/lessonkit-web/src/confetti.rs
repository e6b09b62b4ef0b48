//! Canvas renderer for the confetti celebration.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use lessonkit_core::Confetti;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::dom;
use crate::error::{WebError, WebResult};
use crate::markup::page as markup;

/// Full-viewport overlay canvas driving a [`Confetti`] simulation.
pub struct ConfettiCanvas {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    simulation: RefCell<Confetti>,
    frame: RefCell<Option<AnimationFrame>>,
    particles_per_burst: usize,
}

impl ConfettiCanvas {
    /// Use the page's canvas, creating and appending one if there is none.
    pub fn attach(
        document: &Document,
        container: &Element,
        particles_per_burst: usize,
    ) -> WebResult<Rc<Self>> {
        let canvas = match dom::query(container, markup::CANVAS)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                let canvas: HtmlCanvasElement = document
                    .create_element("canvas")?
                    .dyn_into()
                    .map_err(|_| WebError::Js("created element is not a canvas".to_string()))?;
                let style = canvas.style();
                for (property, value) in markup::CANVAS_STYLE {
                    style.set_property(property, value)?;
                }
                container.append_child(&canvas)?;
                canvas
            }
        };

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if context.is_none() {
            log::warn!("No 2d context, confetti disabled");
        }

        // Seed is irrelevant beyond looking different on every page load.
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Ok(Rc::new(Self {
            canvas,
            context,
            simulation: RefCell::new(Confetti::new(seed)),
            frame: RefCell::new(None),
            particles_per_burst,
        }))
    }

    /// Size the canvas to the viewport and add a burst of particles. Joins
    /// the running animation if there is one.
    pub fn burst(self: &Rc<Self>) {
        if self.context.is_none() {
            return;
        }
        let (width, height) = viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        {
            let mut simulation = self.simulation.borrow_mut();
            simulation.resize(width, height);
            simulation.burst(self.particles_per_burst);
        }
        if self.frame.borrow().is_none() {
            self.schedule();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_| this.draw_frame());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn draw_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let Some(ctx) = &self.context else {
            return;
        };
        let active = {
            let mut simulation = self.simulation.borrow_mut();
            ctx.clear_rect(0.0, 0.0, simulation.width(), simulation.height());
            for particle in simulation.particles() {
                ctx.set_fill_style_str(&particle.color());
                ctx.fill_rect(particle.x, particle.y, particle.size, particle.size);
            }
            simulation.step()
        };
        if active {
            self.schedule();
        }
    }
}

fn viewport_size() -> (f64, f64) {
    let Ok(window) = dom::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

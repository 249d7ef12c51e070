//! Deterministic decorative layouts shared between server and browser.
//!
//! The core is the [`Mulberry32`] generator. The layout recipes built on it are pure
//! functions of (seed, count), and the `wasm-bindgen` exports below let the browser run
//! the exact same code the server used, so hydrated markup never disagrees.

mod bit_util;
mod js_export;
pub mod layout;
mod modutil;
mod mulberry32;
mod params;
mod renderer;
pub mod style;
mod wasm_util;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{
    js_export::{to_js_array, ToJsObject},
    layout::{generate_grid_dots, generate_orbs, generate_particles, positions_array},
    wasm_util::{console_log, set_panic_hook},
};

pub use crate::{
    bit_util::to_int32,
    modutil::js_round,
    mulberry32::{create_generator, Mulberry32},
    params::{seed_from_slug, LayoutParams, MAX_COUNT},
};

/// Stateful generator handle for JS callers.
#[wasm_bindgen]
pub struct SeededRandom {
    rng: Mulberry32,
}

#[wasm_bindgen]
impl SeededRandom {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Self {
        set_panic_hook();
        Self {
            rng: Mulberry32::from_js_number(seed),
        }
    }

    pub fn next(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Draws the next `n` values at once.
    pub fn fill(&mut self, n: usize) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&draw_values(&mut self.rng, n)[..])
    }
}

/// Next `n` values, with `n` capped at [`MAX_COUNT`] like every other count from JS.
fn draw_values(rng: &mut Mulberry32, n: usize) -> Vec<f64> {
    rng.by_ref().take(n.min(MAX_COUNT)).collect()
}

/// Returns a `() => number` closure, the same shape as a hand-written mulberry32 in JS.
#[wasm_bindgen(js_name = seededRandom)]
pub fn seeded_random(seed: f64) -> js_sys::Function {
    set_panic_hook();
    let mut rng = Mulberry32::from_js_number(seed);
    Closure::wrap(Box::new(move || rng.next_f64()) as Box<dyn FnMut() -> f64>)
        .into_js_value()
        .unchecked_into()
}

#[wasm_bindgen(js_name = seedFromSlug)]
pub fn seed_from_slug_js(slug: &str) -> i32 {
    seed_from_slug(slug)
}

fn layout_objects<T: ToJsObject>(
    defaults: LayoutParams,
    params: &JsValue,
    generate: fn(i32, usize) -> Vec<T>,
) -> Result<js_sys::Array, JsValue> {
    set_panic_hook();
    let LayoutParams { seed, count } = defaults.with_overrides(params)?;
    to_js_array(&generate(seed, count))
}

fn layout_positions<T: ToJsObject>(
    defaults: LayoutParams,
    params: &JsValue,
    generate: fn(i32, usize) -> Vec<T>,
) -> Result<js_sys::Float64Array, JsValue> {
    let LayoutParams { seed, count } = defaults.with_overrides(params)?;
    Ok(js_sys::Float64Array::from(&positions_array(&generate(seed, count))[..]))
}

fn mount_layout<T: ToJsObject>(
    container: &web_sys::Element,
    defaults: LayoutParams,
    params: &JsValue,
    generate: fn(i32, usize) -> Vec<T>,
) -> Result<usize, JsValue> {
    set_panic_hook();
    let LayoutParams { seed, count } = defaults.with_overrides(params)?;
    let mounted = renderer::mount(container, &generate(seed, count))?;
    console_log!("mounted {} decorations with seed {}", mounted, seed);
    Ok(mounted)
}

#[wasm_bindgen(js_name = orbLayout)]
pub fn orb_layout(params: JsValue) -> Result<js_sys::Array, JsValue> {
    layout_objects(LayoutParams::ORBS, &params, generate_orbs)
}

#[wasm_bindgen(js_name = blogPostOrbLayout)]
pub fn blog_post_orb_layout(slug: &str) -> Result<js_sys::Array, JsValue> {
    layout_objects(LayoutParams::blog_post_orbs(slug), &JsValue::UNDEFINED, generate_orbs)
}

#[wasm_bindgen(js_name = gridDotLayout)]
pub fn grid_dot_layout(params: JsValue) -> Result<js_sys::Array, JsValue> {
    layout_objects(LayoutParams::GRID_DOTS, &params, generate_grid_dots)
}

#[wasm_bindgen(js_name = particleLayout)]
pub fn particle_layout(params: JsValue) -> Result<js_sys::Array, JsValue> {
    layout_objects(LayoutParams::PARTICLES, &params, generate_particles)
}

#[wasm_bindgen(js_name = orbPositions)]
pub fn orb_positions(params: JsValue) -> Result<js_sys::Float64Array, JsValue> {
    layout_positions(LayoutParams::ORBS, &params, generate_orbs)
}

#[wasm_bindgen(js_name = gridDotPositions)]
pub fn grid_dot_positions(params: JsValue) -> Result<js_sys::Float64Array, JsValue> {
    layout_positions(LayoutParams::GRID_DOTS, &params, generate_grid_dots)
}

#[wasm_bindgen(js_name = particlePositions)]
pub fn particle_positions(params: JsValue) -> Result<js_sys::Float64Array, JsValue> {
    layout_positions(LayoutParams::PARTICLES, &params, generate_particles)
}

#[wasm_bindgen(js_name = mountOrbs)]
pub fn mount_orbs(container: web_sys::Element, params: JsValue) -> Result<usize, JsValue> {
    mount_layout(&container, LayoutParams::ORBS, &params, generate_orbs)
}

#[wasm_bindgen(js_name = mountBlogPostOrbs)]
pub fn mount_blog_post_orbs(container: web_sys::Element, slug: &str) -> Result<usize, JsValue> {
    mount_layout(
        &container,
        LayoutParams::blog_post_orbs(slug),
        &JsValue::UNDEFINED,
        generate_orbs,
    )
}

#[wasm_bindgen(js_name = mountGridDots)]
pub fn mount_grid_dots(container: web_sys::Element, params: JsValue) -> Result<usize, JsValue> {
    mount_layout(&container, LayoutParams::GRID_DOTS, &params, generate_grid_dots)
}

#[wasm_bindgen(js_name = mountParticles)]
pub fn mount_particles(container: web_sys::Element, params: JsValue) -> Result<usize, JsValue> {
    mount_layout(&container, LayoutParams::PARTICLES, &params, generate_particles)
}

// rs_gravity_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the gravity library.
// Positions and accelerations cross the boundary as flat Float64Arrays of (x, y, z) triples.

use wasm_bindgen::prelude::*;
use js_sys::Float64Array;
use rs_gravity::gravity::{barnes_hut, brute_force, build_octree, Cube};
use rs_gravity::utils::{GravityConfig, GravityError, Vec3};

fn js_error(message: &str) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(message));
    JsValue::from_str(message)
}

fn to_js(e: GravityError) -> JsValue {
    js_error(&e.to_string())
}

fn unflatten(flat: &[f64]) -> Result<Vec<Vec3>, JsValue> {
    if flat.len() % 3 != 0 {
        return Err(js_error("positions length must be a multiple of 3"));
    }
    Ok(flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

fn flatten(rows: &[Vec3]) -> Float64Array {
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Float64Array::from(flat.as_slice())
}

/// Exact accelerations for `masses.length` particles.
#[wasm_bindgen]
pub fn brute_force_accelerations(positions: &[f64], masses: &[f64], g: f64, epsilon: f64) -> Result<Float64Array, JsValue> {
    let positions = unflatten(positions)?;
    let accs = brute_force(&positions, masses, g, epsilon).map_err(to_js)?;
    Ok(flatten(&accs))
}

/// Barnes-Hut accelerations. The root cube encloses all particles.
#[wasm_bindgen]
pub fn barnes_hut_accelerations(positions: &[f64], masses: &[f64], g: f64, epsilon: f64, theta: f64) -> Result<Float64Array, JsValue> {
    let positions = unflatten(positions)?;
    let root = Cube::enclosing(&positions);
    let tree = build_octree(&positions, masses, root.center, root.half_width).map_err(to_js)?;
    let accs = barnes_hut(&tree, &positions, masses, g, epsilon, theta).map_err(to_js)?;
    Ok(flatten(&accs))
}

/// Evaluator handle for a JS simulation loop that keeps one configuration across steps.
#[wasm_bindgen]
pub struct WasmGravity {
    config: GravityConfig,
}

#[wasm_bindgen]
impl WasmGravity {
    #[wasm_bindgen(constructor)]
    pub fn new(g: f64, epsilon: f64, theta: f64) -> Result<WasmGravity, JsValue> {
        let config = GravityConfig { g, softening: epsilon, theta };
        config.validate().map_err(to_js)?;
        Ok(Self { config })
    }

    #[wasm_bindgen]
    pub fn brute_force(&self, positions: &[f64], masses: &[f64]) -> Result<Float64Array, JsValue> {
        brute_force_accelerations(positions, masses, self.config.g, self.config.softening)
    }

    #[wasm_bindgen]
    pub fn barnes_hut(&self, positions: &[f64], masses: &[f64]) -> Result<Float64Array, JsValue> {
        barnes_hut_accelerations(positions, masses, self.config.g, self.config.softening, self.config.theta)
    }

    #[wasm_bindgen(getter)]
    pub fn g(&self) -> f64 {
        self.config.g
    }

    #[wasm_bindgen(getter)]
    pub fn epsilon(&self) -> f64 {
        self.config.softening
    }

    #[wasm_bindgen(getter)]
    pub fn theta(&self) -> f64 {
        self.config.theta
    }
}

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated WebGL backdrop for a static page.
//!
//! The pure modules (viewport, pointer, scene) are target-independent so the
//! shader contract can be exercised with plain `cargo test` on the host; the
//! GL plumbing lives in the wasm-only module below.

pub mod error;
pub mod pointer;
pub mod scene;
pub mod shader;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod pipeline;
    pub mod render;

    /// Page entry point: wire the backdrop to the `#backdrop` canvas.
    ///
    /// A missing canvas is a page-markup bug and surfaces as a JS error; a
    /// missing WebGL2 context is an expected environment limitation and only
    /// logs a warning, leaving the static CSS background in place.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("backdrop")
            .ok_or("backdrop canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        // The loop keeps itself alive; the handle is only needed by embedders
        // that want to stop the animation early.
        if let Err(err) = render::start(canvas) {
            log::warn!("backdrop disabled: {err}");
        }
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}

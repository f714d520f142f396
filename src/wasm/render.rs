use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL, Window};

use super::pipeline::Pipeline;
use crate::error::InitError;
use crate::pointer::{PointerState, SurfaceRect};
use crate::viewport::Viewport;

// Full-screen quad as a 4-vertex triangle strip, texcoords spanning [0,1]².
const QUAD_POSITIONS: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
const QUAD_UVS: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

/// Controls a running backdrop. Dropping the handle leaves the animation
/// running for the life of the page; `stop` ends it cleanly.
pub struct RenderHandle {
    running: Rc<Cell<bool>>,
    frame: Rc<Cell<i32>>,
}

impl RenderHandle {
    /// Clear the running flag and cancel the pending animation frame.
    /// Further calls are no-ops.
    pub fn stop(&self) {
        if self.running.replace(false) {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(self.frame.get());
            }
        }
    }
}

/// Acquire a WebGL2 context on `canvas`, build the pipeline and geometry,
/// wire resize/pointer listeners, and start the frame loop. Both failure
/// kinds are terminal; the caller is expected to fall back to a static
/// background.
pub fn start(canvas: HtmlCanvasElement) -> Result<RenderHandle, InitError> {
    let win = window().ok_or(InitError::ContextUnavailable)?;
    let gl = acquire_context(&canvas)?;

    apply_viewport(&win, &canvas, &gl);

    let pipeline = Pipeline::build(&gl)?;
    gl.use_program(Some(&pipeline.program));
    upload_quad(&gl, &pipeline)?;

    gl.enable(GL::BLEND);
    gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

    let pointer = Rc::new(Cell::new(PointerState::default()));
    attach_pointer_listeners(&canvas, &pointer)?;
    attach_resize_listener(&canvas, &gl)?;

    let running = Rc::new(Cell::new(true));
    let frame = Rc::new(Cell::new(0));
    schedule_loop(
        win,
        gl,
        pipeline,
        canvas,
        pointer,
        running.clone(),
        frame.clone(),
    )?;

    log::info!("backdrop running");
    Ok(RenderHandle { running, frame })
}

fn acquire_context(canvas: &HtmlCanvasElement) -> Result<GL, InitError> {
    canvas
        .get_context("webgl2")
        .map_err(|_| InitError::ContextUnavailable)?
        .ok_or(InitError::ContextUnavailable)?
        .dyn_into::<GL>()
        .map_err(|_| InitError::ContextUnavailable)
}

/// Size the backing store to the window at the display's pixel ratio, pin
/// the CSS size to the window, and match the GL viewport. State is
/// recomputed from scratch each call, so repeated calls with the same
/// window metrics settle on the same result.
fn apply_viewport(win: &Window, canvas: &HtmlCanvasElement, gl: &GL) {
    let css_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let css_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let vp = Viewport::from_css(css_w, css_h, win.device_pixel_ratio());

    canvas.set_width(vp.width);
    canvas.set_height(vp.height);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{css_w}px"));
    let _ = style.set_property("height", &format!("{css_h}px"));

    gl.viewport(0, 0, vp.width as i32, vp.height as i32);
}

fn upload_quad(gl: &GL, pipeline: &Pipeline) -> Result<(), InitError> {
    upload_attribute(gl, &QUAD_POSITIONS, pipeline.a_position)?;
    upload_attribute(gl, &QUAD_UVS, pipeline.a_uv)
}

fn upload_attribute(gl: &GL, data: &[f32], attrib: u32) -> Result<(), InitError> {
    let buffer = gl.create_buffer().ok_or(InitError::ContextUnavailable)?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    // The view aliases wasm memory directly; nothing may allocate between
    // creating it and handing it to buffer_data.
    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    }
    gl.enable_vertex_attrib_array(attrib);
    gl.vertex_attrib_pointer_with_i32(attrib, 2, GL::FLOAT, false, 0, 0);
    Ok(())
}

fn attach_pointer_listeners(
    canvas: &HtmlCanvasElement,
    pointer: &Rc<Cell<PointerState>>,
) -> Result<(), InitError> {
    let on_move = {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let mut state = pointer.get();
            state.track(
                event.client_x() as f64,
                event.client_y() as f64,
                SurfaceRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
            );
            pointer.set(state);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(|_| InitError::ContextUnavailable)?;
    on_move.forget();

    let on_enter = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move || {
            let mut state = pointer.get();
            state.enter();
            pointer.set(state);
        }) as Box<dyn FnMut()>)
    };
    canvas
        .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())
        .map_err(|_| InitError::ContextUnavailable)?;
    on_enter.forget();

    let on_leave = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move || {
            let mut state = pointer.get();
            state.leave();
            pointer.set(state);
        }) as Box<dyn FnMut()>)
    };
    canvas
        .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())
        .map_err(|_| InitError::ContextUnavailable)?;
    on_leave.forget();

    Ok(())
}

fn attach_resize_listener(canvas: &HtmlCanvasElement, gl: &GL) -> Result<(), InitError> {
    let on_resize = {
        let canvas = canvas.clone();
        let gl = gl.clone();
        Closure::wrap(Box::new(move || {
            if let Some(win) = window() {
                apply_viewport(&win, &canvas, &gl);
            }
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or(InitError::ContextUnavailable)?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|_| InitError::ContextUnavailable)?;
    on_resize.forget();
    Ok(())
}

fn schedule_loop(
    win: Window,
    gl: GL,
    pipeline: Pipeline,
    canvas: HtmlCanvasElement,
    pointer: Rc<Cell<PointerState>>,
    running: Rc<Cell<bool>>,
    frame: Rc<Cell<i32>>,
) -> Result<(), InitError> {
    let start_ms = win.performance().map(|p| p.now()).unwrap_or(0.0);

    // The frame closure holds itself through the shared slot so that it can
    // keep calling request_animation_frame recursively; the slot is created
    // first and the closure obtains a reference to it from within itself.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_in_frame = slot.clone();
    {
        let running = running.clone();
        let frame = frame.clone();
        let win = win.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }

            let now_ms = win.performance().map(|p| p.now()).unwrap_or(start_ms);
            let elapsed = ((now_ms - start_ms) / 1000.0) as f32;

            pipeline.set_frame_uniforms(
                &gl,
                elapsed,
                canvas.width() as f32,
                canvas.height() as f32,
                pointer.get(),
            );
            gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);

            // schedule next
            if let Ok(id) = win.request_animation_frame(
                slot_in_frame
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                frame.set(id);
            }
        }) as Box<dyn FnMut()>));
    }

    let id = win
        .request_animation_frame(slot.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .map_err(|_| InitError::ContextUnavailable)?;
    frame.set(id);
    Ok(())
}

/// Last-known pointer position in normalized surface coordinates, plus
/// whether the pointer is currently over the surface.
///
/// x and y are each in [-1, 1] with +y up; (−1, 1) is the surface's
/// top-left corner. Written by the event closures, read once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerState {
    /// Record a pointer move given client-pixel coordinates and the
    /// surface's bounding rectangle. Never touches `active`; a degenerate
    /// rectangle leaves the state unchanged.
    pub fn track(&mut self, client_x: f64, client_y: f64, rect: SurfaceRect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let (x, y) = normalize(client_x, client_y, rect);
        self.x = x;
        self.y = y;
    }

    pub fn enter(&mut self) {
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }
}

/// On-screen rectangle of the drawing surface, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Client pixels → normalized surface coordinates with +y up.
pub fn normalize(client_x: f64, client_y: f64, rect: SurfaceRect) -> (f32, f32) {
    let x = (client_x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -((client_y - rect.top) / rect.height * 2.0 - 1.0);
    (x as f32, y as f32)
}

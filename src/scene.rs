//! Scene constants and a CPU mirror of the fragment stage.
//!
//! The GLSL in `shaders/backdrop.frag` bakes the same constants; this module
//! is the reference for what a fragment at position `p` should accumulate,
//! which keeps the shader contract checkable without a GL context.

use std::f32::consts::TAU;

/// Every fragment leaves with this alpha, independent of accumulated color.
pub const BACKDROP_ALPHA: f32 = 0.4;

/// Orbiting points per marker, spaced 1/12 turn apart.
pub const ORBITER_COUNT: u32 = 12;
/// Free-floating points driven by per-index sin/cos phases.
pub const DRIFTER_COUNT: u32 = 8;

const TIME_SCALE: f32 = 0.3;
const ORBIT_OFFSET: f32 = 0.1;
const ORBITER_RADIUS: f32 = 0.015;
const ORBITER_WEIGHT: f32 = 0.8;
const DRIFTER_RADIUS: f32 = 0.008;
const DRIFTER_WEIGHT: f32 = 1.5;
const DRIFTER_TINT: [f32; 3] = [1.0, 1.0, 0.8];
const GLOW_BASE_WEIGHT: f32 = 2.0;
const POINTER_REACH: f32 = 0.5;
const LINE_HALF_WIDTH: f32 = 0.02;
const LINE_TINT: [f32; 3] = [0.0, 1.0, 1.0];
const GRID_FREQUENCY: f32 = 15.0;
const GRID_TINT: [f32; 3] = [0.0, 0.5, 1.0];
const GRID_WEIGHT: f32 = 0.2;

/// A static glow disc with its ring of orbiting points.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub center: [f32; 2],
    pub radius: f32,
    pub glow: [f32; 3],
    pub orbit_tint: [f32; 3],
    /// Angular rates (x phase, y phase) in units of scaled time; sign
    /// encodes orbit direction.
    pub orbit_rate: [f32; 2],
}

/// The three fixed markers. Mirrored verbatim in the fragment shader.
pub const MARKERS: [Marker; 3] = [
    Marker {
        center: [-0.5, 0.3],
        radius: 0.3,
        glow: [1.0, 1.0, 1.0],
        orbit_tint: [0.0, 1.0, 0.5],
        orbit_rate: [1.0, 0.7],
    },
    Marker {
        center: [0.6, -0.4],
        radius: 0.25,
        glow: [1.0, 1.0, 1.0],
        orbit_tint: [1.0, 0.3, 1.0],
        orbit_rate: [-0.5, -0.8],
    },
    Marker {
        center: [0.0, 0.8],
        radius: 0.2,
        glow: [1.0, 1.0, 1.0],
        orbit_tint: [1.0, 0.6, 0.2],
        orbit_rate: [0.3, 1.2],
    },
];

/// GLSL-style smoothstep; edges may be descending.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Map quad texcoords ([0,1]²) to the aspect-corrected space the fields
/// are evaluated in.
pub fn ndc_from_uv(uv: [f32; 2], aspect: f32) -> [f32; 2] {
    [(2.0 * uv[0] - 1.0) * aspect, 2.0 * uv[1] - 1.0]
}

fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

fn accum(col: &mut [f32; 3], tint: [f32; 3], weight: f32) {
    col[0] += tint[0] * weight;
    col[1] += tint[1] * weight;
    col[2] += tint[2] * weight;
}

/// Color of the fragment at `p` — a pure function of position, elapsed
/// seconds, normalized pointer position, and the pointer-active flag.
/// Term order follows the shader so accumulation matches exactly.
pub fn shade(p: [f32; 2], time: f32, pointer: [f32; 2], pointer_active: bool) -> [f32; 4] {
    let t = time * TIME_SCALE;
    let mut col = [0.0f32; 3];

    // Shared pointer-proximity term; exactly zero while inactive.
    let influence = if pointer_active {
        smoothstep(POINTER_REACH, 0.0, dist(p, pointer))
    } else {
        0.0
    };

    for i in 0..ORBITER_COUNT {
        let angle = i as f32 * TAU / ORBITER_COUNT as f32;
        for m in &MARKERS {
            let ring = m.radius + ORBIT_OFFSET;
            let pos = [
                m.center[0] + (angle + t * m.orbit_rate[0]).cos() * ring,
                m.center[1] + (angle + t * m.orbit_rate[1]).sin() * ring,
            ];
            let spot = smoothstep(ORBITER_RADIUS, 0.0, dist(p, pos));
            accum(&mut col, m.orbit_tint, spot * ORBITER_WEIGHT);
        }
    }

    for m in &MARKERS {
        let glow = smoothstep(m.radius, m.radius * 0.8, dist(p, m.center));
        accum(&mut col, m.glow, glow * (GLOW_BASE_WEIGHT + influence));
    }

    for i in 0..DRIFTER_COUNT {
        let pos = [
            (t * 0.5 + i as f32 * 1.5).sin() * 2.0,
            (t * 0.3 + i as f32 * 2.0).cos() * 2.0,
        ];
        let spot = smoothstep(DRIFTER_RADIUS, 0.0, dist(p, pos));
        accum(&mut col, DRIFTER_TINT, spot * DRIFTER_WEIGHT);
    }

    if pointer_active {
        let mut bands = 0.0;
        for (a, b) in [(0usize, 1usize), (1, 2), (2, 0)] {
            let from = MARKERS[a].center;
            let to = MARKERS[b].center;
            let len = dist(from, to);
            let dir = [(from[0] - to[0]) / len, (from[1] - to[1]) / len];
            let rel = [p[0] - from[0], p[1] - from[1]];
            let along = (dir[0] * rel[0] + dir[1] * rel[1]).abs();
            bands += smoothstep(LINE_HALF_WIDTH, 0.0, along);
        }
        accum(&mut col, LINE_TINT, bands * influence);
    }

    let grid_x = (p[0] * GRID_FREQUENCY).sin().abs();
    let grid_y = (p[1] * GRID_FREQUENCY).sin().abs();
    let grid = smoothstep(0.95, 0.98, grid_x + grid_y);
    accum(&mut col, GRID_TINT, grid * GRID_WEIGHT);

    [col[0], col[1], col[2], BACKDROP_ALPHA]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_handles_descending_edges() {
        // Inside the inner edge fully lit, outside the outer edge dark.
        assert_eq!(smoothstep(0.3, 0.24, 0.2), 1.0);
        assert_eq!(smoothstep(0.3, 0.24, 0.5), 0.0);
        let mid = smoothstep(0.3, 0.24, 0.27);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn markers_are_exactly_three_with_positive_radii() {
        assert_eq!(MARKERS.len(), 3);
        for m in &MARKERS {
            assert!(m.radius > 0.0);
            assert!(m.center[0].abs() <= 1.0 && m.center[1].abs() <= 1.0);
        }
    }

    #[test]
    fn uv_center_maps_to_origin_for_any_aspect() {
        assert_eq!(ndc_from_uv([0.5, 0.5], 800.0 / 600.0), [0.0, 0.0]);
        assert_eq!(ndc_from_uv([0.0, 0.0], 2.0), [-2.0, -1.0]);
        assert_eq!(ndc_from_uv([1.0, 1.0], 2.0), [2.0, 1.0]);
    }
}

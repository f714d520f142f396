//! Host-side checks of the fragment-stage contract via the CPU mirror.

use backdrop_wasm::scene::{ndc_from_uv, shade, BACKDROP_ALPHA, MARKERS};

fn bits(px: [f32; 4]) -> [u32; 4] {
    [
        px[0].to_bits(),
        px[1].to_bits(),
        px[2].to_bits(),
        px[3].to_bits(),
    ]
}

fn sample_points() -> Vec<[f32; 2]> {
    let mut points = Vec::new();
    for ix in -4..=4 {
        for iy in -4..=4 {
            points.push([ix as f32 * 0.45, iy as f32 * 0.45]);
        }
    }
    points
}

#[test]
fn shading_is_deterministic() {
    for &p in &sample_points() {
        for time in [0.0, 1.0, 17.3, 4000.0] {
            let a = shade(p, time, [0.2, -0.6], true);
            let b = shade(p, time, [0.2, -0.6], false);
            assert_eq!(bits(a), bits(shade(p, time, [0.2, -0.6], true)));
            assert_eq!(bits(b), bits(shade(p, time, [0.2, -0.6], false)));
        }
    }
}

#[test]
fn alpha_is_constant_everywhere() {
    for &p in &sample_points() {
        for time in [0.0, 3.7, 120.0] {
            for active in [false, true] {
                let px = shade(p, time, [0.0, 0.0], active);
                assert_eq!(px[3], BACKDROP_ALPHA, "alpha drifted at p={p:?}");
            }
        }
    }
}

#[test]
fn inactive_pointer_contributes_nothing() {
    // With the flag down, the pointer coordinates must not matter: no glow
    // boost, no connection lines.
    for &p in &sample_points() {
        for pointer in [[0.0, 0.0], [-0.5, 0.3], [100.0, -100.0]] {
            let a = shade(p, 2.5, pointer, false);
            let b = shade(p, 2.5, [9.0, 9.0], false);
            assert_eq!(bits(a), bits(b), "pointer leaked at p={p:?}");
        }
    }
}

#[test]
fn active_pointer_near_marker_boosts_its_glow() {
    let m = MARKERS[0];
    // A point just inside the glow disc, with the pointer parked on it.
    let p = [m.center[0] + m.radius * 0.5, m.center[1]];
    let quiet = shade(p, 0.0, p, false);
    let boosted = shade(p, 0.0, p, true);
    assert!(
        boosted[0] > quiet[0] && boosted[1] > quiet[1] && boosted[2] > quiet[2],
        "expected glow boost, got {quiet:?} vs {boosted:?}"
    );
}

#[test]
fn center_of_default_viewport_shows_no_marker_light_at_start() {
    // 800×600 viewport, time zero, pointer inactive: none of the default
    // markers, orbiters, or drifters reach the screen centre, and the grid
    // sine is exactly zero there.
    let p = ndc_from_uv([0.5, 0.5], 800.0 / 600.0);
    assert_eq!(p, [0.0, 0.0]);
    let px = shade(p, 0.0, [0.0, 0.0], false);
    assert_eq!(px, [0.0, 0.0, 0.0, BACKDROP_ALPHA]);
}

#[test]
fn grid_lines_glow_blue_away_from_markers() {
    // sin(15x) peaks at x = π/30; both axes peaked puts the grid term at
    // full strength while every other field is dark.
    let peak = std::f32::consts::PI / 30.0;
    let px = shade([peak, peak], 0.0, [0.0, 0.0], false);
    assert!((px[0] - 0.0).abs() < 1e-4);
    assert!((px[1] - 0.1).abs() < 1e-4);
    assert!((px[2] - 0.2).abs() < 1e-4);
    assert_eq!(px[3], BACKDROP_ALPHA);
}

#[test]
fn connection_lines_appear_only_with_active_pointer() {
    // The band term measures distance along the pair direction from the
    // first marker, so it is at full strength at that marker's centre.
    let p = MARKERS[0].center;

    let inactive = shade(p, 0.0, p, false);
    let active = shade(p, 0.0, p, true);

    // The white glow boost raises all channels equally; the cyan line term
    // adds to green/blue only, so those must rise by strictly more than red.
    let dr = active[0] - inactive[0];
    let dg = active[1] - inactive[1];
    let db = active[2] - inactive[2];
    assert!(dr > 0.0, "glow boost missing");
    assert!(dg > dr && db > dr, "line term missing: d=({dr}, {dg}, {db})");
}

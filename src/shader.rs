//! Shader sources kept as data assets, plus the attribute/uniform names the
//! pipeline resolves against them.

pub const VERTEX: &str = include_str!("../shaders/backdrop.vert");
pub const FRAGMENT: &str = include_str!("../shaders/backdrop.frag");

pub const A_POSITION: &str = "a_position";
pub const A_UV: &str = "a_uv";
pub const U_TIME: &str = "u_time";
pub const U_RESOLUTION: &str = "u_resolution";
pub const U_POINTER: &str = "u_pointer";
pub const U_POINTER_ACTIVE: &str = "u_pointer_active";

// Assemble the deployable site: copy `static/` into `dist/`.
use std::fs;
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");
    println!("cargo:rerun-if-changed=shaders");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let dist = Path::new("dist");
    fs::create_dir_all(dist).ok();

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    if let Err(err) = copy(static_dir, dist, &options) {
        println!("cargo:warning=failed to copy static assets: {err}");
    }
}

//! Host-side helper: `cargo run` compiles the wasm bundle into `static/pkg`
//! and serves the site locally so the backdrop can be eyeballed in a browser.

use std::process::{Command, Stdio};
use std::{thread, time::Duration};

fn main() {
    println!("Building wasm bundle …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack reported errors; fix the build before serving.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever is already in static/pkg.");
        }
    }

    println!("Serving http://127.0.0.1:8080 …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8080", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive so the child server stays up.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

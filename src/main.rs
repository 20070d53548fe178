//! `vista [options.toml]` opens the fly-through window.
//!
//! WASD moves, Space/Left Ctrl rise and sink, the mouse looks around, the
//! scroll wheel zooms, R resets the camera and Escape quits. `RUST_LOG`
//! controls log verbosity.

use std::path::PathBuf;

use vista::{Options, Viewer};

fn load_options(path: Option<PathBuf>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(&path) {
        Ok(options) => options,
        Err(e) => {
            log::warn!(
                "could not load {}: {e}; using default options",
                path.display()
            );
            Options::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = load_options(std::env::args_os().nth(1).map(PathBuf::from));

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

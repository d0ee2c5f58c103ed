//! Fly-camera viewer binary.
//!
//! Usage: `flycam [OPTIONS.toml]`. Without an argument the default options
//! are used. Set `RUST_LOG=flycam=debug` to trace camera state.

use std::path::Path;

use flycam::{options::Options, Viewer};

fn load_options(arg: Option<String>) -> Result<Options, flycam::FlycamError> {
    let Some(path) = arg else {
        return Ok(Options::default());
    };
    let options = Options::load(Path::new(&path))?;
    log::info!("using options from {path}");
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

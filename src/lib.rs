use wasm_bindgen::prelude::*;

pub mod audio;
pub mod config;
pub mod dom;
pub mod state;
pub mod storage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::load_config();
    let runtime = state::Runtime::new(config);
    dom::install(&runtime);
    log::info!("Page runtime ready");
}

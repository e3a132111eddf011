#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use coin_detail::{
    AppOptions,
    Cli, // The struct from lib.rs
    DetailLoader,
    run_app, // The function from lib.rs
};

// --- 2. WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*; // <--- REQUIRED for .dyn_into()

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The binary still needs a main() even though `start` is the real entry point
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use coin_detail::data::LocalStorageStore;
    use coin_detail::ui::navigation::symbol_from_location;
    use std::sync::Arc;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚀 Coin Detail starting in WASM mode...");

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    // C. Cache lives in the browser's local storage; the symbol in the URL hash
    let loader = DetailLoader::with_system_clock(Arc::new(LocalStorageStore::default()));
    let options = AppOptions {
        initial_symbol: symbol_from_location(),
        ..AppOptions::default()
    };

    // 1. Get the browser window and document
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document on the global window")?;

    // 2. Find the canvas element by ID
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // 3. Pass the canvas OBJECT to start()
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, loader, options))),
        )
        .await
}

// --- 3. NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use coin_detail::JsonFileStore;
    use coin_detail::config::PERSISTENCE;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use std::sync::Arc;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Cache store (read lazily, once per navigation)
    let loader = DetailLoader::with_system_clock(Arc::new(JsonFileStore::new(&args.cache)));
    let options = AppOptions::from(&args);

    // D. Run Native App
    let native_options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app_state_path)),
        ..Default::default()
    };

    eframe::run_native(
        "Coin Detail",
        native_options,
        Box::new(move |cc| Ok(run_app(cc, loader, options))),
    )
}

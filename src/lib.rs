#![cfg(target_arch = "wasm32")]
use folio_core::PageController;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod page;
mod selectors;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = page::DomPage::discover(&window, &document)?;
    let storage = storage::LocalStorage::open(&window);

    // Static content and seeded state go in before any listener can fire.
    let mut controller = PageController::new(page, storage);
    controller.boot();

    let driver = frame::Driver::new(controller);
    events::wire_toggles(&driver);
    events::wire_guide_items(&driver);
    events::wire_viewport(&driver, &window);
    events::wire_media_queries(&driver);

    // Boot may have started the pointer loop.
    driver.sync_frames();
    Ok(())
}

//! Demo page: binds every drawer in `index.html` once the module loads.

use drawer_platform_web::{bind_all, install_default_styles, BoundDrawer};
use drawer_ui::DrawerSettings;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static DRAWERS: RefCell<Vec<BoundDrawer>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("should have a document on window")?;
    install_default_styles(&document)?;

    let drawers = bind_all(&DrawerSettings::default())?;
    DRAWERS.with(|slot| *slot.borrow_mut() = drawers);
    Ok(())
}

/// Unbind every drawer, removing their listeners.
#[wasm_bindgen]
pub fn unbind_drawers() {
    let drawers = DRAWERS.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    log::info!("unbinding {} drawer(s)", drawers.len());
}

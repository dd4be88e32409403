// ============================================================================
// RETREAT ADMIN CONSOLE - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: render DOM from state, no logic
// - ViewModels: screen state + behaviour, testable without a browser
// - Services: API access only
// - State: Rc<RefCell> cells with change notification
// - Models: records as the REST API serves them
// ============================================================================

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;

pub mod dom;
pub mod views;
mod app;

use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub use crate::app::App;
pub use crate::config::ApiConfig;
pub use crate::error::{ApiError, PayloadError, SubmitError, WizardError};
pub use crate::services::{ApiClient, HttpTransport, Transport};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Retreat Admin Console");

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Full re-render of the mounted app; no-op before start
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Render failed: {:?}", e);
            }
        }
    });
}

//! Browser adapter: wires the theme controller to `localStorage`,
//! `matchMedia` and the live document.
//!
//! Loading the module applies the stored preference once. The page then
//! calls `setTheme("light" | "dark")` from its own controls, or mounts the
//! bundled [`ThemeMenu`] with `mountThemeMenu(containerId)`.

use themeswitch_app::controller::ThemeController;
use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Appearance;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod media;
pub mod storage;

pub use components::ThemeMenu;

use dom::DomSurface;
use error::HostError;
use media::MediaQueryProbe;
use storage::LocalStorageStore;

/// Controller over the browser ports.
pub type WebThemeController = ThemeController<LocalStorageStore, MediaQueryProbe, DomSurface>;

/// Build a controller from the page configuration.
///
/// # Errors
///
/// Returns [`ThemeError::Config`] when the page configuration is invalid.
pub fn controller() -> Result<WebThemeController, ThemeError> {
    ThemeController::new(
        config::load_config(),
        LocalStorageStore,
        MediaQueryProbe,
        DomSurface,
    )
}

/// Window event dispatched after every stored preference change.
pub const THEME_CHANGE_EVENT: &str = "themeswitch:change";

fn notify_theme_change() -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let event = web_sys::Event::new(THEME_CHANGE_EVENT)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Store and apply `mode`, then tell mounted menus to refresh.
///
/// # Errors
///
/// Propagates controller errors; a failed dispatch is a
/// [`ThemeError::Document`].
pub fn store_preference(mode: &str) -> Result<Appearance, ThemeError> {
    let appearance = controller()?.set_preference(mode)?;
    notify_theme_change().map_err(|err| ThemeError::Document(Box::new(err)))?;
    Ok(appearance)
}

/// Render an error and its sources as a thrown JS `Error`.
fn to_js(err: &dyn std::error::Error) -> JsValue {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    JsError::new(&message).into()
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialised");
    }
}

/// Apply the stored preference as soon as the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    controller()
        .and_then(|ctrl| ctrl.apply_current_preference())
        .map_err(|err| to_js(&err))?;
    Ok(())
}

/// Store `mode` as the theme preference and apply it.
///
/// `mode` is stored as given; anything but `"light"` or `"dark"` behaves
/// like no preference. Storage failures are thrown to the caller.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(mode: &str) -> Result<(), JsValue> {
    store_preference(mode).map_err(|err| to_js(&err))?;
    Ok(())
}

/// Mount a [`ThemeMenu`] inside the element with id `container_id`.
#[wasm_bindgen(js_name = mountThemeMenu)]
pub fn mount_theme_menu(container_id: &str) -> Result<(), JsValue> {
    let container = dom::document()
        .and_then(|doc| {
            doc.get_element_by_id(container_id)
                .ok_or_else(|| HostError::MissingElement(container_id.to_string()))
        })
        .map_err(|err| to_js(&err))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| to_js(&HostError::MissingElement(container_id.to_string())))?;
    leptos::mount::mount_to(container, ThemeMenu).forget();
    Ok(())
}

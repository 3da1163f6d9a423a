pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod styles;

use web_sys::window;

use crate::app::App;
use crate::config::{Config, DEFAULT_ROOT_ID};
use crate::error::MountError;

/// Installs the panic hook and console logger, then mounts [`App`] into the
/// page's `#app` element.
pub fn run() -> Result<(), MountError> {
    console_error_panic_hook::set_once();

    let document = window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let root = document
        .get_element_by_id(DEFAULT_ROOT_ID)
        .ok_or_else(|| MountError::RootNotFound(DEFAULT_ROOT_ID.to_string()))?;

    let (config, config_err) = match Config::from_root(&root) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(config.log_level)?;
    if let Some(err) = config_err {
        log::warn!("{err}, using {}", config.log_level);
    }

    log::info!("mounting into #{DEFAULT_ROOT_ID}");
    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}

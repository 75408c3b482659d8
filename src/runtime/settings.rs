use tracing::{debug, warn};

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                debug!("loaded settings: {:?}", s);
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the run.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

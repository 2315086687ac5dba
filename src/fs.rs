use std::path::PathBuf;
use log::{debug, warn};

pub const CONFIG_FILE: &str = "conf.toml";

pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(path) = home::home_dir() {
        return Some(path.join(".mydig"));
    }

    None
}

/// The config file in the home directory, if there is one.
pub fn default_config_path() -> Option<PathBuf> {
    let Some(dir) = get_home_dir() else {
        warn!("cannot find the home directory");

        return None;
    };

    let path = dir.join(CONFIG_FILE);
    if !path.is_file() {
        debug!("no config file at {}", path.display());

        return None;
    }

    Some(path)
}

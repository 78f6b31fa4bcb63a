use std::path::{Path, PathBuf};

use crate::environment::Environment;

pub const CONFIG_FILE_NAME: &'static str = "translation-paths.json";
pub const HIDDEN_CONFIG_FILE_NAME: &'static str = ".translation-paths.json";

/// Searches the current working directory and then its ancestors for a configuration file.
pub fn find_config_file(environment: &impl Environment) -> Option<PathBuf> {
    let cwd = environment.cwd();

    for dir in cwd.ancestors() {
        if let Some(config_file_path) = get_config_file_in_dir(environment, dir) {
            log_verbose!(environment, "Found configuration file: {}", config_file_path.display());
            return Some(config_file_path);
        }
    }

    None
}

fn get_config_file_in_dir(environment: &impl Environment, dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if environment.path_exists(&config_path) {
        return Some(config_path);
    }
    let config_path = dir.join(HIDDEN_CONFIG_FILE_NAME);
    if environment.path_exists(&config_path) {
        return Some(config_path);
    }
    None
}

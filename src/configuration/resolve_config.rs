use dprint_cli_core::types::ErrBox;
use std::path::{Path, PathBuf};

use super::{find_config_file, read_config_file, ConfigFile};
use crate::environment::Environment;

pub const PACKAGES_DIR_ENV_VAR: &'static str = "TRANSLATION_PATHS_PACKAGES_DIR";
pub const DEFAULT_LOCALE_ENV_VAR: &'static str = "N8N_DEFAULT_LOCALE";
pub const DEFAULT_LOCALE: &'static str = "en";

/// Values resolved once at startup and passed to the resolvers.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub packages_dir: PathBuf,
    pub locale: String,
}

/// Values provided on the command line, which take precedence over everything else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub packages_dir: Option<String>,
    pub locale: Option<String>,
}

pub fn resolve_config(environment: &impl Environment, overrides: &ConfigOverrides) -> Result<Config, ErrBox> {
    let mut config_file = LazyConfigFile::new();
    let packages_dir = get_packages_dir(environment, overrides.packages_dir.as_deref(), &mut config_file)?;
    let locale = get_locale(environment, overrides.locale.as_deref(), &mut config_file)?;

    log_verbose!(
        environment,
        "Using packages directory {} and locale {}",
        packages_dir.display(),
        locale
    );

    Ok(Config { packages_dir, locale })
}

/// Resolves only the locale, so callers that don't need the packages directory never fail on it.
pub fn resolve_locale(environment: &impl Environment, locale: Option<&str>) -> Result<String, ErrBox> {
    let locale = get_locale(environment, locale, &mut LazyConfigFile::new())?;
    log_verbose!(environment, "Using locale {}", locale);
    Ok(locale)
}

fn get_packages_dir(
    environment: &impl Environment,
    packages_dir: Option<&str>,
    config_file: &mut LazyConfigFile,
) -> Result<PathBuf, ErrBox> {
    let packages_dir = packages_dir
        .map(String::from)
        .or_else(|| environment.get_env_var(PACKAGES_DIR_ENV_VAR));
    if let Some(dir) = packages_dir {
        return Ok(environment.cwd().join(dir));
    }

    let config_dir = config_file
        .get(environment)?
        .and_then(|(dir, file)| file.packages_dir.as_ref().map(|p| dir.join(p)));
    match config_dir {
        Some(dir) => Ok(dir),
        None => get_default_packages_dir(environment),
    }
}

fn get_locale(
    environment: &impl Environment,
    locale: Option<&str>,
    config_file: &mut LazyConfigFile,
) -> Result<String, ErrBox> {
    let locale = locale
        .map(String::from)
        .or_else(|| environment.get_env_var(DEFAULT_LOCALE_ENV_VAR));
    if let Some(locale) = locale {
        return Ok(locale);
    }

    Ok(config_file
        .get(environment)?
        .and_then(|(_, file)| file.default_locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string()))
}

/// The config file is only read once a value falls through to it, and at most once.
struct LazyConfigFile {
    loaded: Option<Option<(PathBuf, ConfigFile)>>,
}

impl LazyConfigFile {
    fn new() -> Self {
        LazyConfigFile { loaded: None }
    }

    fn get(&mut self, environment: &impl Environment) -> Result<Option<&(PathBuf, ConfigFile)>, ErrBox> {
        if self.loaded.is_none() {
            self.loaded = Some(load_config_file(environment)?);
        }
        Ok(self.loaded.as_ref().and_then(|loaded| loaded.as_ref()))
    }
}

/// Loads the config file along with the directory it was found in.
fn load_config_file(environment: &impl Environment) -> Result<Option<(PathBuf, ConfigFile)>, ErrBox> {
    let config_file_path = match find_config_file(environment) {
        Some(path) => path,
        None => return Ok(None),
    };
    let file_text = environment.read_file_text(&config_file_path)?;
    let config_file = match read_config_file(&file_text) {
        Ok(config_file) => config_file,
        Err(err) => {
            return err!(
                "Error reading configuration file {}: {}",
                config_file_path.display(),
                err.to_string()
            )
        }
    };
    let config_dir = config_file_path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(Some((config_dir, config_file)))
}

/// Packages are installed side by side, so the packages directory is three levels above
/// the directory of the running executable (ex. `<packages>/cli/target/release`).
fn get_default_packages_dir(environment: &impl Environment) -> Result<PathBuf, ErrBox> {
    let current_exe = environment.current_exe()?;
    let exe_dir = current_exe
        .parent()
        .ok_or_else(|| err_obj!("Could not get the directory of {}", current_exe.display()))?;
    match exe_dir.ancestors().nth(3) {
        Some(dir) => Ok(dir.to_path_buf()),
        None => err!(
            "Could not find the packages directory above {}. Provide it with --packages-dir or the {} environment variable.",
            exe_dir.display(),
            PACKAGES_DIR_ENV_VAR
        ),
    }
}

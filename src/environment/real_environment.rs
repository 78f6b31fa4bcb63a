use async_trait::async_trait;
use dprint_cli_core::logging::Logger;
use dprint_cli_core::types::ErrBox;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DirEntry, Environment};

#[derive(Clone)]
pub struct RealEnvironment {
    logger: Logger,
    is_verbose: bool,
}

impl RealEnvironment {
    pub fn new(is_verbose: bool) -> RealEnvironment {
        RealEnvironment {
            logger: Logger::new("translation-paths", /* is silent */ false),
            is_verbose,
        }
    }
}

#[async_trait]
impl Environment for RealEnvironment {
    async fn read_dir(&self, dir_path: &Path) -> Result<Vec<DirEntry>, ErrBox> {
        log_verbose!(self, "Reading directory: {}", dir_path.display());
        // listing failures are surfaced as the original io::Error
        let mut read_dir = tokio::fs::read_dir(dir_path).await?;
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox> {
        log_verbose!(self, "Reading file: {}", file_path.display());
        match fs::read_to_string(file_path) {
            Ok(text) => Ok(text),
            Err(err) => err!("Error reading file {}: {}", file_path.display(), err.to_string()),
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        log_verbose!(self, "Checking path exists: {}", path.display());
        path.exists()
    }

    fn cwd(&self) -> PathBuf {
        env::current_dir().unwrap_or_else(|err| panic!("Error getting current working directory: {}", err.to_string()))
    }

    fn current_exe(&self) -> Result<PathBuf, ErrBox> {
        log_verbose!(self, "Getting the current executable path.");
        match env::current_exe() {
            Ok(path) => Ok(path),
            Err(err) => err!("Error getting the current executable path: {}", err.to_string()),
        }
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        log_verbose!(self, "Getting the {} environment variable.", key);
        env::var_os(key).map(|value| value.to_string_lossy().to_string())
    }

    fn log(&self, text: &str) {
        self.logger.log(text, "translation-paths");
    }

    fn log_error(&self, text: &str) {
        self.logger.log_err(text, "translation-paths");
    }

    fn is_verbose(&self) -> bool {
        self.is_verbose
    }
}

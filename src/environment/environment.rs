use async_trait::async_trait;
use dprint_cli_core::types::ErrBox;
use std::path::{Path, PathBuf};

/// An immediate child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

#[async_trait]
pub trait Environment: Clone + std::marker::Send + std::marker::Sync + 'static {
    /// Lists the immediate children of a directory.
    ///
    /// Symlinks are classified by the link itself and are never reported as directories.
    async fn read_dir(&self, dir_path: &Path) -> Result<Vec<DirEntry>, ErrBox>;
    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox>;
    fn path_exists(&self, path: &Path) -> bool;
    fn cwd(&self) -> PathBuf;
    /// Gets the path of the running executable.
    fn current_exe(&self) -> Result<PathBuf, ErrBox>;
    /// Gets the specified environment variable.
    fn get_env_var(&self, key: &str) -> Option<String>;
    fn log(&self, text: &str);
    fn log_error(&self, text: &str);
    fn is_verbose(&self) -> bool;
}

// use a macro here so the expression provided is only evaluated when in verbose mode
macro_rules! log_verbose {
    ($environment:expr, $($arg:tt)*) => {
        if $environment.is_verbose() {
            let mut text = String::from("[VERBOSE]: ");
            text.push_str(&format!($($arg)*));
            $environment.log_error(&text);
        }
    }
}

use async_trait::async_trait;
use dprint_cli_core::types::ErrBox;
use path_clean::PathClean;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{DirEntry, Environment};

#[derive(Clone)]
pub struct TestEnvironment {
    is_verbose: Arc<Mutex<bool>>,
    cwd: Arc<Mutex<String>>,
    current_exe: Arc<Mutex<Option<PathBuf>>>,
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    read_dirs: Arc<Mutex<Vec<PathBuf>>>,
    logged_messages: Arc<Mutex<Vec<String>>>,
    logged_errors: Arc<Mutex<Vec<String>>>,
    env_variables: Arc<Mutex<HashMap<String, String>>>,
}

impl TestEnvironment {
    pub fn new() -> TestEnvironment {
        let environment = TestEnvironment {
            is_verbose: Arc::new(Mutex::new(false)),
            cwd: Arc::new(Mutex::new(String::from("/"))),
            current_exe: Arc::new(Mutex::new(Some(PathBuf::from(
                "/app/packages/cli/target/release/translation-paths",
            )))),
            files: Arc::new(Mutex::new(HashMap::new())),
            dirs: Arc::new(Mutex::new(HashSet::new())),
            read_dirs: Arc::new(Mutex::new(Vec::new())),
            logged_messages: Arc::new(Mutex::new(Vec::new())),
            logged_errors: Arc::new(Mutex::new(Vec::new())),
            env_variables: Arc::new(Mutex::new(HashMap::new())),
        };
        environment.create_dir_all(&PathBuf::from("/"));
        environment
    }

    pub fn take_logged_messages(&self) -> Vec<String> {
        self.logged_messages.lock().unwrap().drain(..).collect()
    }

    pub fn take_logged_errors(&self) -> Vec<String> {
        self.logged_errors.lock().unwrap().drain(..).collect()
    }

    /// Directories that were listed, in listing order.
    pub fn take_read_dirs(&self) -> Vec<PathBuf> {
        self.read_dirs.lock().unwrap().drain(..).collect()
    }

    pub fn set_cwd(&self, new_path: &str) {
        let mut cwd = self.cwd.lock().unwrap();
        *cwd = String::from(new_path);
    }

    pub fn set_current_exe(&self, path: Option<&str>) {
        let mut current_exe = self.current_exe.lock().unwrap();
        *current_exe = path.map(PathBuf::from);
    }

    pub fn set_verbose(&self, value: bool) {
        let mut is_verbose = self.is_verbose.lock().unwrap();
        *is_verbose = value;
    }

    pub fn set_env_var(&self, key: &str, value: &str) {
        let mut env_variables = self.env_variables.lock().unwrap();
        env_variables.insert(key.to_string(), value.to_string());
    }

    pub fn create_dir_all(&self, dir_path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in clean_path(dir_path).ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn write_file_text(&self, file_path: &Path, file_text: &str) {
        let file_path = clean_path(file_path);
        if let Some(parent) = file_path.parent() {
            self.create_dir_all(parent);
        }
        let mut files = self.files.lock().unwrap();
        files.insert(file_path, file_text.as_bytes().to_vec());
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // If this panics that means the logged messages or errors weren't inspected for a test.
        // Use take_logged_messages() or take_logged_errors() and inspect the results.
        if !std::thread::panicking() && Arc::strong_count(&self.logged_messages) == 1 {
            assert_eq!(
                self.logged_messages.lock().unwrap().clone(),
                Vec::<String>::new(),
                "should not have logged messages left on drop"
            );
            assert_eq!(
                self.logged_errors.lock().unwrap().clone(),
                Vec::<String>::new(),
                "should not have logged errors left on drop"
            );
        }
    }
}

#[async_trait]
impl Environment for TestEnvironment {
    async fn read_dir(&self, dir_path: &Path) -> Result<Vec<DirEntry>, ErrBox> {
        let dir_path = clean_path(dir_path);
        self.read_dirs.lock().unwrap().push(dir_path.clone());

        let dirs = self.dirs.lock().unwrap();
        let files = self.files.lock().unwrap();
        if !dirs.contains(&dir_path) {
            let kind = if files.contains_key(&dir_path) {
                ErrorKind::Other
            } else {
                ErrorKind::NotFound
            };
            return Err(Box::new(IoError::new(
                kind,
                format!("Could not read directory {}", dir_path.display()),
            )));
        }

        // sorted by name so the listing order is stable, but reversed so callers can't rely on it
        let mut entries = BTreeMap::new();
        for path in dirs.iter() {
            if path.parent() == Some(dir_path.as_path()) {
                entries.insert(file_name(path), true);
            }
        }
        for path in files.keys() {
            if path.parent() == Some(dir_path.as_path()) {
                entries.insert(file_name(path), false);
            }
        }

        Ok(entries
            .into_iter()
            .rev()
            .map(|(name, is_dir)| DirEntry { name, is_dir })
            .collect())
    }

    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox> {
        let files = self.files.lock().unwrap();
        match files.get(&clean_path(file_path)) {
            Some(bytes) => Ok(String::from_utf8(bytes.clone()).unwrap()),
            None => err!("Could not find file at path {}", file_path.display()),
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        let path = clean_path(path);
        if self.dirs.lock().unwrap().contains(&path) {
            return true;
        }
        let files = self.files.lock().unwrap();
        files.contains_key(&path)
    }

    fn cwd(&self) -> PathBuf {
        let cwd = self.cwd.lock().unwrap();
        PathBuf::from(cwd.to_owned())
    }

    fn current_exe(&self) -> Result<PathBuf, ErrBox> {
        match self.current_exe.lock().unwrap().clone() {
            Some(path) => Ok(path),
            None => err!("Error getting the current executable path: not available"),
        }
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        let env_vars = self.env_variables.lock().unwrap();
        env_vars.get(key).cloned()
    }

    fn log(&self, text: &str) {
        self.logged_messages.lock().unwrap().push(String::from(text));
    }

    fn log_error(&self, text: &str) {
        self.logged_errors.lock().unwrap().push(String::from(text));
    }

    fn is_verbose(&self) -> bool {
        *self.is_verbose.lock().unwrap()
    }
}

fn clean_path(path: &Path) -> PathBuf {
    // temporary until https://github.com/danreeves/path-clean/issues/4 is fixed in path-clean
    PathBuf::from(path.to_string_lossy().replace("\\", "/")).clean()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

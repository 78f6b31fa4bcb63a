use crate::environment::TestEnvironment;

use std::path::PathBuf;

/// Lays out a node's directory in the test environment.
pub struct NodePackageBuilder {
    environment: TestEnvironment,
    node_dir: PathBuf,
    source_file: Option<String>,
    version_dirs: Vec<String>,
    translations: Vec<(Option<String>, String, String)>,
}

impl NodePackageBuilder {
    pub fn new(environment: &TestEnvironment, node_dir: &str) -> Self {
        NodePackageBuilder {
            environment: environment.clone(),
            node_dir: PathBuf::from(node_dir),
            source_file: None,
            version_dirs: Vec::new(),
            translations: Vec::new(),
        }
    }

    pub fn source_file<'a>(&'a mut self, file_name: &str) -> &'a mut NodePackageBuilder {
        self.source_file = Some(file_name.to_string());
        self
    }

    pub fn version_dir<'a>(&'a mut self, dir_name: &str) -> &'a mut NodePackageBuilder {
        self.version_dirs.push(dir_name.to_string());
        self
    }

    pub fn translation<'a>(&'a mut self, locale: &str, node_type: &str) -> &'a mut NodePackageBuilder {
        self.translations.push((None, locale.to_string(), node_type.to_string()));
        self
    }

    pub fn versioned_translation<'a>(
        &'a mut self,
        version_dir: &str,
        locale: &str,
        node_type: &str,
    ) -> &'a mut NodePackageBuilder {
        self.version_dir(version_dir);
        self.translations
            .push((Some(version_dir.to_string()), locale.to_string(), node_type.to_string()));
        self
    }

    pub fn build(&self) {
        self.environment.create_dir_all(&self.node_dir);
        if let Some(source_file) = &self.source_file {
            self.environment
                .write_file_text(&self.node_dir.join(source_file), "module.exports = {};");
        }
        for dir_name in self.version_dirs.iter() {
            self.environment.create_dir_all(&self.node_dir.join(dir_name));
        }
        for (version_dir, locale, node_type) in self.translations.iter() {
            let base_dir = match version_dir {
                Some(version_dir) => self.node_dir.join(version_dir),
                None => self.node_dir.clone(),
            };
            let file_path = base_dir
                .join("translations")
                .join(locale)
                .join(format!("{}.json", node_type));
            self.environment.write_file_text(&file_path, "{}");
        }
    }
}

use std::path::{Path, PathBuf};

/// Gets the directory holding the compiled credentials of the base nodes package.
pub fn get_credentials_dir(packages_dir: &Path) -> PathBuf {
    packages_dir.join("nodes-base").join("dist").join("credentials")
}

/// Gets the full path to a credential translation file. No file system access is done.
pub fn get_credential_translation_path(packages_dir: &Path, locale: &str, credential_type: &str) -> PathBuf {
    get_credentials_dir(packages_dir)
        .join("translations")
        .join(locale)
        .join(format!("{}.json", credential_type))
}

use dprint_cli_core::types::ErrBox;
use std::path::Path;

use crate::environment::{DirEntry, Environment};

/// Allowed lengths of a versioned directory name (ex. `v1`, `v10`).
const VERSIONED_DIR_NAME_LENGTHS: [usize; 2] = [2, 3];

pub fn is_versioned_dir(entry: &DirEntry) -> bool {
    if !entry.is_dir {
        return false;
    }

    VERSIONED_DIR_NAME_LENGTHS.contains(&entry.name.chars().count()) && entry.name.to_lowercase().starts_with('v')
}

/// Gets the names of the immediate child directories that look like version markers.
pub async fn get_versioned_dir_names(environment: &impl Environment, dir_path: &Path) -> Result<Vec<String>, ErrBox> {
    let entries = environment.read_dir(dir_path).await?;
    Ok(entries
        .into_iter()
        .filter(is_versioned_dir)
        .map(|entry| entry.name)
        .collect())
}

/// Gets the highest version found in the directory's versioned subdirectories.
///
/// Only the digit directly after the `v` is considered, so `v10` counts as version 1.
/// A versioned name without a digit there (ex. `vx`) means no version can be selected.
pub async fn get_max_version(environment: &impl Environment, dir_path: &Path) -> Result<Option<u32>, ErrBox> {
    let dir_names = get_versioned_dir_names(environment, dir_path).await?;
    let versions = dir_names
        .iter()
        .map(|name| get_dir_name_version(name))
        .collect::<Option<Vec<_>>>();
    let max_version = versions.and_then(|versions| versions.into_iter().max());

    log_verbose!(
        environment,
        "Max version in {}: {}",
        dir_path.display(),
        match max_version {
            Some(version) => format!("v{}", version),
            None => "none".to_string(),
        }
    );

    Ok(max_version)
}

fn get_dir_name_version(dir_name: &str) -> Option<u32> {
    dir_name.chars().nth(1).and_then(|c| c.to_digit(10))
}

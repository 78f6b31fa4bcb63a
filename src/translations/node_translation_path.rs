use dprint_cli_core::types::ErrBox;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};

use super::get_max_version;
use crate::environment::Environment;

/// Namespace prefix of the node types shipped in the base nodes package.
pub const NODES_BASE_PREFIX: &str = "n8n-nodes-base.";

#[derive(Clone, Debug, PartialEq)]
pub struct NodeTranslationRequest {
    pub node_source_path: PathBuf,
    pub long_node_type: String,
}

/// Gets the full path to a node translation file.
///
/// Example: `<packages>/nodes-base/dist/nodes/Slack/v2/translations/de/Slack.json`
pub async fn get_node_translation_path(
    environment: &impl Environment,
    node_source_path: &Path,
    long_node_type: &str,
    locale: &str,
) -> Result<PathBuf, ErrBox> {
    let node_dir = get_node_dir(node_source_path);
    let max_version = get_max_version(environment, &node_dir).await?;
    let node_type = get_short_node_type(long_node_type);
    let file_name = format!("{}.json", node_type);

    Ok(match max_version {
        Some(version) => node_dir
            .join(format!("v{}", version))
            .join("translations")
            .join(locale)
            .join(file_name),
        None => node_dir.join("translations").join(locale).join(file_name),
    })
}

/// Resolves the translation paths of many nodes at once. The paths are returned in request order.
pub async fn get_node_translation_paths(
    environment: &impl Environment,
    requests: &[NodeTranslationRequest],
    locale: &str,
) -> Result<Vec<PathBuf>, ErrBox> {
    try_join_all(requests.iter().map(|request| {
        get_node_translation_path(environment, &request.node_source_path, &request.long_node_type, locale)
    }))
    .await
}

pub fn get_short_node_type(long_node_type: &str) -> &str {
    long_node_type.strip_prefix(NODES_BASE_PREFIX).unwrap_or(long_node_type)
}

fn get_node_dir(node_source_path: &Path) -> PathBuf {
    match node_source_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

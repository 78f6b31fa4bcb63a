mod credential_translation_path;
mod node_translation_path;
mod versioned_dirs;

pub use credential_translation_path::*;
pub use node_translation_path::*;
pub use versioned_dirs::*;

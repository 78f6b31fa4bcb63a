mod find_config_file;
mod read_config_file;
mod resolve_config;

pub use find_config_file::*;
pub use read_config_file::*;
pub use resolve_config::*;

//! Config module.
//! Provides the move spec and option types, default paths, and XML task loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{GlobOptions, LogLevel, MoveOptions, MoveSpec, TaskConfig};
pub use xml::{load_task_from_env, load_task_from_xml_path, parse_task_xml};

/// Entity moves allowed in flight for a single pattern expansion.
pub const DEFAULT_CONCURRENCY: usize = 30;

/// Environment variable naming an explicit task file.
pub const CONFIG_ENV: &str = "GLOB_MOVE_CONFIG";

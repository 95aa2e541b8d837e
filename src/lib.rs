//! Core library for `glob_move`.
//!
//! Moves files and directories selected by glob patterns. Each
//! (pattern, destination) pair is expanded, classified as a direct match (one
//! literal entity) or a pattern match (many entities whose relative structure
//! is kept under the destination), planned, and executed.
//!
//! Collaborators sit behind traits so hosts and tests can swap them:
//! [`Matcher`] expands globs, [`Mover`] relocates one entity, [`DirEnsurer`]
//! creates parent directories. [`run`] wires in the filesystem defaults.

pub mod cleanup;
pub mod config;
pub mod errors;
pub mod execute;
pub mod expand;
pub mod fs_ops;
pub mod logging;
pub mod matcher;
pub mod normalize;
pub mod platform;
pub mod plan;
pub mod relative;
pub mod relocate;

pub use cleanup::cleanup;
pub use config::{
    CONFIG_ENV, DEFAULT_CONCURRENCY, GlobOptions, LogLevel, MoveOptions, MoveSpec, TaskConfig,
    default_config_path, default_log_path, load_task_from_env, load_task_from_xml_path,
    parse_task_xml,
};
pub use errors::GlobMoveError;
pub use execute::execute_plans;
pub use expand::{Expansion, expand};
pub use fs_ops::{DirEnsurer, FsDirEnsurer, FsMover, Mover};
pub use logging::init_tracing;
pub use matcher::{GlobMatcher, Matcher};
pub use plan::{EntityKind, MovePlan, plan_direct, plan_pattern};
pub use relative::relative_path;
pub use relocate::{Relocator, run};

//! XML task definitions.
//! - Loads a move spec plus options from an XML file (quick_xml + serde).
//! - `GLOB_MOVE_CONFIG` names an explicit file for hosts that pick it up from the env.
//!
//! Layout:
//! ```xml
//! <glob_move>
//!   <log_level>normal</log_level>
//!   <dry_run>false</dry_run>
//!   <concurrency>30</concurrency>
//!   <glob><collapse_recursive_suffix>true</collapse_recursive_suffix></glob>
//!   <move src="build/*.js" dest="dist/"/>
//! </glob_move>
//! ```
//! Unknown elements are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::CONFIG_ENV;
use super::types::{GlobOptions, LogLevel, MoveOptions, MoveSpec, TaskConfig};

/// Struct mirroring the XML task file for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "glob_move")]
#[serde(deny_unknown_fields)]
struct XmlTask {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "dry_run")]
    dry_run: Option<bool>,
    #[serde(rename = "concurrency", default, deserialize_with = "de_usize_trimmed_opt")]
    concurrency: Option<usize>,
    #[serde(rename = "glob")]
    glob: Option<XmlGlob>,
    #[serde(rename = "move", default)]
    moves: Vec<XmlMove>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlGlob {
    case_sensitive: Option<bool>,
    require_literal_separator: Option<bool>,
    require_literal_leading_dot: Option<bool>,
    collapse_recursive_suffix: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlMove {
    #[serde(rename = "@src")]
    src: String,
    #[serde(rename = "@dest")]
    dest: String,
}

// Custom deserializer that trims surrounding whitespace for optional usize;
// non-numeric text is an error rather than a silent default.
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let opt: Option<String> = Option::deserialize(deserializer)?;
    opt.map(|s| {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .map_err(|e| D::Error::custom(format!("invalid concurrency '{trimmed}': {e}")))
    })
    .transpose()
}

fn glob_options(parsed: Option<XmlGlob>) -> GlobOptions {
    let defaults = GlobOptions::default();
    let Some(g) = parsed else {
        return defaults;
    };
    GlobOptions {
        case_sensitive: g.case_sensitive.unwrap_or(defaults.case_sensitive),
        require_literal_separator: g
            .require_literal_separator
            .unwrap_or(defaults.require_literal_separator),
        require_literal_leading_dot: g
            .require_literal_leading_dot
            .unwrap_or(defaults.require_literal_leading_dot),
        collapse_recursive_suffix: g
            .collapse_recursive_suffix
            .unwrap_or(defaults.collapse_recursive_suffix),
    }
}

// Map XmlTask -> TaskConfig
fn xml_to_task(parsed: XmlTask) -> TaskConfig {
    let mut options = MoveOptions {
        glob: glob_options(parsed.glob),
        ..MoveOptions::default()
    };
    if let Some(dry_run) = parsed.dry_run {
        options.dry_run = dry_run;
    }
    if let Some(n) = parsed.concurrency {
        options.concurrency = n.max(1);
    }

    let log_level = match parsed.log_level.as_deref() {
        Some(s) => s.parse::<LogLevel>().unwrap_or_else(|e| {
            warn!("{e}; falling back to '{}'", LogLevel::default());
            LogLevel::default()
        }),
        None => LogLevel::default(),
    };
    let log_file = parsed.log_file.as_deref().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    });

    let spec: MoveSpec = parsed.moves.into_iter().map(|m| (m.src, m.dest)).collect();

    TaskConfig {
        spec,
        options,
        log_level,
        log_file,
    }
}

/// Parse a task definition from an XML string.
pub fn parse_task_xml(contents: &str) -> Result<TaskConfig> {
    let parsed: XmlTask = from_xml_str(contents).context("parse task xml")?;
    Ok(xml_to_task(parsed))
}

/// Load a TaskConfig from a specific XML file path.
pub fn load_task_from_xml_path(path: &Path) -> Result<TaskConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read task xml '{}'", path.display()))?;
    let task = parse_task_xml(&contents)
        .with_context(|| format!("load task xml '{}'", path.display()))?;
    debug!(path = %path.display(), moves = task.spec.len(), "Loaded task definition");
    Ok(task)
}

/// If GLOB_MOVE_CONFIG is set, load and return that TaskConfig; otherwise Ok(None).
pub fn load_task_from_env() -> Result<Option<TaskConfig>> {
    match env::var_os(CONFIG_ENV) {
        Some(p) => load_task_from_xml_path(Path::new(&p)).map(Some),
        None => Ok(None),
    }
}

use std::path::{Component, Path};

use tracing::debug;

use crate::archive::member_name;
use crate::errors::{PotextError, Result};
use crate::models::{PluginInfo, ENTRY_FILE, METADATA_FILE};

/// Read and parse `info.json` from a plugin source directory.
///
/// # Errors
///
/// Returns [`PotextError::Metadata`] if the file cannot be read, is not a
/// JSON object, or lacks a usable `id`, or if `icon` is not a safe relative
/// path.
pub fn load_metadata(dir: &Path) -> Result<PluginInfo> {
    let path = dir.join(METADATA_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| PotextError::Metadata {
        message: format!("cannot read {}: {e}", path.display()),
    })?;
    let info = parse_metadata(&content)?;
    debug!(id = %info.id, icon = %info.icon(), "loaded plugin metadata");
    Ok(info)
}

/// Parse the contents of `info.json`.
///
/// # Errors
///
/// See [`load_metadata`].
pub fn parse_metadata(content: &str) -> Result<PluginInfo> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| PotextError::Metadata {
            message: format!("invalid JSON in {METADATA_FILE}: {e}"),
        })?;
    if !value.is_object() {
        return Err(PotextError::Metadata {
            message: format!("{METADATA_FILE} must contain a JSON object"),
        });
    }
    match value.get("id") {
        None => {
            return Err(PotextError::Metadata {
                message: "missing required field 'id'".into(),
            })
        }
        Some(serde_json::Value::String(_)) => {}
        Some(_) => {
            return Err(PotextError::Metadata {
                message: "field 'id' must be a string".into(),
            })
        }
    }

    let info: PluginInfo = serde_json::from_value(value).map_err(|e| PotextError::Metadata {
        message: format!("invalid {METADATA_FILE}: {e}"),
    })?;

    if is_unsafe_id(&info.id) {
        return Err(PotextError::Metadata {
            message: format!(
                "unusable plugin id '{}' (empty, '.', '..', or contains path separators)",
                info.id
            ),
        });
    }
    if let Some(icon) = &info.icon {
        if !is_safe_relative_path(icon) {
            return Err(PotextError::Metadata {
                message: format!("icon path '{icon}' must be relative and stay inside the plugin"),
            });
        }
        let member = member_name(icon);
        if member == ENTRY_FILE || member == METADATA_FILE {
            return Err(PotextError::Metadata {
                message: format!("icon path '{icon}' collides with {member}"),
            });
        }
    }
    Ok(info)
}

/// Check whether an id is unsafe for use as a file stem.
fn is_unsafe_id(id: &str) -> bool {
    id.trim().is_empty() || id.contains('/') || id.contains('\\') || id == ".." || id == "."
}

/// Accept only paths made of normal components (and `.`).
fn is_safe_relative_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && !path.split(['/', '\\']).any(|seg| seg == "..")
}

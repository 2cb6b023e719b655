//! View-settings persistence: save and load to/from JSON and YAML files.
//!
//! Only settings persist — the frame log itself is ephemeral session
//! data and is never written to disk. Mirror types keep the on-disk
//! shape independent of the in-memory types.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::filter::UniqueFrameFilter;
use crate::time_format::{ElapsedFormatter, TimeFormat, TimeResolution, WallClockFormatter};

// ---------- Serializable mirror types ----------

/// Serializable version of [`TimeFormat`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimeFormatSerde {
    Auto,
    Elapsed {
        resolution: TimeResolution,
        force_hms: bool,
    },
    WallClock {
        resolution: TimeResolution,
        show_date: bool,
    },
}

impl From<&TimeFormat> for TimeFormatSerde {
    fn from(tf: &TimeFormat) -> Self {
        match tf {
            TimeFormat::Auto => TimeFormatSerde::Auto,
            TimeFormat::Elapsed(ef) => TimeFormatSerde::Elapsed {
                resolution: ef.resolution,
                force_hms: ef.force_hms,
            },
            TimeFormat::WallClock(wf) => TimeFormatSerde::WallClock {
                resolution: wf.resolution,
                show_date: wf.show_date,
            },
        }
    }
}

impl TimeFormatSerde {
    /// Convert back to a [`TimeFormat`].
    pub fn into_format(self) -> TimeFormat {
        match self {
            TimeFormatSerde::Auto => TimeFormat::Auto,
            TimeFormatSerde::Elapsed {
                resolution,
                force_hms,
            } => TimeFormat::Elapsed(ElapsedFormatter {
                resolution,
                force_hms,
            }),
            TimeFormatSerde::WallClock {
                resolution,
                show_date,
            } => TimeFormat::WallClock(WallClockFormatter {
                resolution,
                show_date,
            }),
        }
    }
}

/// Full view-settings state (for save/load).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewStateSerde {
    /// Whether the unique-key filter is enforced.
    pub filter_active: bool,
    /// Time column rendering.
    pub time_format: TimeFormatSerde,
}

impl Default for ViewStateSerde {
    fn default() -> Self {
        Self {
            filter_active: false,
            time_format: TimeFormatSerde::Auto,
        }
    }
}

impl ViewStateSerde {
    /// Capture the persistable parts of a view's state.
    pub fn capture(filter: &UniqueFrameFilter, config: &ViewConfig) -> Self {
        Self {
            filter_active: filter.is_active(),
            time_format: TimeFormatSerde::from(&config.time_format),
        }
    }

    /// Apply stored settings to a filter and config pair.
    pub fn apply_to(self, filter: &mut UniqueFrameFilter, config: &mut ViewConfig) {
        filter.set_active(self.filter_active);
        config.filter_active_on_start = self.filter_active;
        config.time_format = self.time_format.into_format();
    }
}

// ---------- Public API ----------

/// Serialize the view settings as pretty JSON.
pub fn state_to_json(state: &ViewStateSerde) -> Result<String, String> {
    serde_json::to_string_pretty(state).map_err(|e| e.to_string())
}

/// Deserialize view settings from JSON.
pub fn state_from_json(json: &str) -> Result<ViewStateSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Save the view settings to a JSON file at the given path.
pub fn save_state_to_path(state: &ViewStateSerde, path: &Path) -> Result<(), String> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load view settings from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<ViewStateSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    state_from_json(&txt)
}

// ---------- Default-path YAML settings ----------

fn default_settings_path() -> Result<PathBuf, String> {
    let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
    Ok(PathBuf::from(home).join(".canview"))
}

/// Save the view settings as YAML to `~/.canview/view.yaml`.
pub fn save_state_to_default_path(state: &ViewStateSerde) -> Result<(), String> {
    let dir = default_settings_path()?;
    if let Err(e) = fs::create_dir_all(&dir) {
        return Err(format!("Failed to create dir {:?}: {}", dir, e));
    }
    let path = dir.join("view.yaml");
    let s = serde_yaml::to_string(state).map_err(|e| format!("Serialization error: {}", e))?;
    let mut f =
        fs::File::create(&path).map_err(|e| format!("Failed to create file {:?}: {}", path, e))?;
    f.write_all(s.as_bytes())
        .map_err(|e| format!("Failed to write file {:?}: {}", path, e))?;
    Ok(())
}

/// Load the view settings from `~/.canview/view.yaml`.
pub fn load_state_from_default_path() -> Result<ViewStateSerde, String> {
    let path = default_settings_path()?.join("view.yaml");
    if !path.exists() {
        return Err(format!("Settings file {:?} does not exist", path));
    }
    let s = fs::read_to_string(&path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
    let state: ViewStateSerde =
        serde_yaml::from_str(&s).map_err(|e| format!("Deserialization error: {}", e))?;
    Ok(state)
}

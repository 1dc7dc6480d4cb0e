use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;
pub const DEFAULT_DOCTOR_BASE_FILE: &str = "data/doctorbase.json";

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    pub window_coordinates: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_coordinates: None,
        }
    }
}

impl GuiSettings {
    pub fn new(window_width: f64, window_height: f64, x: i32, y: i32) -> Self {
        Self {
            window_width,
            window_height,
            window_coordinates: Some((x, y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    pub gui_settings: GuiSettings,
    pub doctor_base_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            doctor_base_file_path: PathBuf::from(DEFAULT_DOCTOR_BASE_FILE),
        }
    }
}

impl UserPrefs {
    pub fn doctor_base_file_path(&self) -> &Path {
        &self.doctor_base_file_path
    }
}

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VIDEO_SRC;
use crate::core::drag::DragConfig;
use crate::core::geometry::Size;

/// Player configuration, read from `lesson_player.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Lesson video URL
    #[serde(default = "default_video_src")]
    pub video_src: String,
    /// Floating overlay width in pixels
    #[serde(default = "default_overlay_width")]
    pub overlay_width: f64,
    /// Floating overlay height in pixels
    #[serde(default = "default_overlay_height")]
    pub overlay_height: f64,
    /// Overlay drag tuning
    #[serde(default)]
    pub drag: DragConfig,
    /// Initial window size
    #[serde(default = "default_window_width")]
    pub window_width: f64,
    #[serde(default = "default_window_height")]
    pub window_height: f64,
    /// Page shown at startup; updated on every navigation
    #[serde(default = "default_last_path")]
    pub last_path: String,
}

fn default_video_src() -> String {
    DEFAULT_VIDEO_SRC.to_string()
}

fn default_overlay_width() -> f64 {
    320.0
}

fn default_overlay_height() -> f64 {
    180.0
}

fn default_window_width() -> f64 {
    1280.0
}

fn default_window_height() -> f64 {
    800.0
}

fn default_last_path() -> String {
    "/".to_string()
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            video_src: default_video_src(),
            overlay_width: default_overlay_width(),
            overlay_height: default_overlay_height(),
            drag: DragConfig::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            last_path: default_last_path(),
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "failed to read settings: {}", err),
            SettingsError::Parse(err) => write!(f, "failed to parse settings: {}", err),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl PlayerSettings {
    pub fn overlay_size(&self) -> Size {
        Size::new(self.overlay_width, self.overlay_height)
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        let settings: PlayerSettings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.video_src.trim().is_empty() {
            return Err(SettingsError::Invalid("video_src must not be empty".to_string()));
        }
        if !(self.overlay_width > 0.0 && self.overlay_height > 0.0) {
            return Err(SettingsError::Invalid("overlay size must be positive".to_string()));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsError::Invalid("window size must be positive".to_string()));
        }
        if !(self.drag.speed > 0.0 && self.drag.speed.is_finite()) {
            return Err(SettingsError::Invalid("drag.speed must be a positive number".to_string()));
        }
        if !(self.drag.commit_threshold_px >= 0.0) {
            return Err(SettingsError::Invalid("drag.commit_threshold_px must not be negative".to_string()));
        }
        if !(self.drag.margin_px >= 0.0) {
            return Err(SettingsError::Invalid("drag.margin_px must not be negative".to_string()));
        }
        Ok(())
    }
}

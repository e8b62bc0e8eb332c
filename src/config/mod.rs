// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! tuning values to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use media_viewer::config::{self, ViewerConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.animation_duration_ms = 300;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.animation_duration_ms, 300);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::{
    AnimationDuration, DismissThreshold, DoubleTapWindow, DoubleTapZoom, MaxZoomScale,
    PageMargin,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaViewer";

/// Tuning values for the viewer.
///
/// Fields are stored raw so that a hand-edited file round-trips untouched;
/// the accessor methods return clamped domain values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Open/close transition duration in milliseconds.
    pub animation_duration_ms: u64,
    /// Gap on each side of a page, in points.
    pub page_margin: f32,
    /// Upper bound for pinch zoom.
    pub max_zoom_scale: f32,
    /// Scale reached by a double tap.
    pub double_tap_zoom_scale: f32,
    /// Background alpha under which a released dismiss pan closes the viewer.
    pub dismiss_alpha_threshold: f32,
    /// Window for merging two taps into a double tap, in milliseconds.
    pub double_tap_window_ms: u64,
    /// Number of events kept in the diagnostics history.
    pub diagnostics_capacity: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            page_margin: DEFAULT_PAGE_MARGIN,
            max_zoom_scale: DEFAULT_MAX_ZOOM_SCALE,
            double_tap_zoom_scale: DEFAULT_DOUBLE_TAP_ZOOM_SCALE,
            dismiss_alpha_threshold: DEFAULT_DISMISS_ALPHA_THRESHOLD,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            diagnostics_capacity: DEFAULT_DIAGNOSTICS_CAPACITY,
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn animation_duration(&self) -> AnimationDuration {
        AnimationDuration::from_millis(self.animation_duration_ms)
    }

    #[must_use]
    pub fn page_margin(&self) -> PageMargin {
        PageMargin::new(self.page_margin)
    }

    #[must_use]
    pub fn max_zoom_scale(&self) -> MaxZoomScale {
        MaxZoomScale::new(self.max_zoom_scale)
    }

    #[must_use]
    pub fn double_tap_zoom(&self) -> DoubleTapZoom {
        DoubleTapZoom::new(self.double_tap_zoom_scale, self.max_zoom_scale())
    }

    #[must_use]
    pub fn dismiss_threshold(&self) -> DismissThreshold {
        DismissThreshold::new(self.dismiss_alpha_threshold)
    }

    #[must_use]
    pub fn double_tap_window(&self) -> DoubleTapWindow {
        DoubleTapWindow::from_millis(self.double_tap_window_ms)
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> usize {
        self.diagnostics_capacity
            .clamp(MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<ViewerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ViewerConfig::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &ViewerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`, falling back to defaults on invalid TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<ViewerConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(ViewerConfig::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &ViewerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

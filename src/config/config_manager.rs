// ==========================================
// Jharkhand Trip Planner - configuration manager
// ==========================================
// Settings load/query/update. Storage is a JSON file in the
// user's config directory; this subsystem keeps no database.
// ==========================================

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

// ==========================================
// PlannerSettings
// ==========================================

/// Tunable planner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// UI locale ("en" or "hi")
    pub locale: String,
    /// Destination used when onboarding supplies none
    pub default_destination: String,
    /// Assumed travel speed for duration estimates
    pub average_speed_kmh: f64,
    /// Corridor width for nearby-attraction suggestions
    pub nearby_buffer_km: f64,
    /// Interpolated waypoints per corridor
    pub waypoint_segments: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_destination: "Ranchi".to_string(),
            average_speed_kmh: 60.0,
            nearby_buffer_km: 10.0,
            waypoint_segments: 5,
        }
    }
}

// ==========================================
// ConfigManager
// ==========================================

pub struct ConfigManager {
    path: PathBuf,
    settings: RwLock<PlannerSettings>,
}

impl ConfigManager {
    /// Load settings from the given file, falling back to defaults
    /// when the file does not exist yet
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let path = path.into();
        let settings = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            PlannerSettings::default()
        };

        Ok(Self {
            path,
            settings: RwLock::new(settings),
        })
    }

    /// Load from the default location (see `default_config_path`)
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load(default_config_path())
    }

    /// Current settings snapshot
    pub fn settings(&self) -> PlannerSettings {
        self.settings
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Apply a change and persist it
    pub fn update(
        &self,
        f: impl FnOnce(&mut PlannerSettings),
    ) -> Result<PlannerSettings, Box<dyn Error>> {
        let updated = {
            let mut settings = self
                .settings
                .write()
                .map_err(|e| format!("settings lock poisoned: {}", e))?;
            f(&mut settings);
            settings.clone()
        };
        self.save(&updated)?;
        Ok(updated)
    }

    fn save(&self, settings: &PlannerSettings) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ==========================================
// Default config path
// ==========================================

/// Resolve the settings file location
///
/// # Resolution order
/// 1. TRIP_PLANNER_CONFIG_PATH environment variable (debug/test/CI)
/// 2. user config directory / jharkhand-trip-planner / config.json
/// 3. ./config.json
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("TRIP_PLANNER_CONFIG_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("jharkhand-trip-planner").join("config.json");
    }

    PathBuf::from("./config.json")
}

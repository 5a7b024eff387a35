//! Renderer feature flags, loaded from a TOML config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Feature toggles and sample counts controlling which rendering
/// passes run. Fields map directly onto the `[Feature]` section of the
/// original ini-style config this crate's caller is expected to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether shadow rays are cast for light visibility.
    pub enable_shadow: bool,
    /// Whether hit materials with non-zero `c_reflective` recurse into
    /// a mirror-reflection ray.
    pub enable_reflection: bool,
    /// Whether diffuse texture maps are sampled and blended in.
    pub enable_texture_map: bool,
    /// Whether each pixel accumulates `num_samples` jittered rays
    /// instead of one ray through the pixel center.
    pub enable_super_sample: bool,
    /// Sample count per pixel, only consulted when
    /// `enable_super_sample` is set.
    pub num_samples: u32,
    /// Whether the separable triangle blur runs after rendering.
    pub enable_post_process: bool,
    /// Whether the pixel loop is dispatched across worker threads.
    pub enable_parallelism: bool,

    /// Unused: refraction was never implemented (Non-goal).
    pub enable_refraction: bool,
    /// Unused: texture filtering was never implemented (Non-goal).
    pub enable_texture_filter: bool,
    /// Unused: spatial acceleration structures were never implemented.
    pub enable_acceleration: bool,
    /// Unused: depth of field was never implemented (Non-goal).
    pub enable_depth_of_field: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enable_shadow: false,
            enable_reflection: false,
            enable_texture_map: false,
            enable_super_sample: false,
            num_samples: 1,
            enable_post_process: false,
            enable_parallelism: false,
            enable_refraction: false,
            enable_texture_filter: false,
            enable_acceleration: false,
            enable_depth_of_field: false,
        }
    }
}

impl RenderConfig {
    /// Load a config from a TOML file. Missing fields fall back to
    /// `Default`, so a config that overrides only one flag is valid.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RenderError::ConfigParse(e.to_string()))
    }

    /// Save this config to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RenderError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The number of samples to take per pixel given the current
    /// supersampling toggle.
    #[must_use]
    pub fn effective_samples(&self) -> u32 {
        if self.enable_super_sample {
            self.num_samples.max(1)
        } else {
            1
        }
    }
}

use serde::{Deserialize, Serialize};

/// Which flavour of the runtime is running. `act` only exists in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    Development,
    Production,
}

impl Default for BuildMode {
    /// Mirrors the devtools gate: debug builds are development builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActConfig {
    #[serde(default)]
    pub build_mode: BuildMode,
}

impl ActConfig {
    pub fn development() -> Self {
        Self {
            build_mode: BuildMode::Development,
        }
    }

    pub fn production() -> Self {
        Self {
            build_mode: BuildMode::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        self.build_mode == BuildMode::Development
    }
}

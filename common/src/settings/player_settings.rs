use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub high_score: u32,
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            high_score: 0,
            sound_enabled: true,
            haptics_enabled: true,
        }
    }
}

impl Validate for PlayerSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

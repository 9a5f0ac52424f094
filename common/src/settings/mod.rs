mod player_settings;
mod store;

pub use player_settings::PlayerSettings;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};

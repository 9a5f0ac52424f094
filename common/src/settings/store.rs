use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::thread::JoinHandle;

use tokio::sync::mpsc;

use crate::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use crate::log;

use super::PlayerSettings;

pub trait SettingsStore: Send + Sync {
    fn high_score(&self) -> u32;
    fn set_high_score(&self, score: u32);
    fn sound_enabled(&self) -> bool;
    fn set_sound_enabled(&self, enabled: bool);
    fn haptics_enabled(&self) -> bool;
    fn set_haptics_enabled(&self, enabled: bool);

    fn settings(&self) -> PlayerSettings {
        PlayerSettings {
            high_score: self.high_score(),
            sound_enabled: self.sound_enabled(),
            haptics_enabled: self.haptics_enabled(),
        }
    }
}

#[derive(Default)]
pub struct MemorySettingsStore {
    settings: Mutex<PlayerSettings>,
}

impl MemorySettingsStore {
    pub fn new(settings: PlayerSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    fn read(&self) -> PlayerSettings {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, change: impl FnOnce(&mut PlayerSettings)) {
        change(&mut self.settings.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

impl SettingsStore for MemorySettingsStore {
    fn high_score(&self) -> u32 {
        self.read().high_score
    }

    fn set_high_score(&self, score: u32) {
        self.write(|s| s.high_score = score);
    }

    fn sound_enabled(&self) -> bool {
        self.read().sound_enabled
    }

    fn set_sound_enabled(&self, enabled: bool) {
        self.write(|s| s.sound_enabled = enabled);
    }

    fn haptics_enabled(&self) -> bool {
        self.read().haptics_enabled
    }

    fn set_haptics_enabled(&self, enabled: bool) {
        self.write(|s| s.haptics_enabled = enabled);
    }
}

type SettingsConfigManager =
    ConfigManager<FileContentConfigProvider, PlayerSettings, YamlConfigSerializer>;

pub struct FileSettingsStore {
    current: Mutex<PlayerSettings>,
    writes: Option<mpsc::UnboundedSender<PlayerSettings>>,
    writer: Option<JoinHandle<()>>,
}

impl FileSettingsStore {
    pub fn open(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let manager = SettingsConfigManager::from_yaml_file(file_path.clone());

        let settings = match manager.get_config() {
            Ok(settings) => settings,
            Err(e) => {
                log!(
                    "Failed to load settings from {}, using defaults: {}",
                    file_path.display(),
                    e
                );
                PlayerSettings::default()
            }
        };

        let (writes, write_rx) = mpsc::unbounded_channel();
        let writer = std::thread::Builder::new()
            .name("settings-writer".to_string())
            .spawn(move || run_writer(manager, write_rx));
        let writer = match writer {
            Ok(handle) => Some(handle),
            Err(e) => {
                log!("Failed to start settings writer, changes will not be saved: {}", e);
                None
            }
        };

        Self {
            current: Mutex::new(settings),
            writes: Some(writes),
            writer,
        }
    }

    fn read(&self) -> PlayerSettings {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, change: impl FnOnce(&mut PlayerSettings)) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        change(&mut current);

        // Sent under the lock so the writer sees changes in order.
        if let Some(writes) = &self.writes
            && writes.send(*current).is_err()
        {
            log!("Settings writer is gone, change kept in memory only");
        }
    }
}

// Only the newest pending value is written. The whole document is rewritten each time, so a
// corrupt file heals on the first change.
fn run_writer(
    manager: SettingsConfigManager,
    mut write_rx: mpsc::UnboundedReceiver<PlayerSettings>,
) {
    while let Some(mut latest) = write_rx.blocking_recv() {
        while let Ok(newer) = write_rx.try_recv() {
            latest = newer;
        }
        if let Err(e) = manager.set_config(&latest) {
            log!("Failed to save settings: {}", e);
        }
    }
}

impl Drop for FileSettingsStore {
    fn drop(&mut self) {
        self.writes.take();
        if let Some(writer) = self.writer.take()
            && writer.join().is_err()
        {
            log!("Settings writer panicked, last change may be lost");
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn high_score(&self) -> u32 {
        self.read().high_score
    }

    fn set_high_score(&self, score: u32) {
        self.write(|s| s.high_score = score);
    }

    fn sound_enabled(&self) -> bool {
        self.read().sound_enabled
    }

    fn set_sound_enabled(&self, enabled: bool) {
        self.write(|s| s.sound_enabled = enabled);
    }

    fn haptics_enabled(&self) -> bool {
        self.read().haptics_enabled
    }

    fn set_haptics_enabled(&self, enabled: bool) {
        self.write(|s| s.haptics_enabled = enabled);
    }
}

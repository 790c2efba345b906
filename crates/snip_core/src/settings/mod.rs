pub mod journal;
pub mod service;
pub mod ui;

use std::io::Write;

use serde::{Deserialize, Serialize};

pub use journal::Journal;
pub use service::Service;
pub use ui::{ThemeMode, UI};

pub const SETTINGS_FILE_PATH: &str = "./settings.yaml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service: Service,
    pub ui: UI,
    pub journal: Journal,
}

pub trait Loadable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn from_file(source: &str, fallback: bool) -> Self {
        log::info!("Loading settings from {:?}", source);
        match std::fs::read_to_string(source) {
            Ok(contents) => match serde_yaml::from_str::<Self>(&contents) {
                Ok(obj) => obj,
                Err(e) => {
                    panic!("Error while loading the config: {}", e);
                }
            },
            Err(e) => {
                if fallback {
                    return Self::default();
                }
                panic!("Error reading file at {:?}: {}", source, e);
            }
        }
    }

    fn to_file(&self, path: &str) {
        match serde_yaml::to_string(self) {
            Ok(s) => match std::fs::File::create(path) {
                Ok(mut f) => {
                    if f.write(s.as_bytes()).is_err() {
                        panic!("Failed to save settings")
                    }
                }
                Err(e) => {
                    panic!("Failed to save settings to {:?}: {}", path, e);
                }
            },
            Err(e) => {
                panic!("Error saving settings: {}", e);
            }
        }
    }
}

impl Loadable for Settings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.service.base_url, "http://localhost:3000");
        assert!(settings.service.api_token.is_empty());
        assert_eq!(settings.journal.app_events.level, log::LevelFilter::Info);
    }

    #[test]
    fn roundtrip_preserves_every_section() {
        let mut settings = Settings::default();
        settings.service.base_url = "https://sn.ip".into();
        settings.service.api_token = "secret".into();
        settings.ui.theme = ThemeMode::Light;
        settings.journal.app_events.level = log::LevelFilter::Debug;

        let serialized = serde_yaml::to_string(&settings).unwrap();
        let restored: Settings = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(restored.service.base_url, "https://sn.ip");
        assert_eq!(restored.service.api_token, "secret");
        assert_eq!(restored.ui.theme, ThemeMode::Light);
        assert_eq!(restored.journal.app_events.level, log::LevelFilter::Debug);
    }

    #[test]
    fn log_levels_are_spelled_in_lowercase() {
        let settings: Settings =
            serde_yaml::from_str("journal:\n  app_events:\n    level: trace\n").unwrap();
        assert_eq!(settings.journal.app_events.level, log::LevelFilter::Trace);
    }
}

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Which preset of the game to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Countdown clock, tiered scoring, intro/outro screens.
    #[default]
    Timed,
    /// No clock, flat scoring, straight into the board.
    Casual,
}

/// Startup knobs read once from `~/.config/flipfit/settings.json`. Feeds
/// the round's constructor parameters; nothing here is mutated at runtime
/// and no score ever gets written back.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    /// Fixed deal for replaying a board; omitted means a fresh shuffle.
    pub seed: Option<u64>,
    /// Where logo art lives; defaults to `assets/logos` beside the binary.
    pub assets_dir: Option<PathBuf>,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            variant: Variant::default(),
            seed: None,
            assets_dir: None,
            sound: true,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Settings::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Settings::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), %err, "malformed settings file, using defaults");
                Settings::default()
            }
        }
    }

    pub fn logos_dir(&self) -> PathBuf {
        self.assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets/logos"))
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(
        PathBuf::from(home)
            .join(".config/flipfit")
            .join(SETTINGS_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_timed_variant_with_sound() {
        let settings = Settings::default();
        assert_eq!(settings.variant, Variant::Timed);
        assert!(settings.sound);
        assert!(settings.seed.is_none());
        assert_eq!(settings.logos_dir(), PathBuf::from("assets/logos"));
    }

    #[test]
    fn partial_files_keep_unmentioned_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "variant": "casual", "seed": 99 }"#).unwrap();
        assert_eq!(settings.variant, Variant::Casual);
        assert_eq!(settings.seed, Some(99));
        assert!(settings.sound);
    }
}

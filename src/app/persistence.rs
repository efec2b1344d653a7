use super::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub palette: PaletteType,
    #[serde(default)]
    pub keys: KeyConfig,
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("nlsh-tour");
        path
    })
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|path| path.join("config.toml"))
}

/// Missing or malformed files fall back to defaults.
pub fn load_preferences() -> Preferences {
    config_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn save_preferences(prefs: &Preferences) {
    if let Some(path) = config_path() {
        if let Err(e) = save_to(&path, prefs) {
            tracing::warn!(error = %e, "failed to save preferences");
        }
    }
}

fn load_from(path: &Path) -> Preferences {
    if let Ok(content) = std::fs::read_to_string(path) {
        if let Ok(prefs) = toml::from_str::<Preferences>(&content) {
            return prefs;
        }
    }
    Preferences::default()
}

fn save_to(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string(prefs)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let prefs = Preferences {
            palette: PaletteType::Nord,
            keys: KeyConfig::default(),
        };
        save_to(&path, &prefs).unwrap();

        assert_eq!(load_from(&path), prefs);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        assert_eq!(load_from(&path), Preferences::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "palette = 17 this is not toml").unwrap();

        assert_eq!(load_from(&path), Preferences::default());
    }
}

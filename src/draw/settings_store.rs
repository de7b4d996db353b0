use crate::draw::settings::DrawSettings;
use anyhow::{Context, Result};
use std::path::Path;

pub const DRAW_SETTINGS_FILE_NAME: &str = "draw_settings.json";

/// Loads settings, falling back to defaults when the file is missing.
pub fn load_or_default(path: &Path) -> Result<DrawSettings> {
    Ok(load_from_path(path)?.unwrap_or_default())
}

pub fn load_from_path(path: &Path) -> Result<Option<DrawSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read draw settings file {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Some(DrawSettings::default()));
    }

    let mut loaded: DrawSettings = serde_json::from_str(&content)
        .with_context(|| format!("deserialize draw settings file {}", path.display()))?;
    loaded.sanitize();
    Ok(Some(loaded))
}

pub fn save_to_path(path: &Path, settings: &DrawSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create draw settings parent folder {}", parent.display()))?;
    }

    let mut sanitized = settings.clone();
    sanitized.sanitize();
    let json = serde_json::to_string_pretty(&sanitized).context("serialize draw settings")?;
    std::fs::write(path, json)
        .with_context(|| format!("write draw settings file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{load_from_path, load_or_default, save_to_path, DRAW_SETTINGS_FILE_NAME};
    use crate::draw::model::Color;
    use crate::draw::settings::DrawSettings;

    #[test]
    fn load_returns_none_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(DRAW_SETTINGS_FILE_NAME);

        assert_eq!(load_from_path(&path).expect("load"), None);
        assert_eq!(load_or_default(&path).expect("load"), DrawSettings::default());
    }

    #[test]
    fn empty_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(DRAW_SETTINGS_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");

        assert_eq!(
            load_from_path(&path).expect("load"),
            Some(DrawSettings::default())
        );
    }

    #[test]
    fn store_roundtrip_serialization() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(DRAW_SETTINGS_FILE_NAME);

        let mut settings = DrawSettings::default();
        settings.seed = Some(12);
        settings.background_color = Color::rgba(1, 2, 3, 255);

        save_to_path(&path, &settings).expect("save settings");
        let loaded = load_from_path(&path).expect("load settings");

        assert_eq!(loaded, Some(settings));
    }

    #[test]
    fn malformed_file_reports_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(DRAW_SETTINGS_FILE_NAME);
        std::fs::write(&path, "{ not json").expect("write");

        let err = load_from_path(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains(DRAW_SETTINGS_FILE_NAME));
    }
}

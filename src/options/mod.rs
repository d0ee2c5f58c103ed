//! Camera and control options with TOML preset support.
//!
//! Projection, speed, and key binding settings are consolidated here.
//! Options serialize to/from TOML so a host can keep presets on disk.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Key and button bindings.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, MouseButton};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
move_speed = 12.0

[keybindings]
move_forward = "I"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 12.0);
        assert_eq!(opts.keybindings.move_forward, Key::I);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.rotation_speed, 0.1);
        assert_eq!(opts.keybindings.move_backward, Key::S);
        assert_eq!(opts.keybindings.look_button, MouseButton::Right);
    }

    #[test]
    fn unknown_key_name_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[keybindings]\nmove_up = \"Hyper\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let root = tempfile::tempdir().unwrap();
        // save creates the missing presets directory
        let dir = root.path().join("presets");
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.keybindings.zoom_in = Key::C;

        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "wide"]);
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let root = tempfile::tempdir().unwrap();
        assert!(Options::list_presets(&root.path().join("absent")).is_empty());
    }
}

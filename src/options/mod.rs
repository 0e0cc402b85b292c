//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (camera, navigation, status texts, keybindings)
//! are consolidated here. Options serialize to/from TOML for presets.

mod camera;
mod keybindings;
mod navigation;
mod status;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use status::StatusOptions;

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Locomotion speeds, poses and the entry transition.
    pub navigation: NavigationOptions,
    /// Status line texts.
    pub status: StatusOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GalleryError> {
        toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(GalleryError::Io)
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
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[navigation]
move_speed = 0.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.move_speed, 0.5);
        // Everything else should be default
        assert_eq!(opts.navigation.min_height, 2.0);
        assert_eq!(opts.camera.rotate_speed, 0.005);
        assert_eq!(opts.status.moving, "이동 중...");
    }

    #[test]
    fn keybinding_table_parses_action_names() {
        let toml_str = r#"
[keybindings.bindings]
ArrowUp = "move_forward"
Escape = "reset_view"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        // A provided table replaces the default map wholesale.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.keys_for(KeyAction::Descend),
            vec!["ShiftLeft", "ShiftRight"]
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, GalleryError::OptionsParse(_)));
    }

    #[test]
    fn easing_is_configurable() {
        let opts = Options::from_toml(
            "[navigation]\nentry_easing = \"linear\"\n",
        )
        .unwrap();
        assert_eq!(
            opts.navigation.entry_easing,
            crate::util::easing::EasingFunction::Linear
        );
    }

    #[test]
    fn presets_save_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("memorial-gallery-presets-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut night = Options::default();
        night.navigation.move_speed = 0.15;
        night.status.entered = "Welcome".into();
        // The nested directory does not exist yet.
        let nested = dir.join("presets");
        night.save(&nested.join("night.toml")).unwrap();
        Options::default().save(&nested.join("day.toml")).unwrap();
        std::fs::write(nested.join("notes.txt"), "not a preset").unwrap();

        let loaded = Options::load(&nested.join("night.toml")).unwrap();
        assert_eq!(loaded, night);
        assert_eq!(Options::list_presets(&nested), vec!["day", "night"]);
        assert!(Options::list_presets(&dir.join("missing")).is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn loading_a_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("memorial-gallery-no-such.toml");
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("navigation"));
        assert!(props.contains_key("status"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}

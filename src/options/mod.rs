//! Orbit rig options with TOML preset support.
//!
//! Rig geometry, camera control and debug drawing settings are
//! consolidated here. Options serialize to/from TOML for presets; angles
//! are stored in degrees and converted to radians when applied.

mod camera;
mod debug;
mod rig;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Ellipsoid and orbit angles.
    pub rig: RigOptions,
    /// Interactive camera control parameters.
    pub camera: CameraOptions,
    /// Debug visualization options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        log::info!("Loaded orbit options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)?;
        log::info!("Saved orbit options to {}", path.display());
        Ok(())
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
[rig]
ellipsoid_size = [400.0, 200.0, 100.0]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.rig.ellipsoid_size, [400.0, 200.0, 100.0]);
        // Everything else should be default
        assert_eq!(opts.rig.vertical_angle_limit_deg, [6.0, 174.0]);
        assert_eq!(opts.rig.horizontal_angle_deg, 180.0);
        assert_eq!(opts.debug.patch_sides, 20);
        assert_eq!(opts.camera.rotate_speed, 0.5);
    }

    #[test]
    fn rig_options_convert_to_radians() {
        let rig = RigOptions {
            vertical_angle_limit_deg: [10.0, 170.0],
            ..RigOptions::default()
        };
        let limit = rig.vertical_limit();
        assert!((limit.min() - 10.0_f32.to_radians()).abs() < 1e-6);
        assert!((limit.max() - 170.0_f32.to_radians()).abs() < 1e-6);
        assert!(rig.ellipsoid().is_valid());
    }

    #[test]
    fn inverted_limit_in_toml_is_sanitized() {
        let toml_str = r"
[rig]
vertical_angle_limit_deg = [120.0, 30.0]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let limit = opts.rig.vertical_limit();
        assert!(limit.min() <= limit.max());
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbicam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.rig.horizontal_angle_deg = 45.0;
        opts.save(&dir.join("overview.toml")).unwrap();
        opts.save(&dir.join("close.toml")).unwrap();

        let loaded = Options::load(&dir.join("overview.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close", "overview"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/orbicam.toml"))
            .unwrap_err();
        assert!(matches!(err, OrbitError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("rig"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("debug"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        let debug = &props["debug"]["properties"];
        assert!(debug.get("mesh_alpha").is_some());
        assert!(debug.get("line_color").is_none());
    }
}

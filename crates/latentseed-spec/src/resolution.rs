//! Model resolution presets.
//!
//! Each supported generation model has a short list of named pixel sizes it
//! was trained around. The resolution node picks width/height from this table
//! and feeds them to the latent node; choosing [`CUSTOM_RESOLUTION`] (or an
//! unknown name) passes the manual width/height through instead.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Name of the manual-entry preset appended to every model.
pub const CUSTOM_RESOLUTION: &str = "Custom (manual)";

/// Size used when the table has no usable default.
pub const FALLBACK_SIZE: (u32, u32) = (512, 512);

/// A named pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPreset {
    /// Display name, e.g. "Portrait (2:3)".
    pub name: String,
    /// Pixel width (0 for the custom preset).
    pub width: u32,
    /// Pixel height (0 for the custom preset).
    pub height: u32,
}

impl ResolutionPreset {
    fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }

    /// Returns true for the manual-entry preset.
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_RESOLUTION
    }
}

/// Presets for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResolutions {
    /// Model name, e.g. "SDXL".
    pub model: String,
    /// Presets in display order.
    #[serde(default)]
    pub resolutions: Vec<ResolutionPreset>,
}

impl ModelResolutions {
    /// Looks up a preset by name.
    pub fn preset(&self, name: &str) -> Option<&ResolutionPreset> {
        self.resolutions.iter().find(|r| r.name == name)
    }
}

/// Default model/preset selection for a freshly created node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSelection {
    /// Model name (empty if the table is empty).
    pub model: String,
    /// Preset name.
    pub resolution: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

/// The full model-to-preset table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTable {
    /// Models in display order.
    pub models: Vec<ModelResolutions>,
}

impl ResolutionTable {
    /// The built-in table, with the custom preset appended to every model.
    pub fn builtin() -> Self {
        let mut table = Self {
            models: builtin_models(),
        };
        table.ensure_custom_presets();
        table
    }

    /// Parses a table from JSON and appends the custom preset where missing.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let mut table: Self = serde_json::from_str(json)?;
        table.ensure_custom_presets();
        Ok(table)
    }

    /// Serializes the table to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends the custom preset to every model that lacks it. Idempotent.
    pub fn ensure_custom_presets(&mut self) {
        for model in &mut self.models {
            if !model.resolutions.iter().any(ResolutionPreset::is_custom) {
                model
                    .resolutions
                    .push(ResolutionPreset::new(CUSTOM_RESOLUTION, 0, 0));
            }
        }
    }

    /// Model names in order.
    pub fn models(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.model.as_str()).collect()
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Option<&ModelResolutions> {
        self.models.iter().find(|m| m.model == name)
    }

    /// Unique preset names across all models, in first-seen order.
    pub fn resolution_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for model in &self.models {
            for preset in &model.resolutions {
                if !preset.name.is_empty() && !names.contains(&preset.name.as_str()) {
                    names.push(preset.name.as_str());
                }
            }
        }
        if names.is_empty() {
            names.push(CUSTOM_RESOLUTION);
        }
        names
    }

    /// The selection a new node starts with: first model, its first
    /// non-custom preset.
    pub fn default_selection(&self) -> DefaultSelection {
        let Some(model) = self.models.first() else {
            return DefaultSelection {
                model: String::new(),
                resolution: CUSTOM_RESOLUTION.to_string(),
                width: FALLBACK_SIZE.0,
                height: FALLBACK_SIZE.1,
            };
        };

        let preset = model
            .resolutions
            .iter()
            .find(|r| !r.is_custom())
            .or_else(|| model.resolutions.first());

        match preset {
            Some(p) if !p.is_custom() => DefaultSelection {
                model: model.model.clone(),
                resolution: p.name.clone(),
                width: p.width,
                height: p.height,
            },
            _ => DefaultSelection {
                model: model.model.clone(),
                resolution: CUSTOM_RESOLUTION.to_string(),
                width: FALLBACK_SIZE.0,
                height: FALLBACK_SIZE.1,
            },
        }
    }

    /// Resolves the pixel size for a model/preset pair.
    ///
    /// Returns the preset's size when `resolution` names a non-custom preset
    /// of `model`; otherwise returns the manual `width`/`height`.
    pub fn resolve(&self, model: &str, resolution: &str, width: u32, height: u32) -> (u32, u32) {
        if resolution.is_empty() || resolution == CUSTOM_RESOLUTION {
            return (width, height);
        }
        self.model(model)
            .and_then(|m| m.preset(resolution))
            .map(|p| (p.width, p.height))
            .unwrap_or((width, height))
    }
}

impl Default for ResolutionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn model(name: &str, presets: &[(&str, u32, u32)]) -> ModelResolutions {
    ModelResolutions {
        model: name.to_string(),
        resolutions: presets
            .iter()
            .map(|&(n, w, h)| ResolutionPreset::new(n, w, h))
            .collect(),
    }
}

fn builtin_models() -> Vec<ModelResolutions> {
    vec![
        model(
            "SD1.5",
            &[
                ("Square (1:1)", 512, 512),
                ("Square high-res (1:1)", 768, 768),
                ("Landscape (3:2)", 768, 512),
                ("Portrait (2:3)", 512, 768),
                ("Landscape (4:3)", 768, 576),
                ("Portrait (3:4)", 576, 768),
                ("Widescreen (16:9)", 912, 512),
                ("Tall (9:16)", 512, 912),
            ],
        ),
        model(
            "SDXL",
            &[
                ("Square (1:1 native)", 1024, 1024),
                ("Portrait (2:3)", 832, 1248),
                ("Standard (3:4)", 880, 1176),
                ("Large Format (4:5)", 912, 1144),
                ("SD TV (4:3)", 1176, 888),
                ("IMAX (1.43:1)", 1224, 856),
                ("Golden Ratio (1.618:1)", 1296, 800),
                ("European Widescreen (1.66:1)", 1312, 792),
                ("Widescreen / HD TV (16:9)", 1360, 768),
                ("Standard Widescreen (1.85:1)", 1392, 752),
                ("Cinemascope / Panavision (2.35:1)", 1568, 664),
                ("Anamorphic Widescreen (2.39:1)", 1576, 656),
                ("Older TV & Documentaries (4:3)", 1176, 880),
            ],
        ),
        model(
            "Illustrious XL v1.0",
            &[
                ("Minimum training bound", 512, 512),
                ("Non-standard example", 1248, 1824),
                ("Native high-res support", 1536, 1536),
            ],
        ),
        model(
            "Illustrious XL v3.0",
            &[
                ("Minimum usable", 256, 256),
                ("Standard high-res", 1536, 1536),
                ("Maximum native", 2048, 2048),
            ],
        ),
        model(
            "Pony XL",
            &[
                ("Portrait-tall", 832, 1216),
                ("Landscape-wide", 1216, 832),
                ("Square (1:1)", 1024, 1024),
            ],
        ),
        model(
            "Flux.1 Dev",
            &[
                ("512×512 (1 MP quick test)", 512, 512),
                ("1024×1024 (daily work)", 1024, 1024),
                ("1600×1600 (detailed work)", 1600, 1600),
                ("1920×1080 (HD)", 1920, 1080),
                ("2560×1440 (QHD)", 2560, 1440),
                ("3840×2160 (4K)", 3840, 2160),
            ],
        ),
        model(
            "Qwen-Image",
            &[
                ("Square (1:1)", 1328, 1328),
                ("Widescreen (16:9)", 1664, 928),
                ("Tall (9:16)", 928, 1664),
                ("Landscape (4:3)", 1472, 1140),
                ("Portrait (3:4)", 1140, 1472),
            ],
        ),
        model("Wan2.2-S2V", &[("720p HD video", 1280, 720)]),
        model(
            "SD3.5 Large",
            &[
                ("768×1152 (best portrait)", 768, 1152),
                ("1152×768 (best landscape)", 1152, 768),
                ("1024×1024 (square)", 1024, 1024),
                ("768×768 (quick test)", 768, 768),
                ("832×1216 portrait", 832, 1216),
                ("1216×832 landscape", 1216, 832),
            ],
        ),
        model(
            "Lumina-Image 2.0",
            &[("Default (1 MP square)", 1024, 1024)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_models_in_order() {
        let table = ResolutionTable::builtin();
        let models = table.models();
        assert_eq!(models.len(), 10);
        assert_eq!(models[0], "SD1.5");
        assert_eq!(models[1], "SDXL");
        assert_eq!(models[9], "Lumina-Image 2.0");
    }

    #[test]
    fn test_every_model_ends_with_custom() {
        let table = ResolutionTable::builtin();
        for model in &table.models {
            let last = model.resolutions.last().unwrap();
            assert!(last.is_custom(), "{} lacks custom preset", model.model);
            assert_eq!((last.width, last.height), (0, 0));
        }
    }

    #[test]
    fn test_custom_append_is_idempotent() {
        let mut table = ResolutionTable::builtin();
        let before = table.clone();
        table.ensure_custom_presets();
        assert_eq!(table, before);
    }

    #[test]
    fn test_resolve_known_preset() {
        let table = ResolutionTable::builtin();
        assert_eq!(table.resolve("SDXL", "Portrait (2:3)", 1, 1), (832, 1248));
        assert_eq!(table.resolve("SD1.5", "Portrait (2:3)", 1, 1), (512, 768));
        assert_eq!(table.resolve("Wan2.2-S2V", "720p HD video", 1, 1), (1280, 720));
    }

    #[test]
    fn test_resolve_falls_back_to_manual() {
        let table = ResolutionTable::builtin();
        assert_eq!(table.resolve("SDXL", CUSTOM_RESOLUTION, 640, 480), (640, 480));
        assert_eq!(table.resolve("SDXL", "Tall (9:16)", 640, 480), (640, 480));
        assert_eq!(table.resolve("Unknown", "Square (1:1)", 640, 480), (640, 480));
        assert_eq!(table.resolve("SDXL", "", 640, 480), (640, 480));
    }

    #[test]
    fn test_resolution_names_unique_first_seen() {
        let table = ResolutionTable::builtin();
        let names = table.resolution_names();
        assert_eq!(names[0], "Square (1:1)");
        assert_eq!(names[1], "Square high-res (1:1)");
        let squares = names.iter().filter(|n| **n == "Square (1:1)").count();
        assert_eq!(squares, 1);
        let customs = names.iter().filter(|n| **n == CUSTOM_RESOLUTION).count();
        assert_eq!(customs, 1);
    }

    #[test]
    fn test_default_selection() {
        let selection = ResolutionTable::builtin().default_selection();
        assert_eq!(selection.model, "SD1.5");
        assert_eq!(selection.resolution, "Square (1:1)");
        assert_eq!((selection.width, selection.height), (512, 512));
    }

    #[test]
    fn test_default_selection_empty_table() {
        let table = ResolutionTable { models: vec![] };
        let selection = table.default_selection();
        assert_eq!(selection.model, "");
        assert_eq!((selection.width, selection.height), FALLBACK_SIZE);
        assert_eq!(table.resolution_names(), vec![CUSTOM_RESOLUTION]);
    }

    #[test]
    fn test_json_round_trip_keeps_custom() {
        let json = r#"{"models":[{"model":"Tiny","resolutions":[{"name":"Small","width":64,"height":64}]}]}"#;
        let table = ResolutionTable::from_json(json).unwrap();
        assert_eq!(table.model("Tiny").unwrap().resolutions.len(), 2);

        let again = ResolutionTable::from_json(&table.to_json_pretty().unwrap()).unwrap();
        assert_eq!(again, table);
    }
}

//! Host node boundary.
//!
//! The graph editor hands the latent node raw widget values: pixel sizes,
//! a model combo label, a noise combo label, intensity, and seed. This module
//! enforces the widget ranges and turns those labels into closed enums once,
//! so nothing downstream ever inspects a label string.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::request::{ModelType, NoiseFamily, NoiseRequest};

/// Raw inputs as the host node receives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInputs {
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Batch size.
    pub batch_size: u32,
    /// Model combo label, e.g. "Flux/Qwen/SD3/Lumina (16ch)".
    pub model_type: String,
    /// Noise combo label, e.g. "Pink (1/f): Photorealism, Portraits, Nature".
    pub noise_type: String,
    /// Intensity.
    pub intensity: f64,
    /// Seed.
    pub seed: u64,
}

impl Default for NodeInputs {
    fn default() -> Self {
        let limits = InputLimits::default();
        Self {
            width: limits.default_size,
            height: limits.default_size,
            batch_size: limits.batch_min,
            model_type: ModelType::FourChannel.label().to_string(),
            noise_type: NoiseFamily::White.label().to_string(),
            intensity: limits.default_intensity,
            seed: 0,
        }
    }
}

/// Widget ranges the host enforces before the synthesizer sees a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    /// Smallest pixel width/height.
    pub size_min: u32,
    /// Largest pixel width/height.
    pub size_max: u32,
    /// Width/height widget step.
    pub size_step: u32,
    /// Default width/height.
    pub default_size: u32,
    /// Smallest batch size.
    pub batch_min: u32,
    /// Largest batch size.
    pub batch_max: u32,
    /// Smallest intensity.
    pub intensity_min: f64,
    /// Largest intensity.
    pub intensity_max: f64,
    /// Default intensity.
    pub default_intensity: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            size_min: 64,
            size_max: 8192,
            size_step: 8,
            default_size: 512,
            batch_min: 1,
            batch_max: 64,
            intensity_min: 0.0,
            intensity_max: 10.0,
            default_intensity: 1.0,
        }
    }
}

impl InputLimits {
    /// Clamps a pixel dimension into range and snaps it to the widget step.
    pub fn clamp_size(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.size_min, self.size_max);
        let steps = (clamped - self.size_min + self.size_step / 2) / self.size_step;
        (self.size_min + steps * self.size_step).min(self.size_max)
    }

    /// Clamps a batch size into range.
    pub fn clamp_batch(&self, value: u32) -> u32 {
        value.clamp(self.batch_min, self.batch_max)
    }

    /// Clamps an intensity into range. NaN falls back to the default.
    pub fn clamp_intensity(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default_intensity
        } else {
            value.clamp(self.intensity_min, self.intensity_max)
        }
    }

    /// Returns true if a pixel dimension is inside the widget range.
    pub fn size_in_range(&self, value: u32) -> bool {
        (self.size_min..=self.size_max).contains(&value)
    }

    /// Returns true if a batch size is inside the widget range.
    pub fn batch_in_range(&self, value: u32) -> bool {
        (self.batch_min..=self.batch_max).contains(&value)
    }

    /// Returns true if an intensity is inside the widget range.
    pub fn intensity_in_range(&self, value: f64) -> bool {
        value >= self.intensity_min && value <= self.intensity_max
    }

    /// Applies every widget range to a set of inputs.
    pub fn clamp(&self, inputs: &NodeInputs) -> NodeInputs {
        NodeInputs {
            width: self.clamp_size(inputs.width),
            height: self.clamp_size(inputs.height),
            batch_size: self.clamp_batch(inputs.batch_size),
            model_type: inputs.model_type.clone(),
            noise_type: inputs.noise_type.clone(),
            intensity: self.clamp_intensity(inputs.intensity),
            seed: inputs.seed,
        }
    }
}

impl NoiseRequest {
    /// Builds a request from raw host inputs.
    ///
    /// Inputs are clamped with the default [`InputLimits`] and the two labels
    /// are resolved to [`ModelType`] and [`NoiseFamily`].
    pub fn from_node_inputs(inputs: &NodeInputs) -> Result<Self, SpecError> {
        Self::from_node_inputs_with_limits(inputs, &InputLimits::default())
    }

    /// Builds a request from raw host inputs using explicit limits.
    pub fn from_node_inputs_with_limits(
        inputs: &NodeInputs,
        limits: &InputLimits,
    ) -> Result<Self, SpecError> {
        let inputs = limits.clamp(inputs);
        let noise_family = NoiseFamily::from_label(&inputs.noise_type)?;
        let model_type = ModelType::from_label(&inputs.model_type);

        Ok(NoiseRequest {
            width: inputs.width,
            height: inputs.height,
            batch_size: inputs.batch_size,
            channels: model_type.channels(),
            noise_family,
            intensity: inputs.intensity,
            seed: inputs.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_size_range_and_step() {
        let limits = InputLimits::default();
        assert_eq!(limits.clamp_size(0), 64);
        assert_eq!(limits.clamp_size(512), 512);
        assert_eq!(limits.clamp_size(515), 512);
        assert_eq!(limits.clamp_size(516), 520);
        assert_eq!(limits.clamp_size(100_000), 8192);
    }

    #[test]
    fn test_clamp_batch_and_intensity() {
        let limits = InputLimits::default();
        assert_eq!(limits.clamp_batch(0), 1);
        assert_eq!(limits.clamp_batch(65), 64);
        assert_eq!(limits.clamp_intensity(-1.0), 0.0);
        assert_eq!(limits.clamp_intensity(12.5), 10.0);
        assert_eq!(limits.clamp_intensity(f64::NAN), 1.0);
        assert_eq!(limits.clamp_intensity(f64::INFINITY), 10.0);
    }

    #[test]
    fn test_default_inputs_build_default_request() {
        let request = NoiseRequest::from_node_inputs(&NodeInputs::default()).unwrap();
        assert_eq!(request.width, 512);
        assert_eq!(request.height, 512);
        assert_eq!(request.batch_size, 1);
        assert_eq!(request.channels, 4);
        assert_eq!(request.noise_family, NoiseFamily::White);
        assert_eq!(request.intensity, 1.0);
        assert_eq!(request.seed, 0);
    }

    #[test]
    fn test_node_inputs_resolve_labels() {
        let inputs = NodeInputs {
            model_type: ModelType::SixteenChannel.label().to_string(),
            noise_type: NoiseFamily::Plasma.label().to_string(),
            seed: 99,
            ..NodeInputs::default()
        };
        let request = NoiseRequest::from_node_inputs(&inputs).unwrap();
        assert_eq!(request.channels, 16);
        assert_eq!(request.noise_family, NoiseFamily::Plasma);
        assert_eq!(request.seed, 99);
    }

    #[test]
    fn test_node_inputs_are_clamped() {
        let inputs = NodeInputs {
            width: 10,
            height: 9000,
            batch_size: 500,
            intensity: 50.0,
            ..NodeInputs::default()
        };
        let request = NoiseRequest::from_node_inputs(&inputs).unwrap();
        assert_eq!(request.width, 64);
        assert_eq!(request.height, 8192);
        assert_eq!(request.batch_size, 64);
        assert_eq!(request.intensity, 10.0);
    }

    #[test]
    fn test_unknown_noise_label_is_rejected() {
        let inputs = NodeInputs {
            noise_type: "Blue: sharp".to_string(),
            ..NodeInputs::default()
        };
        assert!(matches!(
            NoiseRequest::from_node_inputs(&inputs),
            Err(SpecError::UnknownLabel { kind: "noise type", .. })
        ));
    }
}

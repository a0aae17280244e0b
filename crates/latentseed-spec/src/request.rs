//! Noise request types.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Linear compression ratio between pixel space and latent space.
pub const LATENT_SCALE: u32 = 8;

/// Noise family: the spectral or statistical character of the generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseFamily {
    /// Independent standard-normal samples (flat spectrum).
    White,
    /// 1/f power spectrum.
    Pink,
    /// 1/f^2 power spectrum.
    Brown,
    /// Multi-octave upsampled blend approximating Perlin noise.
    Perlin,
    /// 1/f^3 power spectrum (very smooth).
    Plasma,
}

impl NoiseFamily {
    /// All families in host combo order.
    pub const ALL: [NoiseFamily; 5] = [
        NoiseFamily::White,
        NoiseFamily::Pink,
        NoiseFamily::Brown,
        NoiseFamily::Perlin,
        NoiseFamily::Plasma,
    ];

    /// Returns the snake_case name used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseFamily::White => "white",
            NoiseFamily::Pink => "pink",
            NoiseFamily::Brown => "brown",
            NoiseFamily::Perlin => "perlin",
            NoiseFamily::Plasma => "plasma",
        }
    }

    /// Returns the descriptive label the host node shows in its combo box.
    pub fn label(&self) -> &'static str {
        match self {
            NoiseFamily::White => {
                "Gaussian (White): Sharp Architecture, Text, intricate mechanics"
            }
            NoiseFamily::Pink => "Pink (1/f): Photorealism, Portraits, Nature",
            NoiseFamily::Brown => "Brown (1/f²): Anime, Digital Art, Bokeh/Backgrounds",
            NoiseFamily::Perlin => "Perlin : Fantasy landscapes, Fluids, Hair/Fabric",
            NoiseFamily::Plasma => "Plasma : Sci-Fi, Abstract, Alien terrain",
        }
    }

    /// Power-law exponent for the spectral families.
    ///
    /// Returns `None` for White and Perlin, which do not use spectral shaping.
    pub fn spectral_exponent(&self) -> Option<f64> {
        match self {
            NoiseFamily::Pink => Some(1.0),
            NoiseFamily::Brown => Some(2.0),
            NoiseFamily::Plasma => Some(3.0),
            NoiseFamily::White | NoiseFamily::Perlin => None,
        }
    }

    /// Maps a host label or a bare family name to a family.
    ///
    /// Accepts the full combo labels from [`NoiseFamily::label`] as well as
    /// the bare names (`white`, `gaussian`, `pink`, `brown`, `perlin`,
    /// `plasma`) in any case. The label's leading word decides the family.
    pub fn from_label(label: &str) -> Result<Self, SpecError> {
        let head = label
            .trim()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match head.as_str() {
            "white" | "gaussian" => Ok(NoiseFamily::White),
            "pink" => Ok(NoiseFamily::Pink),
            "brown" => Ok(NoiseFamily::Brown),
            "perlin" => Ok(NoiseFamily::Perlin),
            "plasma" => Ok(NoiseFamily::Plasma),
            _ => Err(SpecError::UnknownLabel {
                kind: "noise type",
                label: label.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for NoiseFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NoiseFamily {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Latent layout of the target generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// SD1.5, SDXL and other 4-channel latent models.
    FourChannel,
    /// Flux, SD3 and other 16-channel latent models.
    SixteenChannel,
}

impl ModelType {
    /// Both model types in host combo order.
    pub const ALL: [ModelType; 2] = [ModelType::FourChannel, ModelType::SixteenChannel];

    /// Number of latent channels.
    pub fn channels(&self) -> u32 {
        match self {
            ModelType::FourChannel => 4,
            ModelType::SixteenChannel => 16,
        }
    }

    /// Returns the host combo label.
    pub fn label(&self) -> &'static str {
        match self {
            ModelType::FourChannel => "SD1.5/SDXL/PicsArt/Kolors/Auraflow (4ch)",
            ModelType::SixteenChannel => "Flux/Qwen/SD3/Lumina (16ch)",
        }
    }

    /// Maps a host model label to a model type.
    ///
    /// Any label containing `16ch` selects the 16-channel layout; everything
    /// else selects the 4-channel layout.
    pub fn from_label(label: &str) -> Self {
        if label.contains("16ch") {
            ModelType::SixteenChannel
        } else {
            ModelType::FourChannel
        }
    }

    /// Maps a channel count back to a model type.
    pub fn from_channels(channels: u32) -> Option<Self> {
        match channels {
            4 => Some(ModelType::FourChannel),
            16 => Some(ModelType::SixteenChannel),
            _ => None,
        }
    }
}

/// Dimensions of a latent noise field, indexed `[batch, channel, row, column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatentShape {
    /// Number of fields in the batch.
    pub batch: usize,
    /// Channels per field.
    pub channels: usize,
    /// Rows per channel plane.
    pub height: usize,
    /// Columns per channel plane.
    pub width: usize,
}

impl LatentShape {
    /// Creates a shape from its four dimensions.
    pub fn new(batch: usize, channels: usize, height: usize, width: usize) -> Self {
        Self {
            batch,
            channels,
            height,
            width,
        }
    }

    /// Number of elements in one channel plane.
    pub fn plane_len(&self) -> usize {
        self.height * self.width
    }

    /// Total number of elements.
    ///
    /// Overflows for shapes that [`LatentShape::checked_len`] rejects.
    pub fn len(&self) -> usize {
        self.batch * self.channels * self.plane_len()
    }

    /// Total number of elements, or `None` if it does not fit in `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.dims()
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Returns true if any dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.dims().contains(&0)
    }

    /// Returns the dimensions as an array in index order.
    pub fn dims(&self) -> [usize; 4] {
        [self.batch, self.channels, self.height, self.width]
    }
}

impl std::fmt::Display for LatentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.batch, self.channels, self.height, self.width
        )
    }
}

/// A request for one batch of latent noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseRequest {
    /// Target image width in pixels.
    pub width: u32,
    /// Target image height in pixels.
    pub height: u32,
    /// Number of fields to generate.
    pub batch_size: u32,
    /// Latent channel count (4 or 16).
    pub channels: u32,
    /// Spectral character of the noise.
    pub noise_family: NoiseFamily,
    /// Output standard deviation after normalization.
    pub intensity: f64,
    /// Seed for the request-scoped random stream.
    pub seed: u64,
}

impl NoiseRequest {
    /// Creates a request with a batch of one, 4 channels, and unit intensity.
    pub fn new(width: u32, height: u32, noise_family: NoiseFamily, seed: u64) -> Self {
        Self {
            width,
            height,
            batch_size: 1,
            channels: ModelType::FourChannel.channels(),
            noise_family,
            intensity: 1.0,
            seed,
        }
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the channel count.
    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the channel count from a model type.
    pub fn with_model_type(mut self, model_type: ModelType) -> Self {
        self.channels = model_type.channels();
        self
    }

    /// Sets the intensity.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Latent height (pixel height floored to the latent grid).
    pub fn latent_height(&self) -> usize {
        (self.height / LATENT_SCALE) as usize
    }

    /// Latent width (pixel width floored to the latent grid).
    pub fn latent_width(&self) -> usize {
        (self.width / LATENT_SCALE) as usize
    }

    /// Shape of the field this request produces.
    pub fn latent_shape(&self) -> LatentShape {
        LatentShape::new(
            self.batch_size as usize,
            self.channels as usize,
            self.latent_height(),
            self.latent_width(),
        )
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the request to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }
}

//! Field encoders for `generate --output`.
//!
//! - `f32le`: the raw field as little-endian `f32`, `[batch, channel, row,
//!   column]` order, no header
//! - `json`: `{"shape": [b, c, h, w], "data": [...]}`

use byteorder::{LittleEndian, WriteBytesExt};
use latentseed_backend_noise::NoiseField;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// On-disk encoding of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw little-endian f32.
    #[default]
    F32Le,
    /// Shape plus flat data as JSON.
    Json,
}

impl OutputFormat {
    /// Every format name accepted on the command line.
    pub const NAMES: [&'static str; 2] = ["f32le", "json"];

    /// Returns the command-line name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::F32Le => "f32le",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f32le" => Ok(OutputFormat::F32Le),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected f32le or json)",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct JsonField<'a> {
    shape: [usize; 4],
    data: &'a [f64],
}

/// Write `field` as little-endian `f32` samples.
pub fn write_f32le<W: Write>(field: &NoiseField, mut writer: W) -> io::Result<()> {
    for &v in field.data() {
        writer.write_f32::<LittleEndian>(v as f32)?;
    }
    writer.flush()
}

/// Write `field` as a JSON document.
pub fn write_json<W: Write>(field: &NoiseField, mut writer: W) -> io::Result<()> {
    let doc = JsonField {
        shape: field.shape().dims(),
        data: field.data(),
    };
    serde_json::to_writer(&mut writer, &doc)?;
    writer.flush()
}

/// Encode `field` into a file at `path`.
pub fn write_field(field: &NoiseField, path: &Path, format: OutputFormat) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::F32Le => write_f32le(field, writer),
        OutputFormat::Json => write_json(field, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latentseed_spec::LatentShape;
    use pretty_assertions::assert_eq;

    fn sample_field() -> NoiseField {
        NoiseField::from_vec(LatentShape::new(1, 1, 1, 3), vec![1.0, -0.5, 0.25]).unwrap()
    }

    #[test]
    fn test_format_names_parse() {
        for name in OutputFormat::NAMES {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.as_str(), name);
        }
        assert!("f64be".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_f32le_bytes() {
        let mut buf = Vec::new();
        write_f32le(&sample_field(), &mut buf).unwrap();
        assert_eq!(buf.len(), 12);
        assert_eq!(&buf[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&buf[4..8], &(-0.5f32).to_le_bytes());
        assert_eq!(&buf[8..12], &0.25f32.to_le_bytes());
    }

    #[test]
    fn test_json_document() {
        let mut buf = Vec::new();
        write_json(&sample_field(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["shape"], serde_json::json!([1, 1, 1, 3]));
        assert_eq!(value["data"], serde_json::json!([1.0, -0.5, 0.25]));
    }

    #[test]
    fn test_write_field_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.f32");
        write_field(&sample_field(), &path, OutputFormat::F32Le).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 12);
    }
}

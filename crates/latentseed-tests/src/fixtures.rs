//! Request fixtures shared by the integration tests.

use latentseed_spec::{NoiseFamily, NoiseRequest};
use std::fs;
use std::path::{Path, PathBuf};

/// 512x512 pink noise, seed 42: one 4-channel 64x64 latent.
pub fn pink_scenario() -> NoiseRequest {
    NoiseRequest::new(512, 512, NoiseFamily::Pink, 42)
}

/// 256x256 white noise, batch 2, 16 channels, intensity 2, seed 7.
pub fn white_batch_scenario() -> NoiseRequest {
    NoiseRequest::new(256, 256, NoiseFamily::White, 7)
        .with_batch_size(2)
        .with_channels(16)
        .with_intensity(2.0)
}

/// Default-size Perlin noise, seed 1.
pub fn perlin_scenario() -> NoiseRequest {
    NoiseRequest::new(512, 512, NoiseFamily::Perlin, 1)
}

/// One request per family at the given size and seed.
pub fn every_family(width: u32, height: u32, seed: u64) -> Vec<NoiseRequest> {
    NoiseFamily::ALL
        .into_iter()
        .map(|family| NoiseRequest::new(width, height, family, seed))
        .collect()
}

/// Write `request` as pretty JSON to `dir/name.json`.
pub fn write_request(dir: &Path, name: &str, request: &NoiseRequest) -> PathBuf {
    let path = dir.join(format!("{}.json", name));
    let json = request
        .to_json_pretty()
        .expect("request serialization should not fail");
    fs::write(&path, json).expect("Failed to write request file");
    path
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::audio::load_wav;
use crate::header::{render_header, validate_array_name};
use crate::normalize::normalize;
use crate::resample::{resample, Interpolation, TABLE_SIZE};

pub const DEFAULT_WAV_PATH: &str = "buchla_triangle_1cyc.wav";
pub const DEFAULT_OUTPUT_PATH: &str = "BuchlaTriangle.h";
pub const DEFAULT_ARRAY_NAME: &str = "buchlaTriangle_512";

#[derive(Clone, Debug, PartialEq)]
pub struct ConvertConfig {
    pub wav_path: PathBuf,
    pub output_path: PathBuf,
    /// Must be a C identifier; it is also uppercased into the include guard.
    pub array_name: String,
    pub interpolation: Interpolation,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            wav_path: PathBuf::from(DEFAULT_WAV_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            interpolation: Interpolation::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConvertReport {
    pub sample_rate: u32,
    pub channels: usize,
    pub input_len: usize,
    pub peak: f64,
    pub table: Vec<f64>,
}

/// Resamples one channel to `TABLE_SIZE` points and normalizes it.
/// Returns the table and the peak measured before normalization.
pub fn build_table(samples: &[f64], interpolation: Interpolation) -> Result<(Vec<f64>, f64)> {
    let mut table = resample(samples, TABLE_SIZE, interpolation)?;
    let peak = normalize(&mut table);
    Ok((table, peak))
}

pub fn write_header(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write header {}", path.display()))
}

pub fn convert(config: &ConvertConfig) -> Result<ConvertReport> {
    validate_array_name(&config.array_name)?;

    let audio = load_wav(&config.wav_path)?;
    if audio.channels > 1 {
        tracing::debug!("using channel 0, dropping {} other channel(s)", audio.channels - 1);
    }
    let samples = audio.first_channel();

    let (table, peak) = build_table(&samples, config.interpolation)
        .with_context(|| format!("cannot build a wavetable from {}", config.wav_path.display()))?;
    if peak == 0.0 {
        tracing::warn!("{} is silent, table left at zero", config.wav_path.display());
    }
    tracing::info!(
        "resampled {} frames at {} Hz to {} points ({}), peak {:.6}",
        samples.len(),
        audio.sample_rate,
        TABLE_SIZE,
        config.interpolation,
        peak
    );

    let text = render_header(&table, &config.array_name, &config.wav_path);
    write_header(&config.output_path, &text)?;

    Ok(ConvertReport {
        sample_rate: audio.sample_rate,
        channels: audio.channels,
        input_len: samples.len(),
        peak,
        table,
    })
}

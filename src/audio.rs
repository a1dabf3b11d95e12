use std::path::Path;

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader};

use crate::error::WavetableError;

/// Decoded WAV payload. `samples` stays interleaved exactly as stored.
pub struct AudioSource {
    pub samples: Vec<f32>,
    pub channels: usize,
    pub sample_rate: u32,
}

impl AudioSource {
    /// Channel 0, de-interleaved. Any further channels are dropped on purpose:
    /// stereo single-cycle captures are converted from their left side only.
    pub fn first_channel(&self) -> Vec<f64> {
        self.samples
            .iter()
            .step_by(self.channels.max(1))
            .map(|&s| s as f64)
            .collect()
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1)
    }
}

pub fn load_wav(path: &Path) -> Result<AudioSource> {
    let mut reader = WavReader::open(path)
        .with_context(|| format!("failed to open WAV file {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    if channels == 0 {
        return Err(WavetableError::NoChannels.into());
    }

    let mut samples = Vec::with_capacity(reader.len() as usize);

    match spec.sample_format {
        SampleFormat::Float => {
            for sample in reader.samples::<f32>() {
                samples.push(sample.with_context(|| format!("corrupt sample data in {}", path.display()))?);
            }
        }
        SampleFormat::Int => {
            let bits = spec.bits_per_sample as i32;
            let max = ((1i64 << (bits - 1)) - 1) as f32;
            if bits <= 16 {
                for sample in reader.samples::<i16>() {
                    let v = sample.with_context(|| format!("corrupt sample data in {}", path.display()))?;
                    samples.push(v as f32 / max);
                }
            } else {
                for sample in reader.samples::<i32>() {
                    let v = sample.with_context(|| format!("corrupt sample data in {}", path.display()))?;
                    samples.push(v as f32 / max);
                }
            }
        }
    }

    tracing::debug!(
        "loaded {}: {} Hz, {} channel(s), {}-bit {:?}",
        path.display(),
        spec.sample_rate,
        channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    Ok(AudioSource {
        samples,
        channels,
        sample_rate: spec.sample_rate,
    })
}

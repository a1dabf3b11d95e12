use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use wavetable_header::config::Settings;
use wavetable_header::convert::{convert, ConvertConfig};
use wavetable_header::resample::Interpolation;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let mut config_path = None;
    let mut wav = None;
    let mut out = None;
    let mut name = None;
    let mut interp = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(
                    args.get(i).ok_or_else(|| anyhow!("missing config path"))?,
                ));
            }
            "--wav" => {
                i += 1;
                wav = Some(PathBuf::from(
                    args.get(i).ok_or_else(|| anyhow!("missing wav path"))?,
                ));
            }
            "--out" => {
                i += 1;
                out = Some(PathBuf::from(
                    args.get(i).ok_or_else(|| anyhow!("missing output path"))?,
                ));
            }
            "--name" => {
                i += 1;
                name = Some(args.get(i).cloned().ok_or_else(|| anyhow!("missing array name"))?);
            }
            "--interp" => {
                i += 1;
                interp = Some(
                    args.get(i)
                        .ok_or_else(|| anyhow!("missing interpolation"))?
                        .parse::<Interpolation>()?,
                );
            }
            other => {
                return Err(anyhow!("unknown arg: {}", other));
            }
        }
        i += 1;
    }

    let mut config = ConvertConfig::default();
    if let Some(path) = config_path {
        Settings::load(&path)?.apply(&mut config)?;
    }
    if let Some(wav) = wav {
        config.wav_path = wav;
    }
    if let Some(out) = out {
        config.output_path = out;
    }
    if let Some(name) = name {
        config.array_name = name;
    }
    if let Some(interp) = interp {
        config.interpolation = interp;
    }

    convert(&config)?;
    println!(
        "Success! Created {} with array '{}'",
        config.output_path.display(),
        config.array_name
    );
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: wavetable-header [--wav in.wav] [--out out.h] [--name array_name] [--interp catmull-rom|spline] [--config job.json]");
    eprintln!("Without arguments converts buchla_triangle_1cyc.wav into BuchlaTriangle.h (array buchlaTriangle_512).");
}

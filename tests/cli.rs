use std::fs;

use assert_cmd::Command;
use hound::{SampleFormat, WavSpec, WavWriter};
use predicates::prelude::*;
use tempfile::tempdir;

fn write_wave(path: &std::path::Path) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for i in 0..200 {
        let s = ((i as f32 / 200.0) * std::f32::consts::TAU).sin() * 12_000.0;
        writer.write_sample(s as i16).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn runs_historical_job_without_arguments() {
    let dir = tempdir().unwrap();
    write_wave(&dir.path().join("buchla_triangle_1cyc.wav"));

    Command::cargo_bin("wavetable-header")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success! Created BuchlaTriangle.h with array 'buchlaTriangle_512'",
        ));

    let text = fs::read_to_string(dir.path().join("BuchlaTriangle.h")).unwrap();
    assert!(text.contains("const float buchlaTriangle_512[512] = {"));
}

#[test]
fn flags_override_settings_file() {
    let dir = tempdir().unwrap();
    write_wave(&dir.path().join("sine.wav"));
    fs::write(
        dir.path().join("job.json"),
        r#"{"wav": "sine.wav", "out": "Sine.h", "name": "from_file"}"#,
    )
    .unwrap();

    Command::cargo_bin("wavetable-header")
        .unwrap()
        .current_dir(dir.path())
        .args(["--config", "job.json", "--name", "sine_512", "--interp", "spline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Sine.h with array 'sine_512'"));

    let text = fs::read_to_string(dir.path().join("Sine.h")).unwrap();
    assert!(text.starts_with("// Generated from sine.wav\n#ifndef SINE_512_H"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("wavetable-header")
        .unwrap()
        .current_dir(dir.path())
        .args(["--wav", "absent.wav"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.wav"));
    assert!(!dir.path().join("BuchlaTriangle.h").exists());
}

#[test]
fn unknown_flag_fails() {
    Command::cargo_bin("wavetable-header")
        .unwrap()
        .arg("--batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown arg: --batch"));
}

#[test]
fn bad_array_name_fails() {
    let dir = tempdir().unwrap();
    write_wave(&dir.path().join("buchla_triangle_1cyc.wav"));
    Command::cargo_bin("wavetable-header")
        .unwrap()
        .current_dir(dir.path())
        .args(["--name", "2fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid C identifier"));
}

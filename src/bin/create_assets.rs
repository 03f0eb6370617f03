//! Generates the placeholder asset tree the game loads from: solid-color
//! PNGs, silent PCM WAVs and a copy of a system TTF font.  Everything lands
//! under `assets/` in the working directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

const SAMPLE_RATE: u32 = 44100;

/// Well-known system font locations tried for `freesansbold.ttf`.  A miss is
/// a warning, not an error: the game falls back to its built-in font.
const FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

fn write_solid_png(path: &str, width: u32, height: u32, rgb: [u8; 3]) -> Result<()> {
    let [r, g, b] = rgb;
    let img = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    img.save(path).with_context(|| format!("writing {path}"))?;
    Ok(())
}

/// PCM mono 16-bit 44.1 kHz, all-zero samples.
fn write_silent_wav(path: &str, seconds: f32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer =
        hound::WavWriter::create(path, spec).with_context(|| format!("creating {path}"))?;
    for _ in 0..(seconds * SAMPLE_RATE as f32) as usize {
        writer.write_sample(0i16)?;
    }
    writer.finalize().with_context(|| format!("finishing {path}"))?;
    Ok(())
}

fn copy_system_font(dest: &str) -> Result<()> {
    for candidate in FONT_CANDIDATES {
        if Path::new(candidate).exists() {
            fs::copy(candidate, dest).with_context(|| format!("copying {candidate} to {dest}"))?;
            return Ok(());
        }
    }
    println!("Warning: no system font found, skipping {dest}");
    Ok(())
}

fn main() -> Result<()> {
    for dir in ["assets/images", "assets/sounds", "assets/fonts"] {
        fs::create_dir_all(dir).with_context(|| format!("creating {dir}"))?;
    }

    write_solid_png("assets/images/background.png", 800, 600, [0, 0, 0])?;
    write_solid_png("assets/images/player.png", 64, 64, [0, 255, 0])?;
    write_solid_png("assets/images/enemy.png", 64, 64, [255, 0, 0])?;
    write_solid_png("assets/images/bullet.png", 32, 32, [255, 255, 0])?;
    write_solid_png("assets/images/ufo.png", 64, 64, [0, 0, 255])?;

    write_silent_wav("assets/sounds/background.wav", 1.0)?;
    write_silent_wav("assets/sounds/laser.wav", 0.5)?;
    write_silent_wav("assets/sounds/explosion.wav", 0.5)?;

    copy_system_font("assets/fonts/freesansbold.ttf")?;

    println!("Placeholder assets created successfully!");
    Ok(())
}

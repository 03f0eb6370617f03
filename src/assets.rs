//! Asset provider: existence report, texture/sound/font loading, window icon.
//!
//! Nothing here ever returns an error to the game loop.  A missing file is
//! absorbed into a fallback value — a [`placeholder`](crate::placeholder)
//! rasterization, a silent `None` sound, or the built-in font — with a
//! one-line warning on stdout.

use std::path::Path;

use macroquad::audio::{self, Sound};
use macroquad::miniquad::conf::Icon;
use macroquad::prelude::{load_texture, load_ttf_font, Color, FilterMode, Font, Image, Texture2D};
use rand::Rng;

use crate::entities::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::placeholder;

pub const IMAGE_FILES: [&str; 5] = [
    "background.png",
    "player.png",
    "enemy.png",
    "bullet.png",
    "ufo.png",
];
pub const SOUND_FILES: [&str; 3] = ["background.wav", "laser.wav", "explosion.wav"];
pub const FONT_FILES: [&str; 1] = ["freesansbold.ttf"];

// ── Existence report ─────────────────────────────────────────────────────────

/// Which asset files are present on disk, grouped by category.  Computed
/// before any loading so the pre-game notice can list what is missing.
pub struct AssetStatus {
    pub images: Vec<(&'static str, bool)>,
    pub sounds: Vec<(&'static str, bool)>,
    pub fonts: Vec<(&'static str, bool)>,
}

impl AssetStatus {
    pub fn check() -> Self {
        Self::check_in(Path::new("assets"))
    }

    /// Probe under an explicit base directory (tests point this at a
    /// temporary tree).
    pub fn check_in(base: &Path) -> Self {
        let probe = |dir: &str, names: &[&'static str]| {
            names
                .iter()
                .map(|&name| (name, base.join(dir).join(name).exists()))
                .collect()
        };
        AssetStatus {
            images: probe("images", &IMAGE_FILES),
            sounds: probe("sounds", &SOUND_FILES),
            fonts: probe("fonts", &FONT_FILES),
        }
    }

    pub fn all_present(&self) -> bool {
        self.images
            .iter()
            .chain(&self.sounds)
            .chain(&self.fonts)
            .all(|&(_, present)| present)
    }
}

// ── Loading with fallback ────────────────────────────────────────────────────

/// Everything the renderer needs for a session.  Textures and the font load
/// once at startup; laser/explosion sounds are loaded per play by the driver
/// so a file dropped into place mid-session starts working.
pub struct AssetSet {
    pub background: Texture2D,
    pub player: Texture2D,
    pub enemy: Texture2D,
    pub bullet: Texture2D,
    pub font: Option<Font>,
    pub music: Option<Sound>,
}

pub async fn load(rng: &mut impl Rng) -> AssetSet {
    AssetSet {
        background: load_texture_or("background.png", rng).await,
        player: load_texture_or("player.png", rng).await,
        enemy: load_texture_or("enemy.png", rng).await,
        bullet: load_texture_or("bullet.png", rng).await,
        font: load_font_opt().await,
        music: load_sound_opt("background.wav").await,
    }
}

/// Load a texture from `assets/images/`, or rasterize the per-name
/// placeholder recipe when the file cannot be read.
pub async fn load_texture_or(name: &str, rng: &mut impl Rng) -> Texture2D {
    let path = format!("assets/images/{name}");
    match load_texture(&path).await {
        Ok(texture) => texture,
        Err(err) => {
            println!("Warning: failed to load {path} ({err}), using placeholder");
            let texture = Texture2D::from_image(&fallback_image(name, rng));
            texture.set_filter(FilterMode::Nearest);
            texture
        }
    }
}

fn fallback_image(name: &str, rng: &mut impl Rng) -> Image {
    match name {
        "background.png" => placeholder::starfield(
            SCREEN_WIDTH as u16,
            SCREEN_HEIGHT as u16,
            Color::from_rgba(0, 0, 0, 255),
            rng,
        ),
        "player.png" => placeholder::ship(64, 64, Color::from_rgba(0, 255, 0, 255)),
        "enemy.png" => placeholder::invader(64, 64, Color::from_rgba(255, 0, 0, 255)),
        "bullet.png" => placeholder::beam(32, 32, Color::from_rgba(255, 255, 0, 255)),
        "ufo.png" => placeholder::invader(64, 64, Color::from_rgba(0, 0, 255, 255)),
        _ => Image::gen_image_color(64, 64, Color::from_rgba(255, 255, 255, 255)),
    }
}

/// Load a sound from `assets/sounds/`; `None` (with a warning) when missing.
/// Callers must check before playing.
pub async fn load_sound_opt(name: &str) -> Option<Sound> {
    let path = format!("assets/sounds/{name}");
    match audio::load_sound(&path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            println!("Warning: Sound file {name} not found ({err})");
            None
        }
    }
}

/// Load the game font; `None` falls back to macroquad's built-in font
/// (`font: None` in `TextParams`).
pub async fn load_font_opt() -> Option<Font> {
    let path = "assets/fonts/freesansbold.ttf";
    match load_ttf_font(path).await {
        Ok(font) => Some(font),
        Err(err) => {
            println!("Warning: Font file freesansbold.ttf not found ({err}), using built-in font");
            None
        }
    }
}

// ── Window icon ──────────────────────────────────────────────────────────────

/// Build the window icon from the ufo asset.  The icon must exist before the
/// window does, so the file is decoded synchronously with the `image` crate;
/// a missing file falls back to the invader recipe.
pub fn window_icon() -> Icon {
    match image::open("assets/images/ufo.png") {
        Ok(ufo) => Icon {
            small: to_icon_bytes(&resized_rgba(&ufo, 16)),
            medium: to_icon_bytes(&resized_rgba(&ufo, 32)),
            big: to_icon_bytes(&resized_rgba(&ufo, 64)),
        },
        Err(err) => {
            println!("Warning: failed to load assets/images/ufo.png for the window icon ({err}), using placeholder");
            let blue = Color::from_rgba(0, 0, 255, 255);
            Icon {
                small: to_icon_bytes(&placeholder::invader(16, 16, blue).bytes),
                medium: to_icon_bytes(&placeholder::invader(32, 32, blue).bytes),
                big: to_icon_bytes(&placeholder::invader(64, 64, blue).bytes),
            }
        }
    }
}

fn resized_rgba(source: &image::DynamicImage, size: u32) -> Vec<u8> {
    source
        .resize_exact(size, size, image::imageops::FilterType::Lanczos3)
        .to_rgba8()
        .into_raw()
}

fn to_icon_bytes<const N: usize>(rgba: &[u8]) -> [u8; N] {
    // Lengths always match: every caller passes a size × size × 4 buffer.
    let mut out = [0u8; N];
    out.copy_from_slice(rgba);
    out
}

//! Procedural fallback graphics.
//!
//! Each recipe rasterizes into a CPU-side [`Image`], decoupled from any
//! file-existence check so both the loader and the recipes stay testable
//! without a filesystem or a GPU.  Pixels are written as raw RGBA bytes to
//! keep the results exact.

use macroquad::color::Color;
use macroquad::texture::Image;
use rand::Rng;

// ── Pixel primitives ─────────────────────────────────────────────────────────

fn to_rgba(color: Color) -> [u8; 4] {
    [
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        (color.a * 255.0).round() as u8,
    ]
}

/// The base color with each channel lifted by 50 (saturating); used for
/// cockpit and beam-core highlights.
fn brighten(rgba: [u8; 4]) -> [u8; 4] {
    [
        rgba[0].saturating_add(50),
        rgba[1].saturating_add(50),
        rgba[2].saturating_add(50),
        rgba[3],
    ]
}

fn transparent_canvas(width: u16, height: u16) -> Image {
    Image::gen_image_color(width, height, Color::new(0.0, 0.0, 0.0, 0.0))
}

fn put_pixel(image: &mut Image, x: i32, y: i32, rgba: [u8; 4]) {
    if x < 0 || y < 0 || x >= image.width as i32 || y >= image.height as i32 {
        return;
    }
    let i = (y as usize * image.width as usize + x as usize) * 4;
    image.bytes[i..i + 4].copy_from_slice(&rgba);
}

fn fill_rect(image: &mut Image, x: i32, y: i32, w: i32, h: i32, rgba: [u8; 4]) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(image, px, py, rgba);
        }
    }
}

fn fill_circle(image: &mut Image, cx: i32, cy: i32, radius: i32, rgba: [u8; 4]) {
    for py in cy - radius..=cy + radius {
        for px in cx - radius..=cx + radius {
            let dx = px as f32 + 0.5 - cx as f32;
            let dy = py as f32 + 0.5 - cy as f32;
            if dx * dx + dy * dy <= (radius * radius) as f32 {
                put_pixel(image, px, py, rgba);
            }
        }
    }
}

/// Fill a convex polygon given its vertices in order.  A pixel is inside
/// when its center is on one side of every edge.
fn fill_convex(image: &mut Image, points: &[(f32, f32)], rgba: [u8; 4]) {
    for py in 0..image.height as i32 {
        for px in 0..image.width as i32 {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            let mut positive = false;
            let mut negative = false;
            for (i, &(x1, y1)) in points.iter().enumerate() {
                let (x2, y2) = points[(i + 1) % points.len()];
                let cross = (x2 - x1) * (cy - y1) - (y2 - y1) * (cx - x1);
                if cross > 0.0 {
                    positive = true;
                } else if cross < 0.0 {
                    negative = true;
                }
            }
            if !(positive && negative) {
                put_pixel(image, px, py, rgba);
            }
        }
    }
}

// ── Shape recipes ────────────────────────────────────────────────────────────

/// Player ship: a filled triangle (apex top-center, base corners) with a
/// lighter cockpit rectangle across the middle third.
pub fn ship(width: u16, height: u16, color: Color) -> Image {
    let mut image = transparent_canvas(width, height);
    let (w, h) = (width as i32, height as i32);
    let body = to_rgba(color);

    let apex = (w as f32 / 2.0, 0.0);
    let bottom_left = (0.0, h as f32);
    let bottom_right = (w as f32, h as f32);
    fill_convex(&mut image, &[apex, bottom_left, bottom_right], body);

    fill_rect(&mut image, w / 4, h / 3, w / 2, h / 3, brighten(body));
    image
}

/// Enemy/ufo invader: a filled hexagon with two white eyes.
pub fn invader(width: u16, height: u16, color: Color) -> Image {
    let mut image = transparent_canvas(width, height);
    let (w, h) = (width as i32, height as i32);
    let body = to_rgba(color);

    let (cx, cy) = (w / 2, h / 2);
    let radius = w.min(h) / 2;
    let hexagon: Vec<(f32, f32)> = (0..6)
        .map(|i| {
            let angle = std::f32::consts::PI / 3.0 * i as f32;
            (
                cx as f32 + radius as f32 * angle.cos(),
                cy as f32 + radius as f32 * angle.sin(),
            )
        })
        .collect();
    fill_convex(&mut image, &hexagon, body);

    let eye = [255, 255, 255, 255];
    let eye_radius = radius / 4;
    fill_circle(&mut image, cx - radius / 3, cy - radius / 3, eye_radius, eye);
    fill_circle(&mut image, cx + radius / 3, cy - radius / 3, eye_radius, eye);
    image
}

/// Bullet: a full-height laser bar with a brighter core.
pub fn beam(width: u16, height: u16, color: Color) -> Image {
    let mut image = transparent_canvas(width, height);
    let (w, h) = (width as i32, height as i32);
    let bar = to_rgba(color);

    fill_rect(&mut image, w / 4, 0, w / 2, h, bar);
    fill_rect(&mut image, w / 3, 0, w / 3, h, brighten(bar));
    image
}

/// Background: a solid fill scattered with 100 single-pixel stars of random
/// gray brightness in [100, 255].
pub fn starfield(width: u16, height: u16, color: Color, rng: &mut impl Rng) -> Image {
    let mut image = Image::gen_image_color(width, height, color);
    for _ in 0..100 {
        let x = rng.gen_range(0..width as i32);
        let y = rng.gen_range(0..height as i32);
        let brightness = rng.gen_range(100..=255u8);
        put_pixel(&mut image, x, y, [brightness, brightness, brightness, 255]);
    }
    image
}

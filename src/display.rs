//! Rendering layer — all drawing lives here.
//!
//! Each function receives an immutable view of the game state (plus the
//! loaded assets).  No game logic is performed; this module only translates
//! state into macroquad draw calls.

use macroquad::prelude::*;

use space_invader::assets::{AssetSet, AssetStatus};
use space_invader::entities::{BulletState, GameState, SessionState, SCREEN_WIDTH};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEXT: Color = WHITE;
const C_HEADER: Color = Color::new(0.78, 0.78, 0.78, 1.0); // gray 200
const C_PRESENT: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const C_MISSING: Color = Color::new(1.0, 0.0, 0.0, 1.0);

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(state: &GameState, assets: &AssetSet) {
    clear_background(BLACK);
    draw_texture(&assets.background, 0.0, 0.0, WHITE);

    for enemy in &state.enemies {
        draw_texture(&assets.enemy, enemy.x, enemy.y, WHITE);
    }

    if state.bullet.state == BulletState::Firing {
        draw_texture(&assets.bullet, state.bullet.x + 16.0, state.bullet.y + 10.0, WHITE);
    }

    draw_texture(&assets.player, state.player.x, state.player.y, WHITE);
    draw_score(state, assets);

    if matches!(state.session, SessionState::GameOver | SessionState::Retrying) {
        draw_game_over(state, assets);
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

/// Draw with the top of the text at `y` (macroquad anchors at the baseline).
fn draw_label(text: &str, x: f32, y: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_text_ex(
        text,
        x,
        y + dims.offset_y,
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

fn draw_centered(text: &str, y: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_label(text, SCREEN_WIDTH / 2.0 - dims.width / 2.0, y, size, color, font);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score(state: &GameState, assets: &AssetSet) {
    let font = assets.font.as_ref();
    draw_label(&format!("Score : {}", state.score), 10.0, 10.0, 32, C_TEXT, font);
    draw_label(
        &format!("High Score : {}", state.high_score),
        10.0,
        50.0,
        32,
        C_TEXT,
        font,
    );
}

// ── Game-over prompt ──────────────────────────────────────────────────────────

fn draw_game_over(state: &GameState, assets: &AssetSet) {
    let font = assets.font.as_ref();
    draw_centered("GAME OVER", 150.0, 64, C_TEXT, font);
    draw_centered(&format!("Final Score: {}", state.score), 250.0, 32, C_TEXT, font);
    draw_centered(&format!("High Score: {}", state.high_score), 300.0, 32, C_TEXT, font);
    draw_centered("Press R to Retry", 350.0, 32, C_TEXT, font);
    draw_centered("Press Q to Quit", 400.0, 32, C_TEXT, font);
}

// ── Pre-game asset notice ─────────────────────────────────────────────────────

/// List every asset with a ✓/✗ mark.  Drawn with the built-in font since the
/// game font may itself be among the missing files.
pub fn draw_asset_notice(status: &AssetStatus) {
    clear_background(BLACK);
    draw_centered("Space Invaders - Loading Assets", 50.0, 48, C_TEXT, None);

    let mut y = 150.0;
    let categories: [(&str, &[(&str, bool)]); 3] = [
        ("Images", &status.images),
        ("Sounds", &status.sounds),
        ("Fonts", &status.fonts),
    ];
    for (category, files) in categories {
        draw_label(&format!("{category}:"), 100.0, y, 32, C_HEADER, None);
        y += 40.0;
        for &(name, present) in files {
            let (mark, color) = if present { ("✓", C_PRESENT) } else { ("✗", C_MISSING) };
            draw_label(&format!("{mark} {name}"), 150.0, y, 32, color, None);
            y += 30.0;
        }
        y += 20.0;
    }

    draw_centered(
        "Press SPACE to continue with fallback graphics",
        500.0,
        24,
        C_HEADER,
        None,
    );
}

mod display;

use macroquad::audio::{play_sound, play_sound_once, PlaySoundParams};
use macroquad::prelude::*;
use ::rand::thread_rng;

use space_invader::assets::{self, AssetStatus};
use space_invader::compute::{
    fire_bullet, init_state, request_quit, request_retry, reset_game, set_player_velocity, tick,
};
use space_invader::entities::{BulletState, SessionState, PLAYER_SPEED};

fn window_conf() -> Conf {
    Conf {
        window_title: "Space Invader".to_string(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        icon: Some(assets::window_icon()),
        ..Default::default()
    }
}

/// Cooperative wait on the pre-game notice: one `next_frame` per poll until
/// Space continues or Escape quits.  Returns `false` on quit.
async fn asset_notice_gate(status: &AssetStatus) -> bool {
    loop {
        if is_key_pressed(KeyCode::Escape) {
            return false;
        }
        if is_key_pressed(KeyCode::Space) {
            return true;
        }
        display::draw_asset_notice(status);
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Surface missing files once, before anything loads; skipped entirely
    // when the asset tree is complete.
    let status = AssetStatus::check();
    if !status.all_present() && !asset_notice_gate(&status).await {
        return;
    }

    let mut rng = thread_rng();
    let assets = assets::load(&mut rng).await;
    if let Some(music) = &assets.music {
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: 1.0,
            },
        );
    }

    let mut state = init_state(&mut rng);

    loop {
        match state.session {
            SessionState::Playing => {
                // Presses before releases, so a same-frame tap nets out to a
                // zero velocity.
                if is_key_pressed(KeyCode::Left) {
                    state = set_player_velocity(&state, -PLAYER_SPEED);
                }
                if is_key_pressed(KeyCode::Right) {
                    state = set_player_velocity(&state, PLAYER_SPEED);
                }
                if is_key_released(KeyCode::Left) || is_key_released(KeyCode::Right) {
                    state = set_player_velocity(&state, 0.0);
                }
                if is_key_pressed(KeyCode::Space) && state.bullet.state == BulletState::Ready {
                    // Loaded per shot: a laser.wav dropped in mid-session
                    // starts playing without a restart.
                    if let Some(laser) = assets::load_sound_opt("laser.wav").await {
                        play_sound_once(&laser);
                    }
                    state = fire_bullet(&state);
                }

                let score_before = state.score;
                state = tick(&state, &mut rng);
                if state.score > score_before {
                    if let Some(explosion) = assets::load_sound_opt("explosion.wav").await {
                        play_sound_once(&explosion);
                    }
                }
            }
            SessionState::GameOver => {
                if is_key_pressed(KeyCode::R) {
                    state = request_retry(&state);
                } else if is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape) {
                    state = request_quit(&state);
                }
            }
            SessionState::Retrying => {
                state = reset_game(&state, &mut rng);
            }
            SessionState::Quitting => break,
        }

        display::render(&state, &assets);
        next_frame().await;
    }
}

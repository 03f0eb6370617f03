//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Bullet, BulletState, Enemy, GameState, Player, BULLET_REST_Y, BULLET_SPEED, ENEMY_COUNT,
    ENEMY_DROP_Y, ENEMY_FROZEN_Y, ENEMY_GAME_OVER_Y, ENEMY_SPAWN_Y_MAX, ENEMY_SPAWN_Y_MIN,
    ENEMY_STEP_X, HIT_RADIUS, MAX_X, PLAYER_START_X, PLAYER_Y, SessionState,
};

// ── Constructors ─────────────────────────────────────────────────────────────

fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: rng.gen_range(0..=MAX_X as i32) as f32,
        y: rng.gen_range(ENEMY_SPAWN_Y_MIN..=ENEMY_SPAWN_Y_MAX) as f32,
        dx: ENEMY_STEP_X,
        dy: ENEMY_DROP_Y,
    }
}

/// Build the initial game state: player centered on its row, six enemies at
/// random spawn positions, bullet parked and ready.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player {
            x: PLAYER_START_X,
            y: PLAYER_Y,
            dx: 0.0,
        },
        enemies: (0..ENEMY_COUNT).map(|_| spawn_enemy(rng)).collect(),
        bullet: Bullet {
            x: 0.0,
            y: BULLET_REST_Y,
            state: BulletState::Ready,
        },
        score: 0,
        high_score: 0,
        session: SessionState::Playing,
    }
}

/// Full reset after a retry: everything back to its starting configuration
/// except the high score, which survives the session.
pub fn reset_game(state: &GameState, rng: &mut impl Rng) -> GameState {
    GameState {
        high_score: state.high_score,
        ..init_state(rng)
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Set the player's horizontal velocity (−5, 0 or +5 in practice).
pub fn set_player_velocity(state: &GameState, dx: f32) -> GameState {
    GameState {
        player: Player {
            dx,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire the bullet from the player's current x.  A no-op while the bullet
/// is already in flight — there is only one bullet.
pub fn fire_bullet(state: &GameState) -> GameState {
    if state.bullet.state == BulletState::Firing {
        return state.clone();
    }
    GameState {
        bullet: Bullet {
            x: state.player.x,
            state: BulletState::Firing,
            ..state.bullet.clone()
        },
        ..state.clone()
    }
}

/// R at the game-over prompt.  Only meaningful from `GameOver`; the driver
/// turns `Retrying` into a fresh state via [`reset_game`] on its next pass.
pub fn request_retry(state: &GameState) -> GameState {
    if state.session != SessionState::GameOver {
        return state.clone();
    }
    GameState {
        session: SessionState::Retrying,
        ..state.clone()
    }
}

/// Q/Escape at the game-over prompt, or a window-close at any time.
pub fn request_quit(state: &GameState) -> GameState {
    GameState {
        session: SessionState::Quitting,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

fn is_collision(enemy: &Enemy, bullet: &Bullet) -> bool {
    let dx = enemy.x - bullet.x;
    let dy = enemy.y - bullet.y;
    (dx * dx + dy * dy).sqrt() < HIT_RADIUS
}

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Enemies are evaluated in index order, and a hit resets the bullet in
/// place, so enemies later in the same pass see the reset position.  The
/// first matching enemy therefore takes the hit; "check all, pick nearest"
/// would change observable behavior.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();

    // ── 1. Move the player ──────────────────────────────────────────────────
    next.player.x = (next.player.x + next.player.dx).clamp(0.0, MAX_X);

    // ── 2. Enemies: game-over check, movement, collision ────────────────────
    for i in 0..next.enemies.len() {
        // Checked before this enemy moves.
        if next.enemies[i].y > ENEMY_GAME_OVER_Y {
            for enemy in &mut next.enemies {
                enemy.y = ENEMY_FROZEN_Y;
            }
            next.high_score = next.high_score.max(next.score);
            next.session = SessionState::GameOver;
            return next;
        }

        let enemy = &mut next.enemies[i];
        enemy.x += enemy.dx;
        if enemy.x <= 0.0 {
            enemy.x = 0.0;
            enemy.dx = ENEMY_STEP_X;
            enemy.y += enemy.dy;
        } else if enemy.x >= MAX_X {
            enemy.x = MAX_X;
            enemy.dx = -ENEMY_STEP_X;
            enemy.y += enemy.dy;
        }

        // The check runs regardless of bullet state: a parked bullet sits at
        // the rest row, far below any enemy that survived the check above.
        if is_collision(&next.enemies[i], &next.bullet) {
            next.bullet.y = BULLET_REST_Y;
            next.bullet.state = BulletState::Ready;
            next.score += 1;
            next.enemies[i] = spawn_enemy(rng);
        }
    }

    // ── 3. Move the bullet ──────────────────────────────────────────────────
    if next.bullet.y <= 0.0 {
        next.bullet.y = BULLET_REST_Y;
        next.bullet.state = BulletState::Ready;
    }
    if next.bullet.state == BulletState::Firing {
        next.bullet.y -= BULLET_SPEED;
    }

    next
}

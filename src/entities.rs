//! All game entity types and screen constants — pure data, no logic.
//!
//! Positions are `f32` but every delta is a whole pixel, so values stay
//! integer-valued and tests can compare exactly.

// ── Screen geometry ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Right-most x for the 64 px player/enemy sprites (800 − 64).
pub const MAX_X: f32 = 736.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = 370.0;
pub const PLAYER_Y: f32 = 480.0;
pub const PLAYER_SPEED: f32 = 5.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_COUNT: usize = 6;
pub const ENEMY_STEP_X: f32 = 2.0;
pub const ENEMY_DROP_Y: f32 = 20.0;
pub const ENEMY_SPAWN_Y_MIN: i32 = 50;
pub const ENEMY_SPAWN_Y_MAX: i32 = 150;
/// An enemy descending past this row ends the game.
pub const ENEMY_GAME_OVER_Y: f32 = 440.0;
/// Parking row for enemies while the game-over prompt is up (off screen).
pub const ENEMY_FROZEN_Y: f32 = 2000.0;

// ── Bullet ────────────────────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_REST_Y: f32 = 480.0;
/// An enemy closer than this to the bullet (Euclidean) counts as hit.
pub const HIT_RADIUS: f32 = 27.0;

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity, set on key press/release: −5, 0 or +5.
    pub dx: f32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Horizontal step per frame (±2); flips at the screen bounds.
    pub dx: f32,
    /// Vertical drop added on each bounce (20).
    pub dy: f32,
}

/// The bullet's two-state lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum BulletState {
    /// Parked at the rest row, available to fire.
    Ready,
    /// In flight upward.
    Firing,
}

/// The single bullet — there is no pool; firing while `Firing` is a no-op.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub state: BulletState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Playing,
    /// Modal game-over prompt; enemies are parked off screen.
    GameOver,
    /// R was pressed at the prompt; the driver rebuilds the state next frame.
    Retrying,
    Quitting,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullet: Bullet,
    pub score: u32,
    /// Best score this process has seen; updated at each game over.
    pub high_score: u32,
    pub session: SessionState,
}

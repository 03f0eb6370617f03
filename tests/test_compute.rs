use space_invader::compute::*;
use space_invader::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A deterministic state: enemies parked mid-screen moving right, bullet
/// parked and ready at its rest row.
fn make_state() -> GameState {
    GameState {
        player: Player { x: 370.0, y: 480.0, dx: 0.0 },
        enemies: (0..ENEMY_COUNT)
            .map(|i| Enemy { x: 100.0 + 100.0 * i as f32, y: 100.0, dx: 2.0, dy: 20.0 })
            .collect(),
        bullet: Bullet { x: 0.0, y: 480.0, state: BulletState::Ready },
        score: 0,
        high_score: 0,
        session: SessionState::Playing,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn assert_spawn_ranges(enemy: &Enemy) {
    assert!((0.0..=736.0).contains(&enemy.x), "x out of range: {}", enemy.x);
    assert!((50.0..=150.0).contains(&enemy.y), "y out of range: {}", enemy.y);
    assert_eq!(enemy.dx, 2.0);
    assert_eq!(enemy.dy, 20.0);
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.player.x, 370.0);
    assert_eq!(s.player.y, 480.0);
    assert_eq!(s.player.dx, 0.0);
}

#[test]
fn init_state_enemies_within_spawn_ranges() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.enemies.len(), 6);
    for enemy in &s.enemies {
        assert_spawn_ranges(enemy);
    }
}

#[test]
fn init_state_bullet_parked_and_ready() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.bullet.x, 0.0);
    assert_eq!(s.bullet.y, 480.0);
    assert_eq!(s.bullet.state, BulletState::Ready);
    assert_eq!(s.score, 0);
    assert_eq!(s.high_score, 0);
    assert_eq!(s.session, SessionState::Playing);
}

// ── set_player_velocity ───────────────────────────────────────────────────────

#[test]
fn velocity_is_applied_on_tick() {
    let s = set_player_velocity(&make_state(), 5.0);
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.x, 375.0);
}

#[test]
fn velocity_does_not_mutate_original() {
    let s = make_state();
    let _ = set_player_velocity(&s, -5.0);
    assert_eq!(s.player.dx, 0.0);
}

// ── player clamping ───────────────────────────────────────────────────────────

#[test]
fn player_clamped_at_left_edge() {
    let mut s = make_state();
    s.player.x = 0.0;
    s.player.dx = -5.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.x, 0.0);
}

#[test]
fn player_clamped_at_right_edge() {
    let mut s = make_state();
    s.player.x = 736.0;
    s.player.dx = 5.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.x, 736.0);
}

#[test]
fn player_stays_in_bounds_over_many_frames() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.player.dx = -5.0;
    for _ in 0..100 {
        s = tick(&s, &mut rng);
        assert!((0.0..=736.0).contains(&s.player.x));
    }
    s.player.dx = 5.0;
    for _ in 0..300 {
        s = tick(&s, &mut rng);
        assert!((0.0..=736.0).contains(&s.player.x));
    }
}

// ── fire_bullet ───────────────────────────────────────────────────────────────

#[test]
fn fire_takes_player_x_and_transitions_to_firing() {
    let mut s = make_state();
    s.player.x = 200.0;
    let s2 = fire_bullet(&s);
    assert_eq!(s2.bullet.state, BulletState::Firing);
    assert_eq!(s2.bullet.x, 200.0);
    assert_eq!(s2.bullet.y, 480.0);
}

#[test]
fn fire_while_firing_is_a_noop() {
    let mut s = make_state();
    s.player.x = 200.0;
    let mut s = fire_bullet(&s);

    // Player moves on; a second fire must not re-anchor the bullet.
    s.player.x = 600.0;
    s.bullet.y = 250.0;
    let s2 = fire_bullet(&s);
    assert_eq!(s2.bullet.x, 200.0);
    assert_eq!(s2.bullet.y, 250.0);
    assert_eq!(s2.bullet.state, BulletState::Firing);
}

// ── bullet flight ─────────────────────────────────────────────────────────────

#[test]
fn firing_bullet_ascends_ten_per_frame() {
    let mut s = make_state();
    s.bullet = Bullet { x: 400.0, y: 300.0, state: BulletState::Firing };
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bullet.y, 290.0);
    assert_eq!(s2.bullet.state, BulletState::Firing);
}

#[test]
fn ready_bullet_does_not_move() {
    let s = make_state();
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bullet.y, 480.0);
    assert_eq!(s2.bullet.state, BulletState::Ready);
}

#[test]
fn bullet_resets_after_exiting_the_top() {
    let mut s = make_state();
    // Far from every enemy so no hit interferes.
    s.bullet = Bullet { x: 700.0, y: 5.0, state: BulletState::Firing };
    s.enemies.clear();

    // First tick: 5 is not ≤ 0 yet, the bullet moves to −5.
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bullet.y, -5.0);
    assert_eq!(s2.bullet.state, BulletState::Firing);

    // Next tick: reset to the rest row, ready again.
    let s3 = tick(&s2, &mut seeded_rng());
    assert_eq!(s3.bullet.y, 480.0);
    assert_eq!(s3.bullet.state, BulletState::Ready);
}

// ── enemy movement ────────────────────────────────────────────────────────────

#[test]
fn enemy_bounces_at_right_edge() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 735.0, y: 100.0, dx: 2.0, dy: 20.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies[0].x, 736.0); // clamped to the bound
    assert_eq!(s2.enemies[0].dx, -2.0); // flipped
    assert_eq!(s2.enemies[0].y, 120.0); // dropped by exactly 20
}

#[test]
fn enemy_bounces_at_left_edge() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 1.0, y: 100.0, dx: -2.0, dy: 20.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies[0].x, 0.0);
    assert_eq!(s2.enemies[0].dx, 2.0);
    assert_eq!(s2.enemies[0].y, 120.0);
}

#[test]
fn enemy_advances_without_dropping_mid_screen() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 300.0, y: 100.0, dx: 2.0, dy: 20.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies[0].x, 302.0);
    assert_eq!(s2.enemies[0].y, 100.0);
}

#[test]
fn enemies_stay_in_bounds_over_many_frames() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..200 {
        s = tick(&s, &mut rng);
        if s.session != SessionState::Playing {
            break;
        }
        for enemy in &s.enemies {
            assert!((0.0..=736.0).contains(&enemy.x), "x out of range: {}", enemy.x);
        }
    }
}

// ── collisions ────────────────────────────────────────────────────────────────

#[test]
fn direct_hit_scores_and_resets_bullet() {
    let mut s = make_state();
    // Enemy steps to 402 before the check; distance 2 < 27.
    s.enemies = vec![Enemy { x: 400.0, y: 100.0, dx: 2.0, dy: 20.0 }];
    s.bullet = Bullet { x: 400.0, y: 100.0, state: BulletState::Firing };
    let s2 = tick(&s, &mut seeded_rng());

    assert_eq!(s2.score, 1);
    assert_eq!(s2.bullet.state, BulletState::Ready);
    assert_eq!(s2.bullet.y, 480.0);
    assert_spawn_ranges(&s2.enemies[0]);
}

#[test]
fn near_miss_outside_radius_does_not_score() {
    let mut s = make_state();
    // After the step the enemy sits at (402, 100); distance to the bullet
    // is exactly 28, outside the 27 px radius.
    s.enemies = vec![Enemy { x: 400.0, y: 100.0, dx: 2.0, dy: 20.0 }];
    s.bullet = Bullet { x: 402.0, y: 128.0, state: BulletState::Firing };
    let s2 = tick(&s, &mut seeded_rng());

    assert_eq!(s2.score, 0);
    assert_eq!(s2.bullet.state, BulletState::Firing);
    assert_eq!(s2.enemies[0].y, 100.0);
}

#[test]
fn only_first_enemy_in_index_order_takes_the_hit() {
    let mut s = make_state();
    // Both enemies end up within the hit radius of the bullet, but the
    // first hit resets the bullet to the rest row, so the second enemy is
    // checked against the reset position and survives.
    s.enemies = vec![
        Enemy { x: 400.0, y: 100.0, dx: 2.0, dy: 20.0 },
        Enemy { x: 404.0, y: 100.0, dx: 2.0, dy: 20.0 },
    ];
    s.bullet = Bullet { x: 403.0, y: 100.0, state: BulletState::Firing };
    let s2 = tick(&s, &mut seeded_rng());

    assert_eq!(s2.score, 1);
    assert_spawn_ranges(&s2.enemies[0]);
    assert_eq!(s2.enemies[1].x, 406.0); // untouched apart from its own step
    assert_eq!(s2.enemies[1].y, 100.0);
}

#[test]
fn parked_bullet_does_not_hit_enemies() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 0.0, y: 100.0, dx: 2.0, dy: 20.0 }];
    s.bullet = Bullet { x: 0.0, y: 480.0, state: BulletState::Ready };
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 0);
}

// ── game over ─────────────────────────────────────────────────────────────────

#[test]
fn enemy_past_line_triggers_game_over_before_moving() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 0.0, y: 450.0, dx: -2.0, dy: 20.0 }];
    s.score = 3;
    let s2 = tick(&s, &mut seeded_rng());

    assert_eq!(s2.session, SessionState::GameOver);
    // Frozen off screen without taking its step first.
    assert_eq!(s2.enemies[0].x, 0.0);
    assert_eq!(s2.enemies[0].y, 2000.0);
    assert_eq!(s2.high_score, 3);
}

#[test]
fn enemy_exactly_on_the_line_does_not_end_the_game() {
    let mut s = make_state();
    s.enemies = vec![Enemy { x: 300.0, y: 440.0, dx: 2.0, dy: 20.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.session, SessionState::Playing);
}

#[test]
fn game_over_freezes_every_enemy() {
    let mut s = make_state();
    s.enemies[3].y = 460.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.session, SessionState::GameOver);
    for enemy in &s2.enemies {
        assert_eq!(enemy.y, 2000.0);
    }
}

#[test]
fn game_over_skips_bullet_movement_that_frame() {
    let mut s = make_state();
    s.enemies[0].y = 450.0;
    s.bullet = Bullet { x: 700.0, y: 100.0, state: BulletState::Firing };
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.session, SessionState::GameOver);
    assert_eq!(s2.bullet.y, 100.0);
}

#[test]
fn high_score_keeps_previous_best() {
    let mut s = make_state();
    s.enemies[0].y = 450.0;
    s.score = 5;
    s.high_score = 10;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 10);
}

#[test]
fn high_score_takes_new_best() {
    let mut s = make_state();
    s.enemies[0].y = 450.0;
    s.score = 7;
    s.high_score = 3;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 7);
}

// ── session transitions ───────────────────────────────────────────────────────

#[test]
fn retry_only_allowed_from_game_over() {
    let s = make_state();
    assert_eq!(request_retry(&s).session, SessionState::Playing);

    let mut over = make_state();
    over.session = SessionState::GameOver;
    assert_eq!(request_retry(&over).session, SessionState::Retrying);
}

#[test]
fn quit_request_from_any_session() {
    let s = make_state();
    assert_eq!(request_quit(&s).session, SessionState::Quitting);

    let mut over = make_state();
    over.session = SessionState::GameOver;
    assert_eq!(request_quit(&over).session, SessionState::Quitting);
}

// ── reset_game ────────────────────────────────────────────────────────────────

#[test]
fn reset_restores_starting_configuration() {
    let mut s = make_state();
    s.player = Player { x: 12.0, y: 480.0, dx: 5.0 };
    s.bullet = Bullet { x: 12.0, y: 77.0, state: BulletState::Firing };
    s.score = 9;
    s.session = SessionState::Retrying;
    let s2 = reset_game(&s, &mut seeded_rng());

    assert_eq!(s2.player.x, 370.0);
    assert_eq!(s2.player.y, 480.0);
    assert_eq!(s2.player.dx, 0.0);
    assert_eq!(s2.bullet.x, 0.0);
    assert_eq!(s2.bullet.y, 480.0);
    assert_eq!(s2.bullet.state, BulletState::Ready);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.session, SessionState::Playing);
    assert_eq!(s2.enemies.len(), 6);
    for enemy in &s2.enemies {
        assert_spawn_ranges(enemy);
    }
}

#[test]
fn reset_preserves_high_score() {
    let mut s = make_state();
    s.high_score = 42;
    let s2 = reset_game(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 42);
}

// ── purity ────────────────────────────────────────────────────────────────────

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _ = tick(&s, &mut seeded_rng());
    assert_eq!(s.player.x, 370.0);
    assert_eq!(s.enemies[0].x, 100.0);
    assert_eq!(s.score, 0);
}

//! Интеграция полного input-пайплайна: кадры эстиматора → жест →
//! сглаживание прицела → recoil → разрешение выстрела.
//!
//! Кадры с timestamp_ms = 0 держат SimClock на нуле, поэтому
//! randomized-спавнер молчит и мишени на поле только наши.

use bevy::prelude::*;
use deadeye_simulation::input::{INDEX_DIP, INDEX_TIP, LANDMARK_COUNT, PINKY_MCP, PINKY_TIP};
use deadeye_simulation::*;

const SURFACE: Vec2 = Vec2::new(1280.0, 720.0);

fn create_game_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    app.world_mut().send_event(ConfirmPlayerCount { count: 1 });
    app.update();
    app.world_mut().send_event(ConfirmName { name: None });
    app.update();
    assert_eq!(app.world().resource::<MatchState>().phase, Phase::Playing);

    app
}

/// Рука-"пистолет", целящаяся в точку экрана (x зеркалится заранее).
fn gun_hand(aim: Vec2) -> [Vec2; LANDMARK_COUNT] {
    let norm = Vec2::new(1.0 - aim.x / SURFACE.x, aim.y / SURFACE.y);

    let mut landmarks = [Vec2::ZERO; LANDMARK_COUNT];
    landmarks[INDEX_TIP] = norm;
    landmarks[INDEX_DIP] = Vec2::new(norm.x, norm.y + 0.05);
    landmarks[PINKY_MCP] = Vec2::new(norm.x + 0.05, norm.y + 0.10);
    landmarks[PINKY_TIP] = Vec2::new(norm.x + 0.05, norm.y + 0.15);
    landmarks
}

/// Та же рука с разогнутым мизинцем — жест не считается оружием.
fn open_hand(aim: Vec2) -> [Vec2; LANDMARK_COUNT] {
    let mut landmarks = gun_hand(aim);
    let mcp = landmarks[PINKY_MCP];
    landmarks[PINKY_TIP] = Vec2::new(mcp.x, mcp.y - 0.1);
    landmarks
}

fn send_frame(app: &mut App, landmarks: [Vec2; LANDMARK_COUNT]) {
    app.world_mut()
        .send_event(HandFrameInput::with_hand(0.0, landmarks));
    app.update();
}

fn spawn_static_target(app: &mut App, x: f32, y: f32, category: TargetCategory, seq: u64) {
    app.world_mut().spawn((
        Transform::from_translation(Vec3::new(x, y, 0.0)),
        Target {
            velocity_x: 0.0,
            category,
            seq,
        },
    ));
}

fn target_count(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query::<&Target>();
    query.iter(world).count()
}

#[test]
fn test_aim_converges_then_recoil_hits() {
    let mut app = create_game_app(11);
    spawn_static_target(&mut app, 400.0, 300.0, TargetCategory::Medium, 0);

    // Держим прицел на мишени: lerp сходится с (0,0) под радиус
    for _ in 0..20 {
        send_frame(&mut app, gun_hand(Vec2::new(400.0, 300.0)));
    }
    {
        let crosshair = app.world().resource::<Crosshair>();
        assert!(crosshair.active);
        assert!(crosshair.position.distance(Vec2::new(400.0, 300.0)) < 5.0);
    }

    // Рывок вверх на 100 px — сильно больше порога 40
    send_frame(&mut app, gun_hand(Vec2::new(400.0, 200.0)));

    assert_eq!(target_count(&mut app), 0, "мишень сбита");
    let session = app.world().resource::<RoundSession>();
    assert_eq!(session.score, 20);
    assert_eq!(session.hits.medium, 1);

    let cues = drain_cues(app.world_mut());
    assert_eq!(cues, vec![AudioCue::Shoot, AudioCue::Hit]);

    // Burst частиц из центра мишени
    let world = app.world_mut();
    let mut particles = world.query::<&Particle>();
    assert_eq!(particles.iter(world).count(), 10);
}

#[test]
fn test_overlap_resolves_to_newest_spawn() {
    let mut app = create_game_app(13);
    // Две перекрывающиеся мишени под одной точкой
    spawn_static_target(&mut app, 500.0, 400.0, TargetCategory::LargeSlow, 0);
    spawn_static_target(&mut app, 510.0, 400.0, TargetCategory::Medium, 1);

    for _ in 0..20 {
        send_frame(&mut app, gun_hand(Vec2::new(505.0, 400.0)));
    }
    send_frame(&mut app, gun_hand(Vec2::new(505.0, 300.0)));

    // Ровно одна снята — более свежая (seq=1)
    assert_eq!(target_count(&mut app), 1);
    let session = app.world().resource::<RoundSession>();
    assert_eq!(session.score, 20);
    assert_eq!(session.hits.medium, 1);
    assert_eq!(session.hits.large, 0);
}

#[test]
fn test_miss_still_flashes_and_sounds() {
    let mut app = create_game_app(17);

    for _ in 0..10 {
        send_frame(&mut app, gun_hand(Vec2::new(100.0, 500.0)));
    }
    drain_cues(app.world_mut());

    // Выстрел в пустоту
    send_frame(&mut app, gun_hand(Vec2::new(100.0, 400.0)));

    assert_eq!(app.world().resource::<RoundSession>().score, 0);
    let cues = drain_cues(app.world_mut());
    assert_eq!(cues, vec![AudioCue::Shoot]);

    // Вспышка безусловна и идёт поверх остального draw-листа
    let draws = collect_draw_commands(app.world_mut());
    assert_eq!(draws.last(), Some(&DrawCommand::Flash));
    assert!(draws
        .iter()
        .any(|command| matches!(command, DrawCommand::CrosshairMark { .. })));
}

#[test]
fn test_open_hand_never_fires() {
    let mut app = create_game_app(19);

    send_frame(&mut app, open_hand(Vec2::new(600.0, 600.0)));
    // Резкие рывки вверх без жеста — не выстрелы
    send_frame(&mut app, open_hand(Vec2::new(600.0, 400.0)));
    send_frame(&mut app, open_hand(Vec2::new(600.0, 200.0)));

    assert!(!app.world().resource::<Crosshair>().active);
    assert!(drain_cues(app.world_mut()).is_empty());
}

#[test]
fn test_gesture_drop_freezes_crosshair() {
    let mut app = create_game_app(23);

    for _ in 0..20 {
        send_frame(&mut app, gun_hand(Vec2::new(800.0, 360.0)));
    }
    let before = app.world().resource::<Crosshair>().position;

    // Рука пропала из кадра
    app.world_mut().send_event(HandFrameInput::empty(0.0));
    app.update();

    let crosshair = app.world().resource::<Crosshair>();
    assert!(!crosshair.active);
    assert_eq!(crosshair.position, before, "позиция заморожена, не сброшена");
}

#[test]
fn test_simulation_suspended_outside_playing() {
    let mut app = create_headless_app(29);
    app.add_plugins(SimulationPlugin);

    // SETUP: кадры с большими timestamp'ами не двигают ни прицел, ни спавнер
    for i in 0..50 {
        app.world_mut().send_event(HandFrameInput::with_hand(
            10_000.0 + i as f64 * 40.0,
            gun_hand(Vec2::new(640.0, 360.0)),
        ));
        app.update();
    }

    assert_eq!(app.world().resource::<MatchState>().phase, Phase::Setup);
    assert!(!app.world().resource::<Crosshair>().active);
    assert_eq!(target_count(&mut app), 0);
}

//! Headless демо DEADEYE
//!
//! Скриптованный прогон без камеры: синтетический "бот" водит рукой по
//! экрану и дёргает пальцем вверх раз в секунду. Два игрока, полный
//! матч, в конце — leaderboard.

use bevy::prelude::*;
use deadeye_simulation::input::{INDEX_DIP, INDEX_TIP, LANDMARK_COUNT, PINKY_MCP, PINKY_TIP};
use deadeye_simulation::{
    create_headless_app, hud_snapshot, AdvanceTurn, ConfirmName, ConfirmPlayerCount,
    CountdownTick, HandFrameInput, SimulationPlugin,
};

const SURFACE: Vec2 = Vec2::new(1280.0, 720.0);

/// Рука в форме "пистолета", целящаяся в заданную точку экрана.
///
/// classify зеркалирует x, поэтому здесь зеркалим заранее.
fn gun_hand(aim: Vec2) -> [Vec2; LANDMARK_COUNT] {
    let norm = Vec2::new(1.0 - aim.x / SURFACE.x, aim.y / SURFACE.y);

    let mut landmarks = [Vec2::ZERO; LANDMARK_COUNT];
    landmarks[INDEX_TIP] = norm;
    landmarks[INDEX_DIP] = Vec2::new(norm.x, norm.y + 0.05);
    landmarks[PINKY_MCP] = Vec2::new(norm.x + 0.05, norm.y + 0.10);
    landmarks[PINKY_TIP] = Vec2::new(norm.x + 0.05, norm.y + 0.15);
    landmarks
}

fn main() {
    let seed = 42;
    println!("Starting DEADEYE headless demo (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    app.world_mut().send_event(ConfirmPlayerCount { count: 2 });
    app.update();

    let mut now_ms: f64 = 0.0;
    for player in 0..2 {
        app.world_mut().send_event(ConfirmName {
            name: Some(format!("Bot {}", player + 1)),
        });
        app.update();

        for second in 0..30 {
            // 25 кадров эстиматора в секунду
            for frame in 0..25 {
                now_ms += 40.0;

                let phase = ((now_ms / 3000.0) % 1.0) as f32;
                let sweep_x = 100.0 + 1080.0 * phase;
                // Раз в секунду — рывок вверх на 60 px (выстрел)
                let aim_y = if frame == 12 { 340.0 } else { 400.0 };

                app.world_mut().send_event(HandFrameInput::with_hand(
                    now_ms,
                    gun_hand(Vec2::new(sweep_x, aim_y)),
                ));
                app.update();
            }

            app.world_mut().send_event(CountdownTick);
            app.update();

            if second % 10 == 9 {
                let hud = hud_snapshot(app.world());
                println!(
                    "{}: {}s left, score {} (hits {}/{}/{})",
                    hud.player_name,
                    hud.remaining_secs,
                    hud.score,
                    hud.hits.small,
                    hud.hits.medium,
                    hud.hits.large
                );
            }
        }

        app.world_mut().send_event(AdvanceTurn);
        app.update();
    }

    let hud = hud_snapshot(app.world());
    println!("Final leaderboard:");
    for (place, standing) in hud.leaderboard.iter().enumerate() {
        println!("  #{} {} — {} pts", place + 1, standing.name, standing.score);
    }
}

//! DEADEYE Simulation Core
//!
//! Headless ECS-симуляция gesture-controlled тира на Bevy 0.16.
//!
//! Архитектура:
//! - Core = игровое состояние и правила (этот crate)
//! - Shell = камера, hand-pose эстиматор, рендер, звук, виджеты
//!
//! Shell шагает `App::update()` ровно один раз на внешний кадр/тик,
//! предварительно записав события (`HandFrameInput`, `CountdownTick`,
//! UI-команды); обратно читает события (`AudioCue`, `FlashRequested`,
//! `TargetHit`) и снапшоты (`hud_snapshot`, `collect_draw_commands`).
//! Никаких wall-clock и источников случайности внутри core нет —
//! прогон полностью воспроизводим по seed + скрипту событий.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod aiming;
pub mod audio;
pub mod combat;
pub mod config;
pub mod hud;
pub mod input;
pub mod logger;
pub mod particles;
pub mod render;
pub mod round;
pub mod scoring;
pub mod shared;
pub mod targets;

// Re-export основных типов для удобства
pub use aiming::{AimingPlugin, Crosshair, RecoilTracker, ShotFired};
pub use audio::{drain_cues, AudioCue};
pub use combat::{drain_target_hits, CombatPlugin, TargetHit};
pub use config::GameConfig;
pub use hud::{hud_snapshot, HudSnapshot};
pub use input::{classify, CurrentGesture, GestureRead, HandFrameInput, InputPlugin, SimClock};
pub use particles::{Particle, ParticlesPlugin};
pub use render::{collect_draw_commands, DrawCommand, FlashRequested};
pub use round::{
    AdvanceTurn, CommandRejected, ConfirmName, ConfirmPlayerCount, CountdownTick, Leaderboard,
    MatchState, Phase, Player, RoundPlugin, Standing,
};
pub use scoring::{HitCounts, RoundSession};
pub use shared::{Circle, Rgb};
pub use targets::{SpawnState, Target, TargetCategory, TargetsPlugin};

/// Порядок per-frame pipeline внутри одного update.
///
/// Commands всегда; игровые сеты — только в PLAYING.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// UI-команды + countdown
    Commands,
    /// Жест → прицел → recoil
    Input,
    /// Разрешение выстрелов
    Resolve,
    /// Спавн мишеней
    Spawn,
    /// Движение мишеней + распад частиц
    Simulate,
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Не затираем RNG, вставленный фабрикой с явным seed
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.init_resource::<GameConfig>()
            // Boundary events (пишутся несколькими подсистемами)
            .add_event::<AudioCue>()
            .add_event::<FlashRequested>();

        app.configure_sets(
            Update,
            (
                FrameSet::Commands,
                FrameSet::Input,
                FrameSet::Resolve,
                FrameSet::Spawn,
                FrameSet::Simulate,
            )
                .chain(),
        );
        app.configure_sets(Update, FrameSet::Input.run_if(round::playing));
        app.configure_sets(Update, FrameSet::Resolve.run_if(round::playing));
        // Спавн и движение — только на кадрах эстиматора (не на тиках)
        app.configure_sets(
            Update,
            FrameSet::Spawn
                .run_if(round::playing)
                .run_if(input::frame_arrived),
        );
        app.configure_sets(
            Update,
            FrameSet::Simulate
                .run_if(round::playing)
                .run_if(input::frame_arrived),
        );

        app.add_plugins((
            InputPlugin,
            AimingPlugin,
            CombatPlugin,
            TargetsPlugin,
            ParticlesPlugin,
            RoundPlugin,
        ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции.
///
/// Restart после GAME_OVER — это пересоздание App через эту фабрику;
/// внутри машины состояний обратного перехода нет.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

//! Targets domain — спавн и движение мишеней.
//!
//! Мишень — круг, летящий горизонтально через экран. Категория
//! детерминированно фиксирует радиус, скорость, очки и цвет; случайны
//! только сама категория (взвешенно), вертикаль спавна и сторона входа.

use bevy::prelude::*;

pub mod systems;

pub use systems::*;

use crate::shared::Rgb;
use crate::FrameSet;

/// Вертикальный отступ зоны спавна от краёв поверхности (px)
pub const SPAWN_BAND_MARGIN: f32 = 100.0;
/// Запас за противоположным краем, после которого мишень снимается (px)
pub const EXIT_MARGIN: f32 = 100.0;

/// Архетип мишени. Радиус/скорость/очки/цвет — функция категории,
/// независимой рандомизации этих полей нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCategory {
    /// Маленькая и быстрая, дороже всех
    SmallFast,
    Medium,
    /// Большая и медленная, дешёвая
    LargeSlow,
}

impl TargetCategory {
    /// Взвешенный выбор категории по uniform r ∈ [0,1):
    /// 20% small-fast, 30% medium, 50% large-slow.
    pub fn roll(r: f32) -> Self {
        if r < 0.2 {
            Self::SmallFast
        } else if r < 0.5 {
            Self::Medium
        } else {
            Self::LargeSlow
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            Self::SmallFast => 30.0,
            Self::Medium => 50.0,
            Self::LargeSlow => 70.0,
        }
    }

    /// Модуль горизонтальной скорости (px за кадр)
    pub fn speed(self) -> f32 {
        match self {
            Self::SmallFast => 8.0,
            Self::Medium => 5.0,
            Self::LargeSlow => 3.0,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::SmallFast => 50,
            Self::Medium => 20,
            Self::LargeSlow => 10,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::SmallFast => Rgb::new(0xff, 0x33, 0x33),
            Self::Medium => Rgb::new(0xff, 0xff, 0x33),
            Self::LargeSlow => Rgb::new(0x33, 0xff, 0x33),
        }
    }
}

/// Живая мишень. Позиция — в Transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct Target {
    /// Горизонтальная скорость со знаком (px за кадр)
    pub velocity_x: f32,
    pub category: TargetCategory,
    /// Порядковый номер спавна; collision проверяет новейших первыми
    pub seq: u64,
}

/// Состояние спавнера.
#[derive(Resource, Debug, Default)]
pub struct SpawnState {
    /// Момент последнего спавна (clock shell'а, ms)
    pub last_spawn_ms: f64,
    /// Счётчик для Target::seq
    pub next_seq: u64,
}

/// Targets plugin — спавн + движение
pub struct TargetsPlugin;

impl Plugin for TargetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnState>()
            .add_systems(Update, spawn_targets.in_set(FrameSet::Spawn))
            .add_systems(Update, advance_targets.in_set(FrameSet::Simulate));
    }
}

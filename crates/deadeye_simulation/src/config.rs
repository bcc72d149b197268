//! Настройки геймплея (fixed constants, не тюнятся в runtime).

use bevy::prelude::*;

/// Конфигурация раунда и input-интерпретации.
///
/// Значения фиксированы и в runtime не тюнятся; resource нужен чтобы
/// системы не тащили магические числа.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Размер игровой поверхности в пикселях (ширина, высота)
    pub surface: Vec2,
    /// Длительность хода одного игрока (секунды)
    pub round_time_secs: u32,
    /// Минимальный интервал между спавнами targets (ms)
    pub spawn_rate_min_ms: f64,
    /// Максимальный интервал между спавнами targets (ms)
    pub spawn_rate_max_ms: f64,
    /// Минимальный рывок fingertip вверх за один кадр для выстрела (px)
    pub recoil_threshold: f32,
    /// Lerp-фактор сглаживания прицела (0-1)
    pub smoothing: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface: Vec2::new(1280.0, 720.0),
            round_time_secs: 30,
            spawn_rate_min_ms: 500.0,
            spawn_rate_max_ms: 1500.0,
            recoil_threshold: 40.0,
            smoothing: 0.3,
        }
    }
}

//! Базовые геометрические типы для hit-тестов и draw intents.
//!
//! Координаты — surface pixels: origin top-left, y растёт вниз
//! (как у зеркалированного видеофида).

use bevy::prelude::*;
use serde::Serialize;

/// Окружность в surface-координатах.
///
/// Используется для hit-тестов (crosshair против target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Строгое попадание: точка на самой границе — промах.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// RGB-цвет без альфы (альфа живёт отдельно, например particle life).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

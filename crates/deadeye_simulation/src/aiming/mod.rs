//! Aiming domain — сглаживание прицела и детекция выстрела.
//!
//! Содержит:
//! - Crosshair (экспоненциально сглаженная позиция прицела)
//! - RecoilTracker (вертикальная история fingertip для recoil-детекции)
//! - ShotFired (trigger event, потребляется combat)

use bevy::prelude::*;

pub mod systems;

pub use systems::*;

use crate::input::{interpret_hand_frames, GestureRead};
use crate::FrameSet;

/// Прицел игрока.
///
/// При потере жеста позиция замораживается (не сбрасывается), чтобы
/// реактивация продолжалась с последней известной точки.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Crosshair {
    /// Сглаженная позиция в surface pixels
    pub position: Vec2,
    /// false пока жест не удерживается
    pub active: bool,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            active: false,
        }
    }
}

impl Crosshair {
    /// Один шаг single-pole exponential smoothing.
    ///
    /// Сырые landmarks дрожат на высокой частоте; lerp с фиксированным
    /// фактором меняет latency на стабильность.
    pub fn update(&mut self, read: GestureRead, smoothing: f32) {
        match read.aim {
            Some(raw) if read.weapon_ready => {
                self.position = self.position.lerp(raw, smoothing);
                self.active = true;
            }
            _ => {
                self.active = false;
            }
        }
    }
}

/// Вертикальная координата fingertip прошлого кадра (surface px).
#[derive(Resource, Debug, Default)]
pub struct RecoilTracker {
    pub previous_y: f32,
}

impl RecoilTracker {
    /// One-frame edge detector выстрела.
    ///
    /// `delta = previous_y - current_y` положительна когда кончик пальца
    /// дёрнулся вверх (y растёт вниз). Порог строгий: ровно threshold —
    /// не выстрел. previous_y обновляется после проверки каждым кадром
    /// с видимой рукой, независимо от weapon-ready: после
    /// drop-and-reacquire жеста ложный выстрел из устаревшего значения
    /// невозможен.
    pub fn check(&mut self, read: GestureRead, threshold: f32) -> bool {
        let Some(raw) = read.aim else {
            // Руки нет — историю не трогаем
            return false;
        };

        let fired = read.weapon_ready && self.previous_y - raw.y > threshold;
        self.previous_y = raw.y;
        fired
    }
}

/// Trigger event: один qualifying кадр = ровно одно событие.
///
/// Без cooldown'а — быстрая осцилляция может стрелять несколько кадров
/// подряд, это принятое поведение.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShotFired;

/// Aiming plugin — crosshair + recoil pipeline
pub struct AimingPlugin;

impl Plugin for AimingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShotFired>()
            .init_resource::<Crosshair>()
            .init_resource::<RecoilTracker>()
            .add_systems(
                Update,
                (track_aim, detect_recoil)
                    .chain()
                    .in_set(FrameSet::Input)
                    .after(interpret_hand_frames),
            );
    }
}

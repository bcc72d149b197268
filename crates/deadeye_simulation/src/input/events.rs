//! События от внешнего источника кадров.

use bevy::prelude::*;

use super::gesture::LANDMARK_COUNT;

/// Один кадр hand-pose эстиматора.
///
/// `landmarks` — нормализованные координаты 21 точки первой найденной руки
/// (x, y ∈ [0,1], origin top-left, y вниз), `None` если рук в кадре нет.
/// `timestamp_ms` — часы shell'а на момент кадра.
#[derive(Event, Debug, Clone)]
pub struct HandFrameInput {
    pub timestamp_ms: f64,
    pub landmarks: Option<[Vec2; LANDMARK_COUNT]>,
}

impl HandFrameInput {
    /// Кадр без руки (частый нормальный случай, не ошибка).
    pub fn empty(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            landmarks: None,
        }
    }

    pub fn with_hand(timestamp_ms: f64, landmarks: [Vec2; LANDMARK_COUNT]) -> Self {
        Self {
            timestamp_ms,
            landmarks: Some(landmarks),
        }
    }
}

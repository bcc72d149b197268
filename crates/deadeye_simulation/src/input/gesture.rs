//! Классификация "gun gesture" из hand landmarks.
//!
//! Pure function одного кадра, без состояния. Из 21 landmark'а читаются
//! только четыре: index DIP/tip и pinky MCP/tip.
//!
//! Критерий готовности оружия:
//! - указательный палец выпрямлен (tip выше DIP на экране, т.е. y меньше)
//! - мизинец согнут (tip ниже MCP, y больше)

use bevy::prelude::*;

/// Количество landmarks в кадре (фиксировано эстиматором)
pub const LANDMARK_COUNT: usize = 21;

/// Index finger, второй сустав от кончика
pub const INDEX_DIP: usize = 7;
/// Index finger, кончик — точка прицеливания
pub const INDEX_TIP: usize = 8;
/// Pinky, основание
pub const PINKY_MCP: usize = 17;
/// Pinky, кончик
pub const PINKY_TIP: usize = 20;

/// Результат классификации одного кадра.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRead {
    /// Точка прицеливания в surface pixels (x зеркалирован), `None` без руки.
    pub aim: Option<Vec2>,
    /// Рука в форме "пистолета"; всегда false без руки.
    pub weapon_ready: bool,
}

impl GestureRead {
    pub const NO_HAND: Self = Self {
        aim: None,
        weapon_ready: false,
    };
}

/// Классифицирует кадр: aim point + weapon-ready.
///
/// Видеофид зеркалирован, поэтому x переворачивается (`1 - x`) перед
/// масштабированием в пиксели; y остаётся как есть.
pub fn classify(landmarks: Option<&[Vec2; LANDMARK_COUNT]>, surface: Vec2) -> GestureRead {
    let Some(lm) = landmarks else {
        return GestureRead::NO_HAND;
    };

    let tip = lm[INDEX_TIP];
    let aim = Vec2::new((1.0 - tip.x) * surface.x, tip.y * surface.y);

    let index_extended = lm[INDEX_TIP].y < lm[INDEX_DIP].y;
    let pinky_curled = lm[PINKY_TIP].y > lm[PINKY_MCP].y;

    GestureRead {
        aim: Some(aim),
        weapon_ready: index_extended && pinky_curled,
    }
}

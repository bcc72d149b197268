//! Audio boundary — именованные звуковые cue.
//!
//! Core не синтезирует звук: shell забирает cue и воспроизводит их
//! fire-and-forget. Недоступность аудио-устройства — проблема shell'а,
//! геймплей она прерывать не должна.

use bevy::prelude::*;

/// Запрос звукового эффекта, без параметров.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Выстрел (попадание или промах — неважно)
    Shoot,
    /// Мишень сбита
    Hit,
    /// Конец хода
    Win,
}

impl AudioCue {
    /// Имя cue для shell'а.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shoot => "shoot",
            Self::Hit => "hit",
            Self::Win => "win",
        }
    }
}

/// Забрать накопленные cue (вызывается shell'ом после каждого update).
///
/// Невыбранные cue истекают сами — пропущенный кадр shell'а не ошибка.
pub fn drain_cues(world: &mut World) -> Vec<AudioCue> {
    world.resource_mut::<Events<AudioCue>>().drain().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(AudioCue::Shoot.as_str(), "shoot");
        assert_eq!(AudioCue::Hit.as_str(), "hit");
        assert_eq!(AudioCue::Win.as_str(), "win");
    }
}

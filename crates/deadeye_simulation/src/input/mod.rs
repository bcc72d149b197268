//! Input domain — кадры hand-pose эстиматора и их интерпретация.
//!
//! Эстиматор живёт в shell'е: он присылает `HandFrameInput` перед каждым
//! `App::update()`. Core никогда не читает камеру и wall clock сам —
//! время кадра приходит вместе с кадром (воспроизводимость по скрипту
//! событий).

use bevy::prelude::*;

pub mod events;
pub mod gesture;

pub use events::*;
pub use gesture::*;

use crate::config::GameConfig;
use crate::FrameSet;

/// Часы симуляции: миллисекунды из timestamp'ов кадров.
///
/// Продвигаются только когда приходит кадр; используются spawner'ом.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub now_ms: f64,
}

/// Результат интерпретации текущего кадра.
///
/// `None` — в этом update кадр не приходил (например, только countdown tick);
/// aim/shot системы в таком случае ничего не делают.
#[derive(Resource, Debug, Default)]
pub struct CurrentGesture(pub Option<GestureRead>);

/// Система: читает `HandFrameInput` события, классифицирует жест.
///
/// Кадров за update ноль или один; при нескольких (shell догоняет)
/// берётся последний.
pub fn interpret_hand_frames(
    mut frames: EventReader<HandFrameInput>,
    config: Res<GameConfig>,
    mut clock: ResMut<SimClock>,
    mut gesture: ResMut<CurrentGesture>,
) {
    gesture.0 = None;
    for frame in frames.read() {
        clock.now_ms = frame.timestamp_ms;
        gesture.0 = Some(classify(frame.landmarks.as_ref(), config.surface));
    }
}

/// Run condition: в этом update пришёл кадр эстиматора.
///
/// Тик countdown'а приходит отдельным update и не должен двигать
/// симуляцию: мишени и частицы живут в частоте кадров, не тиков.
pub fn frame_arrived(gesture: Res<CurrentGesture>) -> bool {
    gesture.0.is_some()
}

/// Input plugin — приём кадров от эстиматора
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HandFrameInput>()
            .init_resource::<SimClock>()
            .init_resource::<CurrentGesture>()
            .add_systems(Update, interpret_hand_frames.in_set(FrameSet::Input));
    }
}

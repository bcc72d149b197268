//! Combat — разрешение выстрелов по мишеням.
//!
//! Core ответственность:
//! - hit-тест crosshair против живых мишеней (строгое dist < radius)
//! - счёт и счётчики категорий
//! - burst частиц + события для shell'а (audio cue, вспышка, TargetHit)
//!
//! Shell ответственность: собственно звук и пиксели вспышки.

use bevy::prelude::*;

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

use crate::FrameSet;

/// Combat plugin — потребляет ShotFired из aiming
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TargetHit>()
            .add_systems(Update, resolve_shots.in_set(FrameSet::Resolve));
    }
}

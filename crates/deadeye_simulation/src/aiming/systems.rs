//! Aiming systems: тонкие обёртки над Crosshair/RecoilTracker.

use bevy::prelude::*;

use super::{Crosshair, RecoilTracker, ShotFired};
use crate::config::GameConfig;
use crate::input::CurrentGesture;

/// Система: сглаживание прицела текущим GestureRead.
///
/// Без кадра в этом update ничего не делает (прицел как есть).
pub fn track_aim(
    gesture: Res<CurrentGesture>,
    config: Res<GameConfig>,
    mut crosshair: ResMut<Crosshair>,
) {
    if let Some(read) = gesture.0 {
        crosshair.update(read, config.smoothing);
    }
}

/// Система: recoil-детекция → ShotFired.
pub fn detect_recoil(
    gesture: Res<CurrentGesture>,
    config: Res<GameConfig>,
    mut tracker: ResMut<RecoilTracker>,
    mut shots: EventWriter<ShotFired>,
) {
    if let Some(read) = gesture.0 {
        if tracker.check(read, config.recoil_threshold) {
            shots.write(ShotFired);
        }
    }
}

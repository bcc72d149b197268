//! Combat events.

use bevy::prelude::*;

use crate::targets::TargetCategory;

/// Событие: мишень сбита.
///
/// Для shell'а (попап очков, статистика); внутри core уже всё учтено.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetHit {
    pub category: TargetCategory,
    pub points: u32,
    /// Центр сбитой мишени (surface px)
    pub position: Vec2,
}

/// Забрать накопленные попадания (вызывается shell'ом раз в кадр).
pub fn drain_target_hits(world: &mut World) -> Vec<TargetHit> {
    world.resource_mut::<Events<TargetHit>>().drain().collect()
}

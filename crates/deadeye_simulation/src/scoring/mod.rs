//! ScoreBoard — накопление счёта текущего хода.
//!
//! `RoundSession` — transient состояние одного хода; полностью
//! сбрасывается на старте каждого хода и складывается в
//! `Player::score` при его окончании.

use bevy::prelude::*;
use serde::Serialize;

use crate::targets::TargetCategory;

/// Счётчики попаданий по категориям мишеней.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HitCounts {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl HitCounts {
    pub fn bump(&mut self, category: TargetCategory) {
        match category {
            TargetCategory::SmallFast => self.small += 1,
            TargetCategory::Medium => self.medium += 1,
            TargetCategory::LargeSlow => self.large += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.small + self.medium + self.large
    }
}

/// Состояние текущего хода.
///
/// Инвариант: remaining_secs монотонно не растёт в PLAYING и
/// никогда не уходит ниже нуля (декремент насыщающий).
#[derive(Resource, Debug, Default)]
pub struct RoundSession {
    pub score: u32,
    pub hits: HitCounts,
    pub remaining_secs: u32,
}

impl RoundSession {
    /// Атомарный сброс на старте хода. Частичный сброс — баг:
    /// остатки прошлого раунда не должны протекать в новый.
    pub fn reset(&mut self, round_time_secs: u32) {
        *self = Self {
            score: 0,
            hits: HitCounts::default(),
            remaining_secs: round_time_secs,
        };
    }

    pub fn record_hit(&mut self, category: TargetCategory) {
        self.score += category.points();
        self.hits.bump(category);
    }
}

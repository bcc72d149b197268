//! HUD/UI boundary — readable снапшот состояния для shell'а.

use bevy::prelude::*;
use serde::Serialize;

use crate::round::{Leaderboard, MatchState, Phase, Standing};
use crate::scoring::{HitCounts, RoundSession};

/// Всё, что UI показывает поверх игры, одной структурой.
///
/// Serialize — чтобы shell мог пробросить снапшот как есть
/// (например, в web-виджет).
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub phase: Phase,
    pub player_index: usize,
    /// Имя текущего игрока; пустое в SETUP/GAME_OVER
    pub player_name: String,
    pub remaining_secs: u32,
    pub score: u32,
    pub hits: HitCounts,
    /// Пустой до GAME_OVER
    pub leaderboard: Vec<Standing>,
    /// Топ-3 для подиума (подмножество leaderboard)
    pub podium: Vec<Standing>,
}

/// Снять снапшот HUD с мира.
pub fn hud_snapshot(world: &World) -> HudSnapshot {
    let state = world.resource::<MatchState>();
    let session = world.resource::<RoundSession>();
    let leaderboard = world.resource::<Leaderboard>();

    HudSnapshot {
        phase: state.phase,
        player_index: state.current,
        player_name: state
            .current_player()
            .map(|player| player.name.clone())
            .unwrap_or_default(),
        remaining_secs: session.remaining_secs,
        score: session.score,
        hits: session.hits,
        leaderboard: leaderboard.standings.clone(),
        podium: leaderboard.podium().to_vec(),
    }
}

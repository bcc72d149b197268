//! Round systems: обработка UI-команд + countdown.

use bevy::prelude::*;

use super::{
    AdvanceTurn, CommandRejected, ConfirmName, ConfirmPlayerCount, CountdownTick, Leaderboard,
    MatchState, Phase, Player,
};
use crate::audio::AudioCue;
use crate::config::GameConfig;
use crate::logger;
use crate::particles::Particle;
use crate::scoring::RoundSession;
use crate::targets::Target;

/// Система: SETUP → NAME_ENTRY.
///
/// Ростер заполняется placeholder-именами; count == 0 отклоняется
/// с CommandRejected, фаза остаётся SETUP.
pub fn handle_confirm_player_count(
    mut confirms: EventReader<ConfirmPlayerCount>,
    mut state: ResMut<MatchState>,
    mut rejected: EventWriter<CommandRejected>,
) {
    for confirm in confirms.read() {
        if state.phase != Phase::Setup {
            logger::log_warning(&format!(
                "confirm-player-count ignored in {:?}",
                state.phase
            ));
            continue;
        }
        if confirm.count == 0 {
            logger::log_warning("confirm-player-count rejected: need at least 1 player");
            rejected.write(CommandRejected {
                reason: "player count must be at least 1".into(),
            });
            continue;
        }

        state.players = (0..confirm.count)
            .map(|i| Player {
                name: format!("Player {}", i + 1),
                score: 0,
            })
            .collect();
        state.current = 0;
        state.phase = Phase::NameEntry;

        logger::log_info(&format!("Roster confirmed: {} players", confirm.count));
    }
}

/// Система: NAME_ENTRY → PLAYING.
///
/// Сброс раунда атомарен: счёт, счётчики, живые мишени/частицы и
/// таймер обнуляются вместе; заодно очищается очередь countdown-тиков —
/// stale tick прошлого раунда не должен сработать в новом.
pub fn handle_confirm_name(
    mut commands: Commands,
    mut confirms: EventReader<ConfirmName>,
    mut state: ResMut<MatchState>,
    mut session: ResMut<RoundSession>,
    config: Res<GameConfig>,
    mut ticks: ResMut<Events<CountdownTick>>,
    leftovers: Query<Entity, Or<(With<Target>, With<Particle>)>>,
) {
    for confirm in confirms.read() {
        if state.phase != Phase::NameEntry {
            logger::log_warning(&format!("confirm-name ignored in {:?}", state.phase));
            continue;
        }

        if let Some(name) = confirm.name.as_deref() {
            if !name.is_empty() {
                let current = state.current;
                if let Some(player) = state.players.get_mut(current) {
                    player.name = name.to_owned();
                }
            }
        }

        session.reset(config.round_time_secs);
        for entity in leftovers.iter() {
            commands.entity(entity).despawn();
        }
        ticks.clear();
        state.phase = Phase::Playing;

        logger::log_info(&format!(
            "Round started: {} ({} s)",
            state.current_player().map(|p| p.name.as_str()).unwrap_or("?"),
            config.round_time_secs
        ));
    }
}

/// Система: countdown в PLAYING.
///
/// Декремент насыщающий; на нуле ход заканчивается — счёт финализируется
/// в игрока, фаза уходит в TRANSITION, эмитится "win" cue. Лишние тики
/// в той же пачке после перехода игнорируются.
pub fn tick_countdown(
    mut ticks: EventReader<CountdownTick>,
    mut state: ResMut<MatchState>,
    mut session: ResMut<RoundSession>,
    mut cues: EventWriter<AudioCue>,
) {
    for _ in ticks.read() {
        if state.phase != Phase::Playing {
            break;
        }

        session.remaining_secs = session.remaining_secs.saturating_sub(1);
        if session.remaining_secs > 0 {
            continue;
        }

        let current = state.current;
        let final_score = session.score;
        if let Some(player) = state.players.get_mut(current) {
            player.score = final_score;
        }
        state.phase = Phase::Transition;
        cues.write(AudioCue::Win);

        logger::log_info(&format!(
            "Round over: {} scored {}",
            state.current_player().map(|p| p.name.as_str()).unwrap_or("?"),
            final_score
        ));
    }
}

/// Система: TRANSITION → NAME_ENTRY | GAME_OVER.
///
/// Сначала инкремент индекса, затем проверка против длины ростера.
pub fn handle_advance_turn(
    mut advances: EventReader<AdvanceTurn>,
    mut state: ResMut<MatchState>,
    mut leaderboard: ResMut<Leaderboard>,
) {
    for _ in advances.read() {
        if state.phase != Phase::Transition {
            logger::log_warning(&format!("advance-turn ignored in {:?}", state.phase));
            continue;
        }

        state.current += 1;
        if state.current < state.players.len() {
            state.phase = Phase::NameEntry;
            logger::log_info(&format!(
                "Next up: player {} of {}",
                state.current + 1,
                state.players.len()
            ));
        } else {
            *leaderboard = Leaderboard::rank(&state.players);
            state.phase = Phase::GameOver;
            logger::log_info("Game over: leaderboard ready");
        }
    }
}

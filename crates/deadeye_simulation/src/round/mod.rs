//! Round domain — машина состояний матча.
//!
//! SETUP → NAME_ENTRY → PLAYING → TRANSITION → (NAME_ENTRY | GAME_OVER).
//! `MatchState` — единственный владелец фазовых переходов; остальные
//! системы только читают фазу через run condition. GAME_OVER терминален:
//! внешний restart = пересоздание App, скрытого reset-перехода нет.

use bevy::prelude::*;
use serde::Serialize;

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

use crate::FrameSet;
use crate::scoring::RoundSession;

/// Фаза матча.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Ждём подтверждения количества игроков
    #[default]
    Setup,
    /// Ввод имени текущего игрока
    NameEntry,
    /// Идёт ход: только здесь живёт симуляция
    Playing,
    /// Экран результата хода
    Transition,
    /// Терминальная фаза с leaderboard
    GameOver,
}

/// Игрок ростера. Порядок ростера = порядок ходов.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: String,
    /// Финализированный счёт (записывается в конце хода)
    pub score: u32,
}

/// Состояние матча: фаза + ростер + индекс текущего игрока.
///
/// Инвариант: в NameEntry/Playing/Transition `current` — валидный
/// индекс ростера.
#[derive(Resource, Debug, Default)]
pub struct MatchState {
    pub phase: Phase,
    pub players: Vec<Player>,
    pub current: usize,
}

impl MatchState {
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }
}

/// Строка финального рейтинга.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub score: u32,
}

/// Финальный рейтинг, считается один раз при входе в GAME_OVER.
#[derive(Resource, Debug, Default)]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    /// Stable sort по убыванию счёта: при равенстве очков сохраняется
    /// исходный порядок ростера.
    pub fn rank(players: &[Player]) -> Self {
        let mut standings: Vec<Standing> = players
            .iter()
            .map(|player| Standing {
                name: player.name.clone(),
                score: player.score,
            })
            .collect();
        standings.sort_by_key(|standing| std::cmp::Reverse(standing.score));
        Self { standings }
    }

    /// Топ-3 для подиума (меньше, если игроков меньше).
    pub fn podium(&self) -> &[Standing] {
        &self.standings[..self.standings.len().min(3)]
    }
}

/// Run condition: симуляция живёт только в PLAYING.
pub fn playing(state: Res<MatchState>) -> bool {
    state.phase == Phase::Playing
}

/// Round plugin — команды от UI + countdown
pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ConfirmPlayerCount>()
            .add_event::<ConfirmName>()
            .add_event::<AdvanceTurn>()
            .add_event::<CountdownTick>()
            .add_event::<CommandRejected>()
            .init_resource::<MatchState>()
            .init_resource::<RoundSession>()
            .init_resource::<Leaderboard>()
            .add_systems(
                Update,
                (
                    handle_confirm_player_count,
                    handle_confirm_name,
                    tick_countdown.run_if(playing),
                    handle_advance_turn,
                )
                    .chain()
                    .in_set(FrameSet::Commands),
            );
    }
}

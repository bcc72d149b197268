//! UI-команды и внешний countdown tick.
//!
//! Каждая команда соответствует одному переходу машины состояний;
//! команды в неподходящей фазе логируются и игнорируются.

use bevy::prelude::*;

/// SETUP: подтвердить количество игроков (≥ 1).
#[derive(Event, Debug, Clone, Copy)]
pub struct ConfirmPlayerCount {
    pub count: usize,
}

/// NAME_ENTRY: подтвердить имя и начать ход.
///
/// `Some` с непустой строкой перезаписывает placeholder-имя;
/// `None` или пустая строка оставляют его как есть.
#[derive(Event, Debug, Clone)]
pub struct ConfirmName {
    pub name: Option<String>,
}

/// TRANSITION: перейти к следующему игроку либо к leaderboard.
#[derive(Event, Debug, Clone, Copy)]
pub struct AdvanceTurn;

/// Периодический тик countdown'а (1 Hz, присылается shell'ом).
///
/// Декремент применяется между кадрами; старт нового раунда очищает
/// очередь тиков (защита от stale tick прошлого раунда).
#[derive(Event, Debug, Clone, Copy)]
pub struct CountdownTick;

/// Команда отклонена валидацией (recoverable, фаза не меняется).
#[derive(Event, Debug, Clone)]
pub struct CommandRejected {
    pub reason: String,
}

//! Rendering boundary — draw intents, не пиксели.
//!
//! Shell вызывает `collect_draw_commands` после каждого update и рисует
//! список сам (canvas, GPU — его дело). Игровые слои присутствуют только
//! в PLAYING; кадр камеры рисуется всегда.

use bevy::prelude::*;

use crate::aiming::Crosshair;
use crate::particles::Particle;
use crate::round::{MatchState, Phase};
use crate::shared::Rgb;
use crate::targets::Target;

/// Запрос полноэкранной вспышки (на каждый выстрел, hit или miss).
#[derive(Event, Debug, Clone, Copy)]
pub struct FlashRequested;

/// Одна инструкция отрисовки в порядке наложения.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Кадр камеры, зеркалированный по горизонтали
    VideoFrame,
    /// Мишень: внешнее кольцо + два внутренних, цвет категории
    TargetRings {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    /// Искра; alpha = остаток жизни
    ParticleDot {
        center: Vec2,
        alpha: f32,
        color: Rgb,
    },
    /// Прицел: окружность + крест
    CrosshairMark { center: Vec2 },
    /// Полноэкранная вспышка выстрела (поверх всего)
    Flash,
}

/// Собрать draw-лист текущего кадра.
///
/// Мишени идут в порядке спавна (как рисовал бы их список), прицел
/// поверх них, вспышки последними.
pub fn collect_draw_commands(world: &mut World) -> Vec<DrawCommand> {
    let mut list = vec![DrawCommand::VideoFrame];

    if world.resource::<MatchState>().phase == Phase::Playing {
        let mut target_query = world.query::<(&Transform, &Target)>();
        let mut targets: Vec<(u64, DrawCommand)> = target_query
            .iter(world)
            .map(|(transform, target)| {
                (
                    target.seq,
                    DrawCommand::TargetRings {
                        center: transform.translation.truncate(),
                        radius: target.category.radius(),
                        color: target.category.color(),
                    },
                )
            })
            .collect();
        targets.sort_by_key(|(seq, _)| *seq);
        list.extend(targets.into_iter().map(|(_, command)| command));

        let mut particle_query = world.query::<(&Transform, &Particle)>();
        let particles: Vec<DrawCommand> = particle_query
            .iter(world)
            .map(|(transform, particle)| DrawCommand::ParticleDot {
                center: transform.translation.truncate(),
                alpha: particle.life,
                color: particle.color,
            })
            .collect();
        list.extend(particles);

        let crosshair = world.resource::<Crosshair>();
        if crosshair.active {
            list.push(DrawCommand::CrosshairMark {
                center: crosshair.position,
            });
        }
    }

    let flashes = world.resource_mut::<Events<FlashRequested>>().drain().count();
    for _ in 0..flashes {
        list.push(DrawCommand::Flash);
    }

    list
}

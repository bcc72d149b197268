//! Shot resolution система.

use bevy::prelude::*;

use super::TargetHit;
use crate::aiming::{Crosshair, ShotFired};
use crate::audio::AudioCue;
use crate::particles::spawn_burst;
use crate::render::FlashRequested;
use crate::scoring::RoundSession;
use crate::shared::Circle;
use crate::targets::Target;
use crate::{logger, DeterministicRng};

/// Система: обработка ShotFired событий.
///
/// Звук выстрела и вспышка эмитятся на каждый trigger независимо от
/// попадания. Мишени проверяются в порядке "новейшая первой" — при
/// перекрытии сбивается самая свежая; максимум одна мишень на выстрел.
pub fn resolve_shots(
    mut commands: Commands,
    mut shots: EventReader<ShotFired>,
    crosshair: Res<Crosshair>,
    targets: Query<(Entity, &Transform, &Target)>,
    mut session: ResMut<RoundSession>,
    mut rng: ResMut<DeterministicRng>,
    mut cues: EventWriter<AudioCue>,
    mut flashes: EventWriter<FlashRequested>,
    mut hits: EventWriter<TargetHit>,
) {
    for _ in shots.read() {
        cues.write(AudioCue::Shoot);
        flashes.write(FlashRequested);

        let mut live: Vec<_> = targets.iter().collect();
        live.sort_by_key(|(_, _, target)| std::cmp::Reverse(target.seq));

        for (entity, transform, target) in live {
            let zone = Circle::new(transform.translation.truncate(), target.category.radius());
            if !zone.contains(crosshair.position) {
                continue;
            }

            session.record_hit(target.category);
            cues.write(AudioCue::Hit);
            hits.write(TargetHit {
                category: target.category,
                points: target.category.points(),
                position: zone.center,
            });
            spawn_burst(&mut commands, &mut rng.rng, zone.center, target.category.color());
            commands.entity(entity).despawn();

            logger::log(&format!(
                "Hit: {:?} +{} (score {})",
                target.category,
                target.category.points(),
                session.score
            ));

            // Одна пуля — одна мишень
            break;
        }
    }
}

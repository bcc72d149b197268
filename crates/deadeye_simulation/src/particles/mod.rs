//! Particles — декоративные искры от попаданий.
//!
//! Чистая косметика: никакой связи с геймплеем. Жизнь убывает на
//! фиксированную долю за кадр (frame-coupled), не по wall-clock
//! времени — скорость распада привязана к частоте эстиматора.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::shared::Rgb;
use crate::targets::advance_targets;
use crate::FrameSet;

/// Частиц в одном burst'е от попадания
pub const BURST_SIZE: usize = 10;
/// Убыль жизни за кадр (1.0 / 0.05 = 20 кадров на частицу)
pub const LIFE_DECAY: f32 = 0.05;
/// Разброс изотропной скорости: компоненты из [-5, 5) px за кадр
const BURST_SPEED: f32 = 10.0;

/// Искра. Позиция — в Transform; alpha при отрисовке = life.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub velocity: Vec2,
    /// Остаток жизни ∈ [0, 1]
    pub life: f32,
    pub color: Rgb,
}

/// Выпустить burst частиц цвета сбитой мишени из её центра.
pub fn spawn_burst(commands: &mut Commands, rng: &mut ChaCha8Rng, origin: Vec2, color: Rgb) {
    for _ in 0..BURST_SIZE {
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * BURST_SPEED,
            (rng.gen::<f32>() - 0.5) * BURST_SPEED,
        );
        commands.spawn((
            Transform::from_translation(origin.extend(0.0)),
            Particle {
                velocity,
                life: 1.0,
                color,
            },
        ));
    }
}

/// Система: движение + распад частиц.
pub fn advance_particles(
    mut commands: Commands,
    mut particles: Query<(Entity, &mut Transform, &mut Particle)>,
) {
    for (entity, mut transform, mut particle) in particles.iter_mut() {
        transform.translation.x += particle.velocity.x;
        transform.translation.y += particle.velocity.y;
        particle.life -= LIFE_DECAY;

        if particle.life <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Particles plugin
pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            advance_particles
                .in_set(FrameSet::Simulate)
                .after(advance_targets),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn particle_app() -> App {
        let mut app = App::new();
        app.add_systems(Update, advance_particles);
        app
    }

    #[test]
    fn test_particle_moves_by_velocity() {
        let mut app = particle_app();
        app.world_mut().spawn((
            Transform::from_translation(Vec3::new(100.0, 100.0, 0.0)),
            Particle {
                velocity: Vec2::new(3.0, -2.0),
                life: 1.0,
                color: Rgb::new(255, 51, 51),
            },
        ));

        app.update();

        let world = app.world_mut();
        let mut query = world.query::<&Transform>();
        let transform = query.single(world).expect("particle alive");
        assert_eq!(transform.translation.x, 103.0);
        assert_eq!(transform.translation.y, 98.0);
    }

    #[test]
    fn test_particle_expires_after_twenty_frames() {
        let mut app = particle_app();
        app.world_mut().spawn((
            Transform::default(),
            Particle {
                velocity: Vec2::ZERO,
                life: 1.0,
                color: Rgb::new(51, 255, 51),
            },
        ));

        for _ in 0..19 {
            app.update();
        }
        let world = app.world_mut();
        let mut query = world.query::<&Particle>();
        assert_eq!(query.iter(world).count(), 1, "жива на 19-м кадре");

        app.update();
        let world = app.world_mut();
        let mut query = world.query::<&Particle>();
        assert_eq!(query.iter(world).count(), 0, "снята когда life <= 0");
    }

    #[test]
    fn test_burst_size_and_spread() {
        let mut app = particle_app();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        {
            let world = app.world_mut();
            let mut commands = world.commands();
            spawn_burst(
                &mut commands,
                &mut rng,
                Vec2::new(400.0, 300.0),
                Rgb::new(255, 255, 51),
            );
        }
        app.world_mut().flush();

        let world = app.world_mut();
        let mut query = world.query::<&Particle>();
        let particles: Vec<_> = query.iter(world).collect();
        assert_eq!(particles.len(), BURST_SIZE);

        for particle in particles {
            assert!(particle.velocity.x >= -5.0 && particle.velocity.x < 5.0);
            assert!(particle.velocity.y >= -5.0 && particle.velocity.y < 5.0);
        }
    }
}

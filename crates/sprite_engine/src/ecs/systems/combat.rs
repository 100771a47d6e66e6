//! Combat system: melee swings and enemy removal
//!
//! A requested attack opens a swing that lasts `attack_duration` seconds.
//! For the life of the swing a square hitbox sits `attack_reach` pixels in
//! front of the attacker's centre. Any enemy collider overlapping it is
//! queued for destruction and removed at the end-of-frame flush.

use crate::ecs::components::{AttackState, ColliderTag};
use crate::ecs::{ComponentKind, Entity, System, SystemContext, World};
use crate::events::GameEvent;
use crate::foundation::math::Aabb;

/// Resolves attack swings for every entity with an [`AttackState`]
#[derive(Debug, Default)]
pub struct CombatSystem;

impl CombatSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Enemies whose collider overlaps `hitbox`, in ascending id order
    fn enemies_hit(world: &World, attacker: Entity, hitbox: &Aabb) -> Vec<Entity> {
        world
            .query_entities(&[ComponentKind::Collider, ComponentKind::Transform])
            .into_iter()
            .filter(|&other| other != attacker && !world.is_pending_destruction(other))
            .filter(|&other| {
                world
                    .colliders
                    .get(other)
                    .is_some_and(|collider| collider.tag.contains(ColliderTag::ENEMY))
            })
            .filter(|&other| {
                world
                    .transforms
                    .get(other)
                    .is_some_and(|transform| transform.aabb().overlaps(hitbox))
            })
            .collect()
    }
}

impl System for CombatSystem {
    fn name(&self) -> &'static str {
        "combat"
    }

    fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let config = ctx.config;
        let fighters = world.query_entities(&[
            ComponentKind::AttackState,
            ComponentKind::Transform,
            ComponentKind::MovementState,
        ]);

        for attacker in fighters {
            let (Some(transform), Some(state), Some(attack)) = (
                world.transforms.get(attacker).copied(),
                world.movement_states.get(attacker).copied(),
                world.attacks.get_mut(attacker),
            ) else {
                continue;
            };

            if attack.is_active() {
                attack.timer -= ctx.delta_time;
                if attack.timer <= 0.0 {
                    attack.timer = 0.0;
                    attack.hitbox = None;
                }
            } else if attack.requested {
                let center = transform.center() + state.facing.unit_vector() * config.attack_reach;
                let hitbox = Aabb::from_center(center, config.attack_size, config.attack_size);
                attack.timer = config.attack_duration;
                attack.hitbox = Some(hitbox);
                ctx.events.push(GameEvent::AttackStarted { attacker, hitbox });
            }

            let Some(hitbox) = attack.hitbox else {
                continue;
            };

            for enemy in Self::enemies_hit(world, attacker, &hitbox) {
                log::info!("{attacker} slew {enemy}");
                world.destroy_entity(enemy);
                ctx.events.push(GameEvent::EnemySlain { attacker, enemy });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::ecs::components::{Collider, Facing, MotionState, MovementState, Transform};
    use crate::ecs::scheduler::FrameInput;
    use crate::events::EventQueue;
    use approx::assert_relative_eq;

    fn spawn_fighter(world: &mut World, facing: Facing) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(100.0, 80.0, 16.0, 16.0));
        world.add_component(entity, MovementState::new(MotionState::Idle, facing));
        world.add_component(entity, AttackState::default());
        entity
    }

    fn spawn_target(world: &mut World, x: f32, y: f32, tag: ColliderTag) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(x, y, 16.0, 16.0));
        world.add_component(entity, Collider::trigger(tag));
        entity
    }

    fn tick(world: &mut World, dt: f32) -> Vec<GameEvent> {
        let input = FrameInput::default();
        let config = SimulationConfig::default();
        let mut events = EventQueue::new();
        let mut ctx = SystemContext::new(dt, &input, &config, &mut events);
        CombatSystem::new().run(world, &mut ctx);
        events.drain()
    }

    fn request(world: &mut World, entity: Entity, requested: bool) {
        world.get_component_mut::<AttackState>(entity).unwrap().requested = requested;
    }

    #[test]
    fn test_swing_places_hitbox_in_front() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Right);
        request(&mut world, player, true);

        let events = tick(&mut world, 1.0 / 60.0);

        let attack = world.get_component::<AttackState>(player).unwrap();
        let hitbox = attack.hitbox.unwrap();
        assert_relative_eq!(hitbox.center().x, 120.0);
        assert_relative_eq!(hitbox.center().y, 88.0);
        assert_relative_eq!(hitbox.width(), 20.0);
        assert_relative_eq!(attack.timer, 0.25);
        assert_eq!(events, vec![GameEvent::AttackStarted { attacker: player, hitbox }]);
    }

    #[test]
    fn test_swing_expires_after_duration() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Up);
        request(&mut world, player, true);
        tick(&mut world, 0.1);
        request(&mut world, player, false);

        tick(&mut world, 0.125);
        assert!(world.get_component::<AttackState>(player).unwrap().is_active());

        tick(&mut world, 0.125);
        let attack = world.get_component::<AttackState>(player).unwrap();
        assert!(!attack.is_active());
        assert_eq!(attack.timer, 0.0);
    }

    #[test]
    fn test_held_attack_does_not_restart_active_swing() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Down);
        request(&mut world, player, true);

        tick(&mut world, 0.1);
        let events = tick(&mut world, 0.1);

        assert!(events.is_empty());
        assert_relative_eq!(world.get_component::<AttackState>(player).unwrap().timer, 0.15);
    }

    #[test]
    fn test_enemy_in_hitbox_is_destroyed_at_flush() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Right);
        let enemy = spawn_target(&mut world, 118.0, 80.0, ColliderTag::ENEMY);
        let far = spawn_target(&mut world, 200.0, 80.0, ColliderTag::ENEMY);
        let ghost = spawn_target(&mut world, 118.0, 80.0, ColliderTag::GHOST);
        request(&mut world, player, true);

        let events = tick(&mut world, 1.0 / 60.0);

        assert!(events.contains(&GameEvent::EnemySlain { attacker: player, enemy }));
        assert!(world.is_pending_destruction(enemy));
        assert!(world.contains(enemy));

        world.flush_destructions();
        assert!(!world.contains(enemy));
        assert!(world.contains(far));
        assert!(world.contains(ghost));
    }

    #[test]
    fn test_enemy_is_slain_once() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Right);
        spawn_target(&mut world, 118.0, 80.0, ColliderTag::ENEMY);
        request(&mut world, player, true);

        let first = tick(&mut world, 0.05);
        let second = tick(&mut world, 0.05);

        let slain = |events: &[GameEvent]| {
            events.iter().filter(|e| matches!(e, GameEvent::EnemySlain { .. })).count()
        };
        assert_eq!(slain(&first), 1);
        assert_eq!(slain(&second), 0);
    }

    #[test]
    fn test_attacker_never_hits_itself() {
        let mut world = World::new();
        let player = spawn_fighter(&mut world, Facing::Right);
        world.add_component(player, Collider::solid(ColliderTag::PLAYER | ColliderTag::ENEMY));
        request(&mut world, player, true);

        tick(&mut world, 1.0 / 60.0);

        assert!(!world.is_pending_destruction(player));
    }
}

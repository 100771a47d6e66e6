//! Integration tests for the frame pipeline
//!
//! Each test builds a small world and drives it through
//! [`Scheduler::run_frame`] only, checking the behaviour that emerges from
//! the systems working together.

use std::collections::HashMap;

use crate::config::SimulationConfig;
use crate::ecs::components::{
    AiBehavior, AnimationState, AttackState, Collider, ColliderTag, Facing, InputControl,
    MotionState, MovementState, RigidBody, Transform,
};
use crate::ecs::scheduler::{FrameInput, Scheduler};
use crate::ecs::{ComponentKind, Entity, World};
use crate::events::GameEvent;
use crate::foundation::math::Vec2;
use crate::render::{FrameAtlas, FrameHandle, FrameInfo};

const DT: f32 = 1.0 / 60.0;

fn flipbook(atlas: &mut FrameAtlas, names: &[&str]) -> AnimationState {
    let clips: HashMap<String, Vec<FrameHandle>> = names
        .iter()
        .map(|name| {
            let frames = (0..2)
                .map(|i| {
                    atlas.register(FrameInfo {
                        name: format!("{name}_{i}"),
                        x: i * 16,
                        y: 0,
                        width: 16,
                        height: 16,
                    })
                })
                .collect();
            (name.to_string(), frames)
        })
        .collect();
    AnimationState::new(clips, names[0], 0.15).unwrap()
}

fn spawn_player(world: &mut World, atlas: &mut FrameAtlas, x: f32, y: f32) -> Entity {
    let player = world.create_entity();
    world.add_component(player, Transform::new(x, y, 16.0, 16.0));
    world.add_component(player, RigidBody::new(80.0, 0.5));
    world.add_component(player, MovementState::default());
    world.add_component(player, Collider::solid(ColliderTag::PLAYER));
    world.add_component(player, InputControl);
    world.add_component(player, AttackState::default());
    world.add_component(
        player,
        flipbook(atlas, &["IDLE_DOWN", "IDLE_RIGHT", "WALK_RIGHT", "WALK_DOWN"]).with_z_index(1),
    );
    player
}

fn spawn_monster(world: &mut World, x: f32, y: f32, waypoints: Vec<Vec2>) -> Entity {
    let monster = world.create_entity();
    world.add_component(monster, Transform::new(x, y, 16.0, 16.0));
    world.add_component(monster, RigidBody::new(40.0, 4.0));
    world.add_component(monster, MovementState::default());
    world.add_component(monster, Collider::trigger(ColliderTag::ENEMY));
    world.add_component(monster, AiBehavior::patrol(waypoints));
    monster
}

fn spawn_wall(world: &mut World, x: f32, y: f32, width: f32, height: f32) -> Entity {
    let wall = world.create_entity();
    world.add_component(wall, Transform::new(x, y, width, height));
    world.add_component(wall, Collider::solid(ColliderTag::WALL));
    wall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_cycles_through_waypoints() {
        let mut world = World::new();
        let monster = spawn_monster(&mut world, 0.0, 0.0, vec![Vec2::zeros(), Vec2::new(10.0, 0.0)]);
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        let mut visited = vec![0];
        let mut walked_toward_second = false;
        for _ in 0..(20.0 / DT) as usize {
            scheduler.run_frame(&mut world, &FrameInput::default(), DT);

            let ai = world.get_component::<AiBehavior>(monster).unwrap();
            if visited.last() != Some(&ai.current_waypoint) {
                visited.push(ai.current_waypoint);
            }
            let state = world.get_component::<MovementState>(monster).unwrap();
            if ai.current_waypoint == 1 && state.motion == MotionState::Walk {
                walked_toward_second = true;
            }
        }

        assert!(visited.len() >= 5, "expected several laps, got {visited:?}");
        assert_eq!(&visited[..5], &[0, 1, 0, 1, 0]);
        assert!(walked_toward_second);
    }

    #[test]
    fn test_attack_removes_enemy_from_every_query() {
        let mut world = World::new();
        let mut atlas = FrameAtlas::new();
        let player = spawn_player(&mut world, &mut atlas, 100.0, 80.0);
        world.get_component_mut::<MovementState>(player).unwrap().facing = Facing::Right;
        let monster = spawn_monster(&mut world, 120.0, 80.0, Vec::new());
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        let output = scheduler.run_frame(
            &mut world,
            &FrameInput { movement: Vec2::zeros(), attack: true },
            DT,
        );

        assert!(output
            .events
            .contains(&GameEvent::EnemySlain { attacker: player, enemy: monster }));
        assert_eq!(output.destroyed, 1);
        assert!(!world.contains(monster));
        for kind in ComponentKind::ALL {
            assert!(!world.query_entities(&[kind]).contains(&monster));
        }
        assert!(output.draw_list.iter().all(|record| record.entity != monster));
    }

    #[test]
    fn test_player_slides_along_wall_and_faces_right() {
        let mut world = World::new();
        let mut atlas = FrameAtlas::new();
        let player = spawn_player(&mut world, &mut atlas, 0.0, 0.0);
        spawn_wall(&mut world, 20.0, -100.0, 32.0, 400.0);
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        let diagonal = Vec2::new(1.0, 1.0).normalize();
        for _ in 0..60 {
            scheduler.run_frame(&mut world, &FrameInput { movement: diagonal, attack: false }, DT);
        }

        let transform = world.get_component::<Transform>(player).unwrap();
        assert_eq!(transform.position.x, 4.0);
        assert!(transform.position.y > 20.0);

        let anim = world.get_component::<AnimationState>(player).unwrap();
        assert_eq!(anim.current_name(), "WALK_RIGHT");
        assert!(!anim.flip_x);
    }

    #[test]
    fn test_walking_left_mirrors_right_clip() {
        let mut world = World::new();
        let mut atlas = FrameAtlas::new();
        let player = spawn_player(&mut world, &mut atlas, 100.0, 80.0);
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        let output = scheduler.run_frame(
            &mut world,
            &FrameInput { movement: Vec2::new(-1.0, 0.0), attack: false },
            DT,
        );

        let record = output.draw_list.iter().find(|r| r.entity == player).unwrap();
        assert!(record.flip_x);
        assert_eq!(
            world.get_component::<AnimationState>(player).unwrap().current_name(),
            "WALK_RIGHT"
        );

        let output = scheduler.run_frame(&mut world, &FrameInput::default(), DT);
        let record = output.draw_list.iter().find(|r| r.entity == player).unwrap();
        assert!(record.flip_x, "idle keeps the last facing");
    }

    #[test]
    fn test_draw_order_is_stable_across_frames() {
        let mut world = World::new();
        let mut atlas = FrameAtlas::new();
        let mut sprites = Vec::new();
        for i in 0..5 {
            let entity = world.create_entity();
            world.add_component(entity, Transform::new(i as f32 * 20.0, 50.0, 16.0, 16.0));
            world.add_component(entity, flipbook(&mut atlas, &["IDLE_DOWN"]));
            sprites.push(entity);
        }
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        for _ in 0..10 {
            let output = scheduler.run_frame(&mut world, &FrameInput::default(), DT);
            let order: Vec<Entity> = output.draw_list.iter().map(|r| r.entity).collect();
            assert_eq!(order, sprites);
        }
    }
}

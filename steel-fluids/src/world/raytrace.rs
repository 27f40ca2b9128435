//! Block raytracing along the player's line of sight.

use steel_registry::blocks::BlockRegistry;
use steel_utils::{BlockPos, Direction, math::Vector3};

use super::World;
use crate::behavior::context::BlockHitResult;
use crate::player::Player;

/// How far a player reaches when using an item on a block.
///
/// This is not the same as the block interaction range of the player entity.
pub const BLOCK_INTERACTION_RANGE: f64 = 4.5;

/// Which liquids stop a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipFluid {
    /// Liquids are transparent.
    None,
    /// Liquid source blocks stop the ray, flowing liquid doesn't.
    SourceOnly,
    /// Any liquid stops the ray.
    Any,
}

/// Returns the eye position and the point `BLOCK_INTERACTION_RANGE` blocks
/// along the player's view.
#[must_use]
pub fn get_start_and_end_pos(player: &dyn Player) -> (Vector3<f64>, Vector3<f64>) {
    let start_pos = player.eye_position();
    let (yaw, pitch) = player.rotation();
    let (yaw_rad, pitch_rad) = (
        f64::from(yaw.to_radians()),
        f64::from(pitch.to_radians()),
    );
    let direction = Vector3::new(
        -yaw_rad.sin() * pitch_rad.cos() * BLOCK_INTERACTION_RANGE,
        -pitch_rad.sin() * BLOCK_INTERACTION_RANGE,
        pitch_rad.cos() * yaw_rad.cos() * BLOCK_INTERACTION_RANGE,
    );

    let end_pos = start_pos.add(&direction);
    (start_pos, end_pos)
}

/// Walks the blocks between `start` and `end` and returns the first one that
/// stops the ray.
///
/// Air never stops the ray, liquids stop it according to `fluid`, every other
/// block does.
#[must_use]
pub fn clip(
    world: &dyn World,
    blocks: &BlockRegistry,
    start: Vector3<f64>,
    end: Vector3<f64>,
    fluid: ClipFluid,
) -> Option<BlockHitResult> {
    let delta = end.sub(&start);
    let mut pos = BlockPos::containing(start);

    let step = Vector3::new(signum(delta.x), signum(delta.y), signum(delta.z));
    let t_delta = Vector3::new(
        axis_delta(delta.x),
        axis_delta(delta.y),
        axis_delta(delta.z),
    );
    let mut t_max = Vector3::new(
        first_crossing(start.x, delta.x, pos.x()),
        first_crossing(start.y, delta.y, pos.y()),
        first_crossing(start.z, delta.z, pos.z()),
    );

    // The block the ray starts in is hit on the face pointing back at the viewer.
    let mut face = Direction::nearest(-delta.x, -delta.y, -delta.z);
    let mut t = 0.0;

    loop {
        if stops_ray(world, blocks, &pos, fluid) {
            return Some(BlockHitResult {
                block_pos: pos,
                direction: face,
                location: start.add(&delta.scale(t)),
            });
        }

        if t_max.x <= t_max.y && t_max.x <= t_max.z {
            t = t_max.x;
            t_max.x += t_delta.x;
            pos = pos.offset(step.x, 0, 0);
            face = if step.x > 0 { Direction::West } else { Direction::East };
        } else if t_max.y <= t_max.z {
            t = t_max.y;
            t_max.y += t_delta.y;
            pos = pos.offset(0, step.y, 0);
            face = if step.y > 0 { Direction::Down } else { Direction::Up };
        } else {
            t = t_max.z;
            t_max.z += t_delta.z;
            pos = pos.offset(0, 0, step.z);
            face = if step.z > 0 { Direction::North } else { Direction::South };
        }

        if t > 1.0 {
            return None;
        }
    }
}

fn stops_ray(world: &dyn World, blocks: &BlockRegistry, pos: &BlockPos, fluid: ClipFluid) -> bool {
    let state = world.get_block_state(pos);
    let config = blocks.config(&state.block);
    if config.is_air {
        return false;
    }
    if config.liquid {
        return match fluid {
            ClipFluid::None => false,
            ClipFluid::SourceOnly => state.is_source(),
            ClipFluid::Any => true,
        };
    }
    true
}

fn signum(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// The ray parameter needed to cross one whole block along an axis.
fn axis_delta(delta: f64) -> f64 {
    if delta == 0.0 {
        f64::INFINITY
    } else {
        1.0 / delta.abs()
    }
}

/// The ray parameter at which the ray first leaves `block` along an axis.
fn first_crossing(start: f64, delta: f64, block: i32) -> f64 {
    if delta > 0.0 {
        (f64::from(block) + 1.0 - start) / delta
    } else if delta < 0.0 {
        (f64::from(block) - start) / delta
    } else {
        f64::INFINITY
    }
}

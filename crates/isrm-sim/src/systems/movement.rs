//! Kinematic integration: position += velocity * dt, with elastic wall
//! reflection, then age increment. Agents already marked for removal
//! this tick do not move or age.
//!
//! Reflection sets the velocity component to point back into bounds and
//! clamps the position onto the wall, so positions never leave
//! [0,width] x [0,height] after the system runs.

use hecs::{Entity, World};

use isrm_core::components::Lifetime;
use isrm_core::enums::RemovalCause;
use isrm_core::types::{Position, Velocity};

pub fn run(
    world: &mut World,
    roster: &[Entity],
    doomed: &[(Entity, RemovalCause)],
    width: f64,
    height: f64,
    dt: f64,
) {
    for &entity in roster {
        if doomed.iter().any(|(e, _)| *e == entity) {
            continue;
        }
        let Ok((pos, vel, lifetime)) =
            world.query_one_mut::<(&mut Position, &mut Velocity, &mut Lifetime)>(entity)
        else {
            continue;
        };

        pos.x += vel.dx * dt;
        pos.y += vel.dy * dt;

        if pos.x < 0.0 {
            vel.dx = vel.dx.abs();
        } else if pos.x > width {
            vel.dx = -vel.dx.abs();
        }
        if pos.y < 0.0 {
            vel.dy = vel.dy.abs();
        } else if pos.y > height {
            vel.dy = -vel.dy.abs();
        }
        pos.x = pos.x.clamp(0.0, width);
        pos.y = pos.y.clamp(0.0, height);

        lifetime.age += 1;
    }
}

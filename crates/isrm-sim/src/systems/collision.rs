//! Pairwise collision detection.
//!
//! O(n^2) over the live population, which is acceptable at the sizes
//! the spawn policy produces. Each unordered colliding pair records one
//! danger-map increment at the lower-slot (acting) agent's position;
//! transient participants are marked for removal. Agents already marked
//! earlier in the tick take no part.

use hecs::{Entity, World};

use isrm_core::components::{AgentId, Body};
use isrm_core::enums::{AgentKind, RemovalCause};
use isrm_core::events::SimEvent;
use isrm_core::types::Position;
use isrm_policy::DangerMap;

struct Contact {
    entity: Entity,
    id: AgentId,
    position: Position,
    radius: f64,
    kind: AgentKind,
}

pub fn run(
    world: &World,
    roster: &[Entity],
    doomed: &mut Vec<(Entity, RemovalCause)>,
    danger_map: &mut DangerMap,
    events: &mut Vec<SimEvent>,
) {
    let mut live: Vec<Contact> = Vec::with_capacity(roster.len());
    for &entity in roster {
        if doomed.iter().any(|(e, _)| *e == entity) {
            continue;
        }
        let Ok(mut query) =
            world.query_one::<(&AgentId, &Position, &Body, &AgentKind)>(entity)
        else {
            continue;
        };
        if let Some((id, pos, body, kind)) = query.get() {
            live.push(Contact {
                entity,
                id: *id,
                position: *pos,
                radius: body.radius,
                kind: *kind,
            });
        }
    }

    for i in 0..live.len() {
        for j in (i + 1)..live.len() {
            let (a, b) = (&live[i], &live[j]);
            if a.position.distance_to(&b.position) >= a.radius + b.radius {
                continue;
            }

            danger_map.record(&a.position);
            events.push(SimEvent::Collision { a: a.id, b: b.id });

            for contact in [a, b] {
                if contact.kind == AgentKind::Transient
                    && !doomed.iter().any(|(e, _)| *e == contact.entity)
                {
                    doomed.push((contact.entity, RemovalCause::Collision));
                }
            }
        }
    }
}

//! Snapshot system: builds a complete SimSnapshot from the world.
//!
//! Read-only — it never modifies the world. Views come out in roster
//! (insertion) order so the host can render stably.

use hecs::{Entity, World};

use isrm_core::components::{AgentId, Body, LastUtility, Lifetime, Signals};
use isrm_core::enums::AgentKind;
use isrm_core::events::SimEvent;
use isrm_core::state::{AgentView, SimSnapshot};
use isrm_core::types::Position;

pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    frame: u64,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let mut agents = Vec::with_capacity(roster.len());
    for &entity in roster {
        let Ok(mut query) = world.query_one::<(
            &AgentId,
            &Position,
            &Body,
            &AgentKind,
            &Signals,
            &Lifetime,
            &LastUtility,
        )>(entity) else {
            continue;
        };
        if let Some((id, pos, body, kind, signals, lifetime, utility)) = query.get() {
            agents.push(AgentView {
                id: *id,
                position: *pos,
                radius: body.radius,
                kind: *kind,
                utility: utility.0,
                energy: signals.energy,
                salience: signals.salience,
                age: lifetime.age,
            });
        }
    }

    SimSnapshot {
        frame,
        agents,
        events,
    }
}

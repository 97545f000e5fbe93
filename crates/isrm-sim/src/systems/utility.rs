//! Utility system: computes U for every agent in roster order and marks
//! collapsed or expired transients for removal.
//!
//! U depends on the global frame counter and the agent's roster slot,
//! not on position, so evaluating the whole roster before any movement
//! matches the per-agent interleaving of the original loop exactly.

use hecs::{Entity, World};

use isrm_core::components::{LastUtility, Lifetime, Signals};
use isrm_core::enums::{AgentKind, RemovalCause};
use isrm_policy::{CollapseAction, DecisionPolicy};

/// Compute utility, mark removals, then apply salience decay to the
/// surviving agents.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    policy: &dyn DecisionPolicy,
    frame: u64,
    salience_decay: f64,
    doomed: &mut Vec<(Entity, RemovalCause)>,
) {
    for (slot, &entity) in roster.iter().enumerate() {
        let Ok((kind, signals, lifetime, last_utility)) = world.query_one_mut::<(
            &AgentKind,
            &mut Signals,
            &Lifetime,
            &mut LastUtility,
        )>(entity) else {
            continue;
        };

        let utility = policy.utility(signals, frame, slot);
        last_utility.0 = utility;

        if policy.collapse_action(*kind) == CollapseAction::Remove {
            if utility <= 0.0 {
                doomed.push((entity, RemovalCause::UtilityCollapse));
                continue;
            }
            if lifetime.expired() {
                doomed.push((entity, RemovalCause::LifespanExceeded));
                continue;
            }
        }

        signals.salience *= salience_decay;
        signals.clamp();
    }
}

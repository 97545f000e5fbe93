use isrm_core::components::Signals;
use isrm_core::enums::AgentKind;
use isrm_core::types::Position;

use crate::steering::{DangerMap, DIRECTIONS};
use crate::utility::{CoherencePolicy, CollapseAction, DecisionPolicy};

// ---- Utility ----

#[test]
fn test_delta_coherence_bounded() {
    let policy = CoherencePolicy::default();
    for frame in 0..2000 {
        for slot in 0..5 {
            let delta_c = policy.delta_coherence(frame, slot);
            assert!(
                (0.0..=1.0).contains(&delta_c),
                "delta_coherence out of [0,1] at frame {frame}: {delta_c}"
            );
        }
    }
}

#[test]
fn test_utility_clamped_non_negative() {
    let policy = CoherencePolicy::default();
    // Max energy, zero salience: raw U is negative over most of the cycle.
    let signals = Signals {
        energy: 1.0,
        salience: 0.0,
    };
    for frame in 0..1000 {
        assert!(policy.utility(&signals, frame, 0) >= 0.0);
    }
}

#[test]
fn test_utility_formula() {
    let policy = CoherencePolicy::default();
    let signals = Signals {
        energy: 0.2,
        salience: 0.3,
    };
    // At frame 0, slot 0: sin(0) = 0, delta_c = base = 0.5.
    let expected = 0.5 - 0.2 + 0.3;
    assert!((policy.utility(&signals, 0, 0) - expected).abs() < 1e-12);
}

#[test]
fn test_slot_offsets_phase() {
    let policy = CoherencePolicy::default();
    // (frame + slot) means slot k at frame f matches slot 0 at frame f+k.
    assert_eq!(
        policy.delta_coherence(100, 3).to_bits(),
        policy.delta_coherence(103, 0).to_bits()
    );
}

#[test]
fn test_collapse_action_by_kind() {
    let policy = CoherencePolicy::default();
    assert_eq!(
        policy.collapse_action(AgentKind::Transient),
        CollapseAction::Remove
    );
    assert_eq!(
        policy.collapse_action(AgentKind::Persistent),
        CollapseAction::Spare
    );
}

// ---- Danger map ----

#[test]
fn test_record_accumulates_per_cell() {
    let mut map = DangerMap::new(20.0);
    let pos = Position::new(45.0, 45.0);
    map.record(&pos);
    map.record(&pos);
    // Same cell even though the exact point differs.
    map.record(&Position::new(59.9, 40.0));

    let cell = map.cell_for(&pos);
    assert_eq!(map.threat_at(&cell), 3);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_safest_direction_tie_break() {
    let map = DangerMap::new(20.0);
    // Empty map: every neighbor ties at zero, first direction wins.
    assert_eq!(map.safest_direction(&Position::new(100.0, 100.0)), DIRECTIONS[0]);
}

#[test]
fn test_safest_direction_avoids_threat() {
    let mut map = DangerMap::new(20.0);
    let pos = Position::new(100.0, 100.0); // cell (5, 5)

    // Poison every neighbor except (-1, 1).
    for (dx, dy) in DIRECTIONS {
        if (dx, dy) == (-1, 1) {
            continue;
        }
        let neighbor = Position::new(100.0 + dx as f64 * 20.0, 100.0 + dy as f64 * 20.0);
        map.record(&neighbor);
    }

    assert_eq!(map.safest_direction(&pos), (-1, 1));
}

#[test]
fn test_cells_never_evicted() {
    let mut map = DangerMap::new(20.0);
    for i in 0..100 {
        map.record(&Position::new(i as f64 * 20.0, 0.0));
    }
    assert_eq!(map.len(), 100);
}

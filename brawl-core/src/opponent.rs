//! Hand-weighted model of what the other side is likely to do next.
//!
//! Only the expectimax engine consumes this. Weights are situational, not
//! learned: they encode how players at this level actually behave at each
//! range band.

use crate::constants::{JUMP_SCARE_RANGE, MELEE_RANGE, PRESSURE_RANGE};
use crate::state::{Action, AttackKind, FighterState};

/// Plausible next actions for `foe`, as `(action, probability)` pairs
/// sorted most likely first, truncated to `top_k`, and renormalized so the
/// kept entries always sum to 1. An empty weighting (including `top_k` of
/// 0) collapses to certain idle.
pub fn opponent_distribution(
    foe: &FighterState,
    me: &FighterState,
    top_k: usize,
) -> Vec<(Action, f64)> {
    let gap = foe.gap_to(me);
    let toward = foe.facing(me);
    let away = toward.opposite();

    let approach = Action {
        movement: Some(toward),
        ..Action::idle()
    };
    let retreat = Action {
        movement: Some(away),
        ..Action::idle()
    };
    let leap = Action {
        jump: true,
        ..Action::idle()
    };
    let dash_in = Action {
        dash: Some(toward),
        ..Action::idle()
    };

    let mut weighted: Vec<(Action, f64)> = Vec::with_capacity(7);

    if gap > PRESSURE_RANGE {
        weighted.push((approach, 0.65));
        weighted.push((Action::idle(), 0.10));
        weighted.push((retreat, 0.05));
    } else {
        weighted.push((approach, 0.30));
        weighted.push((retreat, 0.15));
        weighted.push((Action::idle(), 0.10));
    }

    if gap < MELEE_RANGE {
        if foe.light_cooldown == 0 {
            weighted.push((
                Action {
                    attack: Some(AttackKind::Light),
                    ..Action::idle()
                },
                0.35,
            ));
        }
        if foe.heavy_cooldown == 0 {
            weighted.push((
                Action {
                    attack: Some(AttackKind::Heavy),
                    ..Action::idle()
                },
                0.15,
            ));
        }
    }

    if gap < JUMP_SCARE_RANGE {
        weighted.push((leap, 0.08));
    }

    if foe.dash_cooldown == 0 && gap > JUMP_SCARE_RANGE {
        weighted.push((dash_in, 0.10));
    }

    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return vec![(Action::idle(), 1.0)];
    }
    for entry in &mut weighted {
        entry.1 /= total;
    }

    // Stable sort: equal weights keep their insertion order.
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.truncate(top_k);
    if weighted.is_empty() {
        return vec![(Action::idle(), 1.0)];
    }

    let kept: f64 = weighted.iter().map(|(_, p)| p).sum();
    for entry in &mut weighted {
        entry.1 /= kept;
    }
    weighted
}

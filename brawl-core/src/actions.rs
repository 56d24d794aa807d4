//! Candidate enumeration for one side of the duel.

use crate::state::{Action, AttackKind, FighterState};

/// Every action worth considering for `actor` this frame, in a fixed order.
///
/// The order doubles as the tie-break: search keeps the first candidate that
/// reaches the best score, so idle wins exact ties and dashes lose them.
/// Dash candidates appear only while the dash is ready.
pub fn candidate_actions(actor: &FighterState, foe: &FighterState) -> Vec<Action> {
    let toward = actor.facing(foe);
    let away = toward.opposite();

    let mut actions = Vec::with_capacity(8);
    actions.push(Action::idle());
    actions.push(Action {
        movement: Some(toward),
        ..Action::idle()
    });
    actions.push(Action {
        movement: Some(away),
        ..Action::idle()
    });
    actions.push(Action {
        attack: Some(AttackKind::Light),
        ..Action::idle()
    });
    actions.push(Action {
        attack: Some(AttackKind::Heavy),
        ..Action::idle()
    });
    actions.push(Action {
        jump: true,
        ..Action::idle()
    });
    if actor.dash_cooldown == 0 {
        actions.push(Action {
            dash: Some(toward),
            ..Action::idle()
        });
        actions.push(Action {
            dash: Some(away),
            ..Action::idle()
        });
    }
    actions
}

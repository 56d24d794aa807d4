//! Axis-aligned rectangle math for bodies and attack hitboxes.

use crate::constants::{FIGHTER_HEIGHT, FIGHTER_WIDTH};
use crate::state::{Direction, FighterState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Body box, centered on the fighter.
pub fn body_rect(fighter: &FighterState) -> Rect {
    Rect::new(
        fighter.x - FIGHTER_WIDTH / 2.0,
        fighter.y - FIGHTER_HEIGHT / 2.0,
        FIGHTER_WIDTH,
        FIGHTER_HEIGHT,
    )
}

/// Active hitbox for an attack this frame: a body-sized box hanging off the
/// attacker's center x on the side the defender is on.
pub fn attack_rect(attacker: &FighterState, defender: &FighterState) -> Rect {
    let left = match attacker.facing(defender) {
        Direction::Right => attacker.x,
        Direction::Left => attacker.x - FIGHTER_WIDTH,
    };
    Rect::new(
        left,
        attacker.y - FIGHTER_HEIGHT / 2.0,
        FIGHTER_WIDTH,
        FIGHTER_HEIGHT,
    )
}

/// Range is purely geometric: would a swing started right now connect.
pub fn in_attack_range(attacker: &FighterState, defender: &FighterState) -> bool {
    attack_rect(attacker, defender).overlaps(&body_rect(defender))
}

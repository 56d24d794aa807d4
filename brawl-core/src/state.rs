//! Value types shared by the simulator, search, and decision policy.
//!
//! Both combatants are plain `Copy` snapshots. The live states handed in
//! each frame are never mutated; every simulated branch works on copies.

use serde::{Deserialize, Serialize};

/// Horizontal direction for moves and dashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    Light,
    Heavy,
}

/// One combatant, as reported at the start of a frame or produced by a
/// simulated step. Positions are center coordinates; smaller `y` is higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FighterState {
    pub x: f64,
    pub y: f64,
    /// Clamped at 0; 0 means knocked out.
    pub health: i32,
    /// Frames until the light attack is ready again (0 = ready).
    pub light_cooldown: i32,
    /// Frames until the heavy attack is ready again (0 = ready).
    pub heavy_cooldown: i32,
    /// Frames until the dash is ready again (0 = ready).
    pub dash_cooldown: i32,
    /// True only during the frame an attack was issued.
    pub attacking: bool,
    /// Airborne flag. Reported by the caller for the live state; on
    /// simulated copies it mirrors the acting side's jump choice.
    pub airborne: bool,
}

impl FighterState {
    /// Fresh grounded fighter with every cooldown ready.
    pub fn new(x: f64, y: f64, health: i32) -> Self {
        Self {
            x,
            y,
            health,
            light_cooldown: 0,
            heavy_cooldown: 0,
            dash_cooldown: 0,
            attacking: false,
            airborne: false,
        }
    }

    /// Direction toward the foe. A foe at the exact same x reads as left.
    pub fn facing(&self, foe: &FighterState) -> Direction {
        if foe.x > self.x {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Horizontal separation, center to center.
    pub fn gap_to(&self, foe: &FighterState) -> f64 {
        (foe.x - self.x).abs()
    }

    pub fn knocked_out(&self) -> bool {
        self.health <= 0
    }
}

/// One frame's worth of intent. Fields combine freely; the simulator's
/// cooldown gates decide which of them actually take effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub movement: Option<Direction>,
    pub attack: Option<AttackKind>,
    pub jump: bool,
    pub dash: Option<Direction>,
}

impl Action {
    pub const fn idle() -> Self {
        Self {
            movement: None,
            attack: None,
            jump: false,
            dash: None,
        }
    }

    /// True when no field does anything.
    pub fn is_idle(&self) -> bool {
        *self == Self::idle()
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::idle()
    }
}

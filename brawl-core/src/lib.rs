//! Brawl core - deterministic decision engine for a 1v1 fighting game.
//!
//! This crate contains the full per-frame pipeline: snapshot types, the
//! forward simulation, the board evaluator, the opponent model, the
//! adversarial search, the decision policy that wraps it, and the JSON
//! line codec the match harness speaks.

pub mod actions;
pub mod constants;
pub mod eval;
pub mod geometry;
pub mod opponent;
pub mod policy;
pub mod protocol;
pub mod search;
pub mod sim;
pub mod state;

pub use actions::candidate_actions;
pub use eval::EvalWeights;
pub use geometry::in_attack_range;
pub use opponent::opponent_distribution;
pub use policy::{DecisionEngine, EngineConfig};
pub use protocol::{decode_request, encode_response, no_op_line, FrameRequest};
pub use search::{choose_expectimax, choose_minimax, SearchKind};
pub use sim::step;
pub use state::{Action, AttackKind, Direction, FighterState};

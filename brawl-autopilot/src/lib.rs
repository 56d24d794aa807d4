pub mod arena;
pub mod benchmark;
pub mod roster;
pub mod runner;

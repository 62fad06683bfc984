//! Core simulation for the Iterated Prisoner's Dilemma
//!
//! Two agents repeatedly choose to cooperate or defect; each agent's next
//! move comes from a pluggable strategy that observes the full interleaved
//! move history. This crate holds the strategy catalog and the round
//! engine, and nothing else: rendering, input, and strategy selection are
//! collaborators that call in from outside. It is compiled to:
//! - Native (for drivers and tests)
//! - WASM (for frontend simulation, behind the `wasm` feature)

mod game;
mod history;
mod random;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use game::{play_rounds, step};
pub use history::{moves_from_str, moves_to_string, opponent_view, Move, ParseMoveError};
pub use random::{CoinFlip, EntropyCoin, SeededRng};
pub use strategy::{
    AlwaysCooperate, AlwaysDefect, Fixed, Forgive, GrimTrigger, Random, Strategy, StrategySpec,
    TitForTat,
};

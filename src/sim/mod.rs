//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod lane;
pub mod rect;
pub mod state;
pub mod tick;

pub use lane::Lane;
pub use rect::Rect;
pub use state::{overlapping, Coin, Entity, EntityRegistry, GamePhase, GameState, Player, Train};
pub use tick::{tick, TickInput};

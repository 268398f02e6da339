//! Placement search and session driver
//!
//! Sits on top of `tetrai-core` and never mutates a live game while searching:
//! every candidate is simulated on a copy of the grid.
//!
//! # Module Structure
//!
//! - [`features`]: grid features (aggregate height, holes, bumpiness)
//! - [`weights`]: heuristic weights, loadable from JSON
//! - [`search`]: enumerate, simulate and rank every placement of a piece
//! - [`session`]: per-tick driver that caches one plan per piece and steers in assisted mode
//!
//! # Example
//!
//! ```
//! use tetrai_core::GameState;
//! use tetrai_engine::PlacementSearch;
//!
//! let mut game = GameState::new(7);
//! game.start();
//!
//! let search = PlacementSearch::default();
//! let outcome = search.plan(&game).unwrap();
//! assert!(outcome.best.score >= outcome.worst.score);
//! ```

pub mod features;
pub mod search;
pub mod session;
pub mod weights;

pub use features::BoardFeatures;
pub use search::{simulate, BoardState, Placement, PlacementSearch, SearchConfig, SearchOutcome};
pub use session::{Session, TickOutcome, MAX_ROTATIONS_PER_TICK, MAX_SHIFTS_PER_TICK};
pub use weights::{SearchWeights, WeightsError};

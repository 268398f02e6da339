//! tetrai (workspace facade crate).
//!
//! Re-exports the member crates under `tetrai::{core,engine,types}` so the
//! runner, integration tests and benches share one import path.

pub use tetrai_core as core;
pub use tetrai_engine as engine;
pub use tetrai_types as types;

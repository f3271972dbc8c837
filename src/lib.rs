//! Neon Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `neon_snake::{core,engine,input,term,types,wallet}`
//! so the binary, integration tests and benchmarks share one import path.

pub use neon_snake_core as core;
pub use neon_snake_engine as engine;
pub use neon_snake_input as input;
pub use neon_snake_term as term;
pub use neon_snake_types as types;
pub use neon_snake_wallet as wallet;

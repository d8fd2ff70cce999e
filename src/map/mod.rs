//! Persistent world occupancy map.
//!
//! - [`WorldMap`]: fixed square grid, three monotonic counter channels
//! - [`accumulate`]: per-tick, attitude-gated counter integration

mod storage;
mod update;

pub use storage::WorldMap;
pub use update::{accumulate, AccumulateResult, MapConfig};
